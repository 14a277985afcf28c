use thiserror::Error;

use gantry_core::RunHandle;

#[derive(Debug, Error)]
pub enum WaitError {
    #[error("status query failed for run {run}: {message}")]
    Accessor { run: RunHandle, message: String },

    #[error("run {run} did not reach a stopping state within {elapsed_secs}s (last state: {last_state})")]
    Timeout {
        run: RunHandle,
        last_state: String,
        elapsed_secs: u64,
    },

    #[error("run {run} finished in state \"{state}\", expected one of: {expected}")]
    UnexpectedState {
        run: RunHandle,
        state: String,
        expected: String,
    },

    #[error("wait for run {run} cancelled (last state: {last_state})")]
    Cancelled { run: RunHandle, last_state: String },
}

/// Walk the full error chain and join all causes into one string.
///
/// Transport errors often have terse `Display` impls (e.g. "request
/// failed") with the useful detail buried in the source chain.
pub fn format_err_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
