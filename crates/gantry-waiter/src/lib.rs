//! gantry-waiter
//!
//! Tracks asynchronously executed Gantry runs to completion. Library
//! consumed by the provider plugin's resource layer: the plugin triggers a
//! run, then hands the run identity here to be watched.
//!
//! Public API:
//! - `WaitConfig` / `WaitPolicy` — caller-facing wait configuration
//! - `wait_for_run()` — poll a run until it settles, then apply the policy
//! - `poll_until_settled()` — the bare polling loop, for callers that want
//!   to translate outcomes themselves

pub mod error;
pub mod outcome;
pub mod policy;
pub mod poll;

pub use crate::error::WaitError;
pub use crate::outcome::{classify, Progress, WaitOutcome};
pub use crate::policy::{WaitConfig, WaitPolicy};
pub use crate::poll::poll_until_settled;

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use gantry_core::{RunHandle, StatusAccessor};

/// Cadence of status polls. Tuned for run durations in the minutes range;
/// not caller-configurable.
const POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Wait for a run to settle and apply the caller's policy.
///
/// `budget` bounds the total wait; whether exhausting it is an error is the
/// policy's `continue_on_timeout` call. Cancelling `cancel` always aborts
/// the wait with `WaitError::Cancelled`, regardless of policy. A user abort
/// is never converted into success.
pub async fn wait_for_run(
    accessor: &dyn StatusAccessor,
    run: &RunHandle,
    config: Option<WaitConfig>,
    budget: Duration,
    cancel: &CancellationToken,
) -> Result<(), WaitError> {
    let policy = WaitPolicy::from_config(config);

    if policy.disabled {
        tracing::debug!(run = %run, "waiting disabled, treating run as accepted");
        return Ok(());
    }

    match poll::poll_until_settled(accessor, run, POLL_INTERVAL, budget, cancel).await? {
        WaitOutcome::Unconfirmed => {
            tracing::info!(run = %run, "run is awaiting confirmation");
            Ok(())
        }
        WaitOutcome::Terminal(state) if policy.accepts(&state) => {
            tracing::info!(run = %run, state = %state, "run reached an accepted state");
            Ok(())
        }
        WaitOutcome::Terminal(state) => Err(WaitError::UnexpectedState {
            run: run.clone(),
            state,
            expected: policy.expected_list(),
        }),
        WaitOutcome::TimedOut { last_state, elapsed } => {
            let last_state = last_state.unwrap_or_else(|| "unknown".into());
            if policy.continue_on_timeout {
                // Abandoning the wait, not declaring the run done.
                tracing::warn!(
                    run = %run,
                    last_state = %last_state,
                    "wait budget exhausted, continuing without the run settling"
                );
                Ok(())
            } else {
                Err(WaitError::Timeout {
                    run: run.clone(),
                    last_state,
                    elapsed_secs: elapsed.as_secs(),
                })
            }
        }
        WaitOutcome::Cancelled { last_state } => Err(WaitError::Cancelled {
            run: run.clone(),
            last_state: last_state.unwrap_or_else(|| "unknown".into()),
        }),
    }
}
