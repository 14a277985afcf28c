use std::time::Duration;

use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;

use gantry_core::{RunHandle, StatusAccessor};

use crate::error::{format_err_chain, WaitError};
use crate::outcome::{classify, Progress, WaitOutcome};

/// Poll the accessor until the run settles.
///
/// Terminates via exactly one of: terminal state reached, unconfirmed
/// reached, budget exhausted, cancellation, or accessor error. The token is
/// checked before every fetch and raced against every sleep, so
/// cancellation latency stays below one poll interval.
///
/// At least one poll always happens, even with a zero budget: the deadline
/// governs whether the loop continues, not whether it starts. The loop
/// never sleeps past the deadline.
pub async fn poll_until_settled(
    accessor: &dyn StatusAccessor,
    run: &RunHandle,
    interval: Duration,
    budget: Duration,
    cancel: &CancellationToken,
) -> Result<WaitOutcome, WaitError> {
    let started = Instant::now();
    let deadline = started + budget;
    let mut last_state: Option<String> = None;

    loop {
        if cancel.is_cancelled() {
            return Ok(WaitOutcome::Cancelled { last_state });
        }

        let status = accessor.fetch(run).await.map_err(|e| WaitError::Accessor {
            run: run.clone(),
            message: format_err_chain(e.as_ref()),
        })?;

        tracing::debug!(
            run = %run,
            state = %status.state,
            finished = status.finished,
            "polled run status"
        );

        match classify(&status) {
            Progress::Terminal(state) => return Ok(WaitOutcome::Terminal(state)),
            Progress::Unconfirmed => return Ok(WaitOutcome::Unconfirmed),
            Progress::Running => last_state = Some(status.state),
        }

        let now = Instant::now();
        if now >= deadline {
            return Ok(WaitOutcome::TimedOut {
                last_state,
                elapsed: started.elapsed(),
            });
        }

        let tick = interval.min(deadline - now);
        tokio::select! {
            _ = cancel.cancelled() => {
                return Ok(WaitOutcome::Cancelled { last_state });
            }
            _ = sleep(tick) => {}
        }

        if Instant::now() >= deadline {
            return Ok(WaitOutcome::TimedOut {
                last_state,
                elapsed: started.elapsed(),
            });
        }
    }
}
