use std::time::Duration;

use gantry_core::{RunStatus, STATE_UNCONFIRMED};

/// Classification of a single status poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// Run is still making progress; keep polling.
    Running,
    /// Run is blocked on a human confirmation and will not advance on its
    /// own. A stopping state, whatever the accepted-states set says.
    Unconfirmed,
    /// Run reached a state the backend will not transition away from.
    /// Whether that state is acceptable is the policy's call, not ours.
    Terminal(String),
}

/// Map a raw status snapshot onto the three logical buckets.
///
/// `finished == true` is terminal unconditionally, even if the label
/// happens to read "unconfirmed". The finished flag is authoritative.
pub fn classify(status: &RunStatus) -> Progress {
    if status.finished {
        Progress::Terminal(status.state.clone())
    } else if status.state == STATE_UNCONFIRMED {
        Progress::Unconfirmed
    } else {
        Progress::Running
    }
}

/// How one wait invocation ended.
///
/// Exactly one of these comes out of the polling loop; once produced it is
/// never revised. `last_state` is the most recent non-terminal state
/// observed, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The run finished; carries the raw terminal state label.
    Terminal(String),
    /// The run is parked awaiting external confirmation.
    Unconfirmed,
    /// The wait budget ran out before the run settled.
    TimedOut {
        last_state: Option<String>,
        elapsed: Duration,
    },
    /// The surrounding context was cancelled mid-wait.
    Cancelled { last_state: Option<String> },
}
