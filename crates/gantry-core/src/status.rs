use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::run::RunHandle;

/// State label the backend reports for a run that finished cleanly.
pub const STATE_FINISHED: &str = "finished";

/// Non-terminal state meaning the run is blocked on a human confirmation
/// and will not advance on its own.
pub const STATE_UNCONFIRMED: &str = "unconfirmed";

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error surfaced by a status accessor.
///
/// Opaque to the waiter: it formats the full cause chain into its own
/// error and propagates, it never branches on the concrete type.
pub type AccessorError = Box<dyn std::error::Error + Send + Sync>;

/// One status snapshot for a run.
///
/// The state vocabulary is owned by the backend and open-ended; the waiter
/// only special-cases "unconfirmed" and the `finished` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatus {
    pub state: String,
    pub finished: bool,
}

impl RunStatus {
    pub fn new(state: impl Into<String>, finished: bool) -> Self {
        Self {
            state: state.into(),
            finished,
        }
    }
}

/// Read-side view of the backend's run status query.
///
/// Implementations must be safe to call repeatedly, safe to share across
/// concurrent waits, and return promptly. Retry of transient faults, if
/// any, belongs to the implementation; the waiter treats every error as
/// fatal for the wait.
pub trait StatusAccessor: Send + Sync {
    fn fetch<'a>(&'a self, run: &'a RunHandle) -> BoxFuture<'a, Result<RunStatus, AccessorError>>;
}
