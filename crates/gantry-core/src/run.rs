use std::fmt;

use serde::{Deserialize, Serialize};

/// Composite key identifying one run on one stack.
///
/// Opaque to the waiter: it is forwarded to the status accessor on every
/// poll and attached to errors for diagnostics, never interpreted.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct RunHandle {
    pub stack_id: String,
    pub run_id: String,
}

impl RunHandle {
    pub fn new(stack_id: impl Into<String>, run_id: impl Into<String>) -> Self {
        Self {
            stack_id: stack_id.into(),
            run_id: run_id.into(),
        }
    }
}

impl fmt::Display for RunHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.stack_id, self.run_id)
    }
}
