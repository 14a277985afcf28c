//! gantry-core
//!
//! Pure domain types for tracking Gantry runs: run identity, raw status
//! snapshots, and the status-accessor seam. No transport dependency; this
//! is the vocabulary shared between the waiter and the plugin host.

pub mod run;
pub mod status;

pub use crate::run::RunHandle;
pub use crate::status::{
    AccessorError, BoxFuture, RunStatus, StatusAccessor, STATE_FINISHED, STATE_UNCONFIRMED,
};
