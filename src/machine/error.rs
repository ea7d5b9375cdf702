//! Machine usage errors.

use thiserror::Error;

/// Errors returned when a machine is driven out of order.
///
/// Other misuse (two transitions from one reaction, dispatching entry/exit,
/// targeting a state of the wrong family) does not type-check, so it has no
/// variant here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("State machine used before initialize() was called")]
    NotInitialized,

    #[error("State machine already initialized (current state '{state}'); call reset() first")]
    AlreadyInitialized { state: String },
}
