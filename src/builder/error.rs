//! Build errors for the machine builder.

use crate::machine::FsmError;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Payload not specified. Call .payload(value) before .build()")]
    MissingPayload,

    #[error(transparent)]
    Machine(#[from] FsmError),
}
