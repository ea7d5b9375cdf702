//! Core state machine vocabulary.
//!
//! This module contains the pieces a state family is written against:
//! - The `State` and `React` traits
//! - `Response` and `Transition`, the requests a reaction hands back
//! - Bounded transition history
//!
//! Nothing here drives a machine; see [`crate::machine`] for that.

mod history;
mod response;
mod state;

pub use history::{StateHistory, StateTransition};
pub use response::{Response, Transition, TransitionAction};
pub use state::{React, Root, State};
