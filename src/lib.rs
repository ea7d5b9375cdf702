//! Handoff: hierarchical, event-driven state machines with a shared payload
//!
//! A machine drives one *state family*: a type, usually an enum, whose
//! variants are the states. Each running machine owns a single payload that
//! every state works on and that is handed from state to state on each
//! transition. Callers never see it directly; they talk to the machine with
//! events and read results back out of those events.
//!
//! # Core Concepts
//!
//! - **State**: a family of states with entry/exit hooks, via the `State` trait
//! - **React**: one implementation per event type the family understands
//! - **Response**: what a reaction asks for: nothing, a transition, or an escape
//! - **StateMachine**: the root driver that owns the current state and the payload
//! - **NestedMachine**: a machine living inside one composite state
//!
//! # Transition Protocol
//!
//! When a reaction requests a transition the machine exits the current state,
//! swaps in the target, runs the optional transition action, then enters the
//! target. If the entry hook requests another transition the loop continues;
//! `dispatch` only returns once the current state is stable.
//!
//! # Example
//!
//! ```rust
//! use handoff::{React, Response, Root, State, StateMachine};
//!
//! #[derive(Default)]
//! struct Tally {
//!     visits: u32,
//! }
//!
//! enum Turnstile {
//!     Locked,
//!     Unlocked,
//! }
//!
//! struct Coin;
//! struct Push;
//!
//! impl State for Turnstile {
//!     type Payload = Tally;
//!     type Parent = Root;
//!
//!     fn name(&self) -> &str {
//!         match self {
//!             Self::Locked => "Locked",
//!             Self::Unlocked => "Unlocked",
//!         }
//!     }
//! }
//!
//! impl React<Coin> for Turnstile {
//!     fn react(&mut self, _coin: &mut Coin, _tally: &mut Tally) -> Response<Self> {
//!         match self {
//!             Self::Locked => Response::transition(Self::Unlocked),
//!             Self::Unlocked => Response::Unhandled,
//!         }
//!     }
//! }
//!
//! impl React<Push> for Turnstile {
//!     fn react(&mut self, _push: &mut Push, _tally: &mut Tally) -> Response<Self> {
//!         match self {
//!             Self::Unlocked => {
//!                 Response::transition_with(Self::Locked, |tally: &mut Tally| tally.visits += 1)
//!             }
//!             Self::Locked => Response::Unhandled,
//!         }
//!     }
//! }
//!
//! let mut gate = StateMachine::new();
//! gate.initialize(Turnstile::Locked, Tally::default()).unwrap();
//!
//! gate.dispatch(Push).unwrap();
//! assert_eq!(gate.current_state_name(), Some("Locked"));
//!
//! gate.dispatch(Coin).unwrap();
//! gate.dispatch(Push).unwrap();
//! assert_eq!(gate.current_state_name(), Some("Locked"));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder};
pub use crate::core::{
    React, Response, Root, State, StateHistory, StateTransition, Transition, TransitionAction,
};
pub use crate::machine::{
    DispatchLock, FsmError, MutexLock, NestedMachine, NoLock, StateMachine,
};
