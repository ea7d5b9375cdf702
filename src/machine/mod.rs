//! Machines that drive state families.
//!
//! # Key Concepts
//!
//! - **StateMachine**: owns the current state and the payload, dispatches events
//! - **NestedMachine**: lives inside a composite state and shares its payload
//! - **DispatchLock**: optional critical section around each dispatch
//!
//! Both machines follow the same protocol for every transition: exit the
//! current state, swap in the target, run the transition action, enter the
//! target, and repeat while entry hooks keep requesting transitions.

mod error;
mod lock;
#[allow(clippy::module_inception)]
mod machine;
mod nested;
mod resolve;

pub use error::FsmError;
pub use lock::{DispatchLock, MutexLock, NoLock};
pub use machine::StateMachine;
pub use nested::NestedMachine;
