//! Builder API for configuring and starting state machines.
//!
//! # Example
//!
//! ```
//! use handoff::builder::MachineBuilder;
//! use handoff::{Root, State};
//!
//! enum Phase {
//!     Boot,
//! }
//!
//! impl State for Phase {
//!     type Payload = Vec<u8>;
//!     type Parent = Root;
//!
//!     fn name(&self) -> &str {
//!         "Boot"
//!     }
//! }
//!
//! let machine = MachineBuilder::new()
//!     .name("boot")
//!     .history(16)
//!     .initial(Phase::Boot)
//!     .payload(Vec::new())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(machine.current_state_name(), Some("Boot"));
//! ```

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::MachineBuilder;
