//! State family traits.
//!
//! A state family is one type, normally an enum, whose variants are the states
//! of a machine. The family implements [`State`] once for its hooks and
//! [`React`] once per event type it understands.

use super::response::Response;

/// Trait for a family of states sharing one payload.
///
/// Entry and exit are hooks rather than events: only the machine driving the
/// family calls them, so callers cannot submit them through `dispatch`.
///
/// # Example
///
/// ```rust
/// use handoff::{React, Response, Root, State};
///
/// struct Counter {
///     presses: u32,
/// }
///
/// enum Switch {
///     Off,
///     On,
/// }
///
/// struct Flip;
///
/// impl State for Switch {
///     type Payload = Counter;
///     type Parent = Root;
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
///
///     fn on_entry(&mut self, counter: &mut Counter) -> Response<Self> {
///         if matches!(self, Self::On) {
///             counter.presses += 1;
///         }
///         Response::Handled
///     }
/// }
///
/// impl React<Flip> for Switch {
///     fn react(&mut self, _event: &mut Flip, _counter: &mut Counter) -> Response<Self> {
///         match self {
///             Self::Off => Response::transition(Self::On),
///             Self::On => Response::transition(Self::Off),
///         }
///     }
/// }
/// ```
pub trait State: Sized {
    /// Data shared by every state of the running machine.
    type Payload;

    /// Family that escape requests target.
    ///
    /// Top-level families use [`Root`], which has no values, so they cannot
    /// request an escape at all.
    type Parent;

    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Runs once when the state becomes current.
    ///
    /// Returning a transition here chains straight into another state; the
    /// intermediate state is never reported as current.
    ///
    /// Default implementation does nothing.
    fn on_entry(&mut self, _payload: &mut Self::Payload) -> Response<Self> {
        Response::Handled
    }

    /// Runs once when the state stops being current, including teardown.
    ///
    /// Default implementation does nothing.
    fn on_exit(&mut self, _payload: &mut Self::Payload) {}
}

/// Reaction of a state family to events of type `E`.
///
/// Variants without a custom reaction should return [`Response::Unhandled`];
/// the machine logs it and leaves the state unchanged.
pub trait React<E>: State {
    /// React to `event`, optionally requesting one transition.
    fn react(&mut self, event: &mut E, payload: &mut Self::Payload) -> Response<Self>;
}

/// Parent of a top-level state family.
///
/// `Root` is uninhabited, so an escape targeting it cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Root {}
