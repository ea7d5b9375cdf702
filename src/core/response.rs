//! Transition requests produced by reactions and entry hooks.

use super::state::State;
use std::fmt;

/// Deferred action run while a transition is in flight.
///
/// It runs after the old state's exit hook and before the new state's entry
/// hook, with the payload borrowed mutably.
pub type TransitionAction<P> = Box<dyn FnOnce(&mut P)>;

/// A pending move to `target`, with an optional action.
///
/// The target is a freshly built state value that has not been entered yet.
/// A request is consumed by the machine that carries it out.
pub struct Transition<T, P> {
    target: T,
    action: Option<TransitionAction<P>>,
}

impl<T, P> Transition<T, P> {
    /// Request a move to `target` with no action.
    pub fn new(target: T) -> Self {
        Self {
            target,
            action: None,
        }
    }

    /// Request a move to `target` that runs `action` between exit and entry.
    pub fn with_action<F>(target: T, action: F) -> Self
    where
        F: FnOnce(&mut P) + 'static,
    {
        Self {
            target,
            action: Some(Box::new(action)),
        }
    }

    /// The state that will be entered.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Whether an action is attached.
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub(crate) fn into_parts(self) -> (T, Option<TransitionAction<P>>) {
        (self.target, self.action)
    }
}

impl<T: fmt::Debug, P> fmt::Debug for Transition<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("target", &self.target)
            .field("has_action", &self.has_action())
            .finish()
    }
}

/// Outcome of a reaction or entry hook.
///
/// Exactly one response is returned per reaction, so at most one transition
/// can ever be pending at a time.
pub enum Response<S: State> {
    /// The event was consumed; stay in the current state.
    Handled,

    /// The current state has no reaction for the event; stay put.
    Unhandled,

    /// Move to another state of the same family.
    Transition(Transition<S, S::Payload>),

    /// Leave the enclosing composite state for a state of the parent family.
    Escape(Transition<S::Parent, S::Payload>),
}

impl<S: State> Response<S> {
    /// Transition to `target` within the family.
    pub fn transition(target: S) -> Self {
        Self::Transition(Transition::new(target))
    }

    /// Transition to `target`, running `action` between exit and entry.
    pub fn transition_with<F>(target: S, action: F) -> Self
    where
        F: FnOnce(&mut S::Payload) + 'static,
    {
        Self::Transition(Transition::with_action(target, action))
    }

    /// Transition out of the enclosing composite state to `target`.
    pub fn escape(target: S::Parent) -> Self {
        Self::Escape(Transition::new(target))
    }

    /// Escape to `target`, running `action` once the composite state has exited.
    pub fn escape_with<F>(target: S::Parent, action: F) -> Self
    where
        F: FnOnce(&mut S::Payload) + 'static,
    {
        Self::Escape(Transition::with_action(target, action))
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transition(_))
    }

    pub fn is_escape(&self) -> bool {
        matches!(self, Self::Escape(_))
    }

    pub fn is_unhandled(&self) -> bool {
        matches!(self, Self::Unhandled)
    }
}

impl<S> fmt::Debug for Response<S>
where
    S: State + fmt::Debug,
    S::Parent: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handled => f.write_str("Handled"),
            Self::Unhandled => f.write_str("Unhandled"),
            Self::Transition(transition) => f.debug_tuple("Transition").field(transition).finish(),
            Self::Escape(transition) => f.debug_tuple("Escape").field(transition).finish(),
        }
    }
}
