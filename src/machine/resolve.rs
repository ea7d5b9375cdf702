//! Transition resolution shared by root and nested machines.

use crate::core::{Response, State, StateHistory, StateTransition, Transition};
use std::mem;
use tracing::trace;

/// Where a resolution loop stopped.
pub(crate) enum Resolution<S: State> {
    /// The current state requested nothing further.
    Settled,

    /// The current state asked to leave the family; the caller carries it out.
    Escaped(Transition<S::Parent, S::Payload>),
}

/// Carry out `response` and every transition chained from entry hooks.
///
/// Each hop runs, in order: exit of the current state, swap in the target,
/// the transition action (old state still alive), drop of the old state,
/// entry of the new state. `chained` marks whether `response` itself came
/// from an entry hook.
pub(crate) fn resolve<S: State>(
    current: &mut S,
    payload: &mut S::Payload,
    mut response: Response<S>,
    mut chained: bool,
    machine: &str,
    mut history: Option<&mut StateHistory>,
) -> Resolution<S> {
    loop {
        let transition = match response {
            Response::Handled | Response::Unhandled => return Resolution::Settled,
            Response::Escape(escape) => {
                trace!(machine, from = current.name(), "escaping composite state");
                return Resolution::Escaped(escape);
            }
            Response::Transition(transition) => transition,
        };

        let (target, action) = transition.into_parts();
        current.on_exit(payload);

        let previous = mem::replace(current, target);
        if let Some(action) = action {
            action(payload);
        }

        trace!(
            machine,
            from = previous.name(),
            to = current.name(),
            chained,
            "transition"
        );
        if let Some(history) = history.as_deref_mut() {
            history.record(StateTransition::new(previous.name(), current.name(), chained));
        }
        drop(previous);

        response = current.on_entry(payload);
        chained = true;
    }
}
