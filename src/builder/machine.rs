//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Root, State, StateHistory};
use crate::machine::{DispatchLock, NoLock, StateMachine};
use std::any::type_name;

/// Builder for constructing running state machines with a fluent API.
pub struct MachineBuilder<S, L = NoLock>
where
    S: State<Parent = Root>,
    L: DispatchLock,
{
    name: Option<String>,
    lock: L,
    history: Option<usize>,
    initial: Option<S>,
    payload: Option<S::Payload>,
}

impl<S: State<Parent = Root>> MachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            name: None,
            lock: NoLock,
            history: None,
            initial: None,
            payload: None,
        }
    }
}

impl<S, L> MachineBuilder<S, L>
where
    S: State<Parent = Root>,
    L: DispatchLock,
{
    /// Label used in log events (defaults to the family's type name).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Guard each dispatch with `lock`.
    pub fn lock<M: DispatchLock>(self, lock: M) -> MachineBuilder<S, M> {
        MachineBuilder {
            name: self.name,
            lock,
            history: self.history,
            initial: self.initial,
            payload: self.payload,
        }
    }

    /// Keep the last `limit` transitions.
    pub fn history(mut self, limit: usize) -> Self {
        self.history = Some(limit);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the payload handed to the initial state (required).
    pub fn payload(mut self, payload: S::Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Build and initialize the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<StateMachine<S, L>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let payload = self.payload.ok_or(BuildError::MissingPayload)?;

        let label = self
            .name
            .unwrap_or_else(|| type_name::<S>().to_string());
        let history = self.history.map(StateHistory::bounded);

        let mut machine = StateMachine::configured(label, self.lock, history);
        machine.initialize(initial, payload)?;
        Ok(machine)
    }
}

impl<S: State<Parent = Root>> Default for MachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
