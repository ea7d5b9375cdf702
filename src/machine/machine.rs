//! Root state machine that owns the current state and the payload.

use crate::core::{React, Response, Root, State, StateHistory};
use crate::machine::error::FsmError;
use crate::machine::lock::{DispatchLock, LockScope, NoLock};
use crate::machine::resolve::{resolve, Resolution};
use std::any::type_name;
use std::fmt;
use tracing::debug;

/// Current state plus the payload it holds.
struct Active<S: State> {
    state: S,
    payload: S::Payload,
}

impl<S: State<Parent = Root>> Active<S> {
    fn settle(
        &mut self,
        response: Response<S>,
        chained: bool,
        machine: &str,
        history: Option<&mut StateHistory>,
    ) {
        match resolve(
            &mut self.state,
            &mut self.payload,
            response,
            chained,
            machine,
            history,
        ) {
            Resolution::Settled => {}
            Resolution::Escaped(escape) => match *escape.target() {},
        }
    }
}

/// Top-level machine for a state family whose parent is [`Root`].
///
/// The machine is created empty, initialized once with a first state and the
/// payload, then driven with [`dispatch`](Self::dispatch). Dropping it (or
/// calling [`reset`](Self::reset)) runs the current exit hook and releases
/// the payload.
///
/// # Example
///
/// ```rust
/// use handoff::{React, Response, Root, State, StateMachine};
///
/// enum Door {
///     Closed,
///     Open,
/// }
///
/// struct Push;
///
/// impl State for Door {
///     type Payload = u32;
///     type Parent = Root;
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// impl React<Push> for Door {
///     fn react(&mut self, _event: &mut Push, _opened: &mut u32) -> Response<Self> {
///         match self {
///             Self::Closed => Response::transition_with(Self::Open, |opened: &mut u32| *opened += 1),
///             Self::Open => Response::Unhandled,
///         }
///     }
/// }
///
/// let mut door = StateMachine::new();
/// door.initialize(Door::Closed, 0).unwrap();
/// door.dispatch(Push).unwrap();
/// assert_eq!(door.current_state_name(), Some("Open"));
/// ```
pub struct StateMachine<S, L = NoLock>
where
    S: State<Parent = Root>,
    L: DispatchLock,
{
    active: Option<Active<S>>,
    lock: L,
    label: String,
    history: Option<StateHistory>,
}

impl<S: State<Parent = Root>> StateMachine<S> {
    /// Create an empty machine without locking.
    pub fn new() -> Self {
        Self::with_lock(NoLock)
    }
}

impl<S: State<Parent = Root>> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, L> StateMachine<S, L>
where
    S: State<Parent = Root>,
    L: DispatchLock,
{
    /// Create an empty machine guarded by `lock`.
    pub fn with_lock(lock: L) -> Self {
        Self::configured(type_name::<S>().to_string(), lock, None)
    }

    pub(crate) fn configured(label: String, lock: L, history: Option<StateHistory>) -> Self {
        Self {
            active: None,
            lock,
            label,
            history,
        }
    }

    /// Enter `initial` with `payload` and resolve any chained transitions.
    ///
    /// Fails with [`FsmError::AlreadyInitialized`] if the machine is running;
    /// call [`reset`](Self::reset) first to start over.
    pub fn initialize(&mut self, initial: S, payload: S::Payload) -> Result<(), FsmError> {
        let _scope = LockScope::new(&self.lock);

        if let Some(active) = &self.active {
            return Err(FsmError::AlreadyInitialized {
                state: active.state.name().to_string(),
            });
        }

        debug!(machine = %self.label, state = initial.name(), "initializing");

        let mut active = Active {
            state: initial,
            payload,
        };
        let response = active.state.on_entry(&mut active.payload);
        active.settle(response, true, &self.label, self.history.as_mut());
        self.active = Some(active);
        Ok(())
    }

    /// Send `event` to the current state and return it once the machine is stable.
    ///
    /// The event is handed back so that fields filled in by the reaction can
    /// be read. An event the current state does not handle is logged and
    /// otherwise ignored.
    pub fn dispatch<E>(&mut self, mut event: E) -> Result<E, FsmError>
    where
        S: React<E>,
    {
        let _scope = LockScope::new(&self.lock);

        let Some(active) = self.active.as_mut() else {
            return Err(FsmError::NotInitialized);
        };

        let response = active.state.react(&mut event, &mut active.payload);
        if response.is_unhandled() {
            debug!(
                machine = %self.label,
                state = active.state.name(),
                event = type_name::<E>(),
                "event not handled"
            );
            return Ok(event);
        }

        active.settle(response, false, &self.label, self.history.as_mut());
        Ok(event)
    }

    /// Run the current exit hook and release the payload.
    ///
    /// Returns `false` if the machine was not initialized. No transition
    /// action runs. The machine can be initialized again afterwards.
    pub fn reset(&mut self) -> bool {
        let _scope = LockScope::new(&self.lock);
        teardown(&mut self.active, &self.label)
    }

    /// Name of the current stable state, `None` before initialization.
    pub fn current_state_name(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.state.name())
    }

    pub fn current_state(&self) -> Option<&S> {
        self.active.as_ref().map(|active| &active.state)
    }

    pub fn is_initialized(&self) -> bool {
        self.active.is_some()
    }

    /// Transition history, if enabled.
    pub fn history(&self) -> Option<&StateHistory> {
        self.history.as_ref()
    }

    /// Label used in log events.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn lock(&self) -> &L {
        &self.lock
    }
}

fn teardown<S: State>(active: &mut Option<Active<S>>, machine: &str) -> bool {
    let Some(mut active) = active.take() else {
        return false;
    };
    active.state.on_exit(&mut active.payload);
    debug!(machine, state = active.state.name(), "torn down");
    true
}

impl<S, L> Drop for StateMachine<S, L>
where
    S: State<Parent = Root>,
    L: DispatchLock,
{
    fn drop(&mut self) {
        let _scope = LockScope::new(&self.lock);
        teardown(&mut self.active, &self.label);
    }
}

impl<S, L> fmt::Debug for StateMachine<S, L>
where
    S: State<Parent = Root>,
    L: DispatchLock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("label", &self.label)
            .field("current", &self.current_state_name())
            .field("history", &self.history.as_ref().map(StateHistory::len))
            .finish()
    }
}
