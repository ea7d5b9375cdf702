//! State machine nested inside one state of a parent family.
//!
//! A composite state holds a [`NestedMachine`] over a sub-family whose
//! `Parent` is the composite's own family. The composite forwards its entry,
//! exit and reactions to the nested machine, passing the payload down by
//! reference. Transitions inside the sub-family are resolved here and stay
//! invisible to the parent; escapes come back as ordinary parent transitions.

use crate::core::{React, Response, State};
use crate::machine::resolve::{resolve, Resolution};
use std::any::type_name;
use tracing::debug;

/// Inner machine of a composite state.
///
/// # Example
///
/// ```rust
/// use handoff::{NestedMachine, React, Response, Root, State, StateMachine};
///
/// struct Tick;
///
/// enum Player {
///     Stopped,
///     Playing(NestedMachine<Track>),
/// }
///
/// enum Track {
///     Intro,
///     Outro,
/// }
///
/// impl State for Player {
///     type Payload = u32;
///     type Parent = Root;
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Stopped => "Stopped",
///             Self::Playing(_) => "Playing",
///         }
///     }
///
///     fn on_entry(&mut self, ticks: &mut u32) -> Response<Self> {
///         match self {
///             Self::Playing(track) => track.enter(Track::Intro, ticks),
///             Self::Stopped => Response::Handled,
///         }
///     }
///
///     fn on_exit(&mut self, ticks: &mut u32) {
///         if let Self::Playing(track) = self {
///             track.exit(ticks);
///         }
///     }
/// }
///
/// impl React<Tick> for Player {
///     fn react(&mut self, event: &mut Tick, ticks: &mut u32) -> Response<Self> {
///         match self {
///             Self::Stopped => Response::transition(Self::Playing(NestedMachine::new())),
///             Self::Playing(track) => track.react(event, ticks),
///         }
///     }
/// }
///
/// impl State for Track {
///     type Payload = u32;
///     type Parent = Player;
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Intro => "Intro",
///             Self::Outro => "Outro",
///         }
///     }
/// }
///
/// impl React<Tick> for Track {
///     fn react(&mut self, _event: &mut Tick, ticks: &mut u32) -> Response<Self> {
///         *ticks += 1;
///         match self {
///             Self::Intro => Response::transition(Self::Outro),
///             Self::Outro => Response::escape(Player::Stopped),
///         }
///     }
/// }
///
/// let mut player = StateMachine::new();
/// player.initialize(Player::Stopped, 0).unwrap();
///
/// player.dispatch(Tick).unwrap();
/// player.dispatch(Tick).unwrap();
/// assert_eq!(player.current_state_name(), Some("Playing"));
///
/// player.dispatch(Tick).unwrap();
/// assert_eq!(player.current_state_name(), Some("Stopped"));
/// ```
#[derive(Debug)]
pub struct NestedMachine<I: State> {
    current: Option<I>,
}

impl<I: State> Default for NestedMachine<I> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<I> NestedMachine<I>
where
    I: State,
    I::Parent: State<Payload = I::Payload>,
{
    /// Create an inactive nested machine, ready to be entered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `first` and resolve chained transitions.
    ///
    /// Call this from the composite state's entry hook and return its
    /// response from there, so that an escape raised while entering becomes
    /// the composite's own transition request.
    pub fn enter(&mut self, first: I, payload: &mut I::Payload) -> Response<I::Parent> {
        debug_assert!(
            self.current.is_none(),
            "nested machine entered twice without exit"
        );
        self.exit(payload);

        debug!(machine = type_name::<I>(), state = first.name(), "entering nested machine");

        let state = self.current.insert(first);
        let response = state.on_entry(payload);
        Self::settle(state, payload, response, true)
    }

    /// Forward `event` to the active sub-state.
    ///
    /// Sub-family transitions are carried out here and reported as
    /// [`Response::Handled`]; an escape is returned as a parent transition.
    pub fn react<E>(&mut self, event: &mut E, payload: &mut I::Payload) -> Response<I::Parent>
    where
        I: React<E>,
    {
        debug_assert!(
            self.current.is_some(),
            "event forwarded to a nested machine that was never entered"
        );
        let Some(state) = self.current.as_mut() else {
            return Response::Unhandled;
        };

        match state.react(event, payload) {
            Response::Unhandled => Response::Unhandled,
            response => Self::settle(state, payload, response, false),
        }
    }

    /// Exit the active sub-state, leaving the machine ready to be entered again.
    ///
    /// Call this from the composite state's exit hook.
    pub fn exit(&mut self, payload: &mut I::Payload) {
        if let Some(mut state) = self.current.take() {
            state.on_exit(payload);
        }
    }

    fn settle(
        state: &mut I,
        payload: &mut I::Payload,
        response: Response<I>,
        chained: bool,
    ) -> Response<I::Parent> {
        match resolve(state, payload, response, chained, type_name::<I>(), None) {
            Resolution::Settled => Response::Handled,
            Resolution::Escaped(escape) => Response::Transition(escape),
        }
    }
}

impl<I: State> NestedMachine<I> {
    /// Name of the active sub-state, `None` while inactive.
    pub fn current_state_name(&self) -> Option<&str> {
        self.current.as_ref().map(I::name)
    }

    pub fn current_state(&self) -> Option<&I> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}
