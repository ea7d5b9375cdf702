//! Combination safe whose `Locked` state is a nested machine over
//! `{NoError, Error}` instead of an error flag.

use handoff::{NestedMachine, React, Response, Root, State, StateMachine};

pub struct Configure(pub Vec<i32>);
pub struct Digit(pub i32);
pub struct Reset;

/// Copies the sounds the safe made so far.
#[derive(Default)]
pub struct Sounds(pub Vec<&'static str>);

/// Reads the entry position out of the payload.
#[derive(Default)]
pub struct Position(pub Option<usize>);

#[derive(Default)]
pub struct SafeData {
    combination: Vec<i32>,
    position: usize,
    sounds: Vec<&'static str>,
}

impl SafeData {
    fn adopt(&mut self, combination: &[i32]) {
        self.combination = combination.to_vec();
        self.position = 0;
    }

    fn enter_number(&mut self, digit: i32) -> bool {
        let matched = self.combination[self.position] == digit;
        self.position += 1;
        matched
    }

    fn is_entry_complete(&self) -> bool {
        self.position == self.combination.len()
    }
}

#[derive(Debug)]
pub enum Safe {
    Open,
    Locked(NestedMachine<Keypad>),
    Lockdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keypad {
    NoError,
    Error,
}

impl Safe {
    pub fn locked() -> Self {
        Self::Locked(NestedMachine::new())
    }
}

impl State for Safe {
    type Payload = SafeData;
    type Parent = Root;

    fn name(&self) -> &str {
        match self {
            Self::Open => "Open",
            Self::Locked(_) => "Locked",
            Self::Lockdown => "Lockdown",
        }
    }

    fn on_entry(&mut self, data: &mut SafeData) -> Response<Self> {
        match self {
            Self::Open => {
                data.sounds.push("open");
                Response::Handled
            }
            Self::Locked(keypad) => {
                data.sounds.push("close");
                keypad.enter(Keypad::NoError, data)
            }
            Self::Lockdown => {
                data.sounds.push("lockdown");
                Response::Handled
            }
        }
    }

    fn on_exit(&mut self, data: &mut SafeData) {
        match self {
            Self::Locked(keypad) => keypad.exit(data),
            Self::Lockdown => data.position = 0,
            Self::Open => {}
        }
    }
}

impl React<Configure> for Safe {
    fn react(&mut self, event: &mut Configure, data: &mut SafeData) -> Response<Self> {
        match self {
            Self::Open if !event.0.is_empty() => {
                data.adopt(&event.0);
                Response::transition(Self::locked())
            }
            Self::Open => Response::Handled,
            _ => Response::Unhandled,
        }
    }
}

impl React<Digit> for Safe {
    fn react(&mut self, event: &mut Digit, data: &mut SafeData) -> Response<Self> {
        match self {
            Self::Locked(keypad) => keypad.react(event, data),
            _ => Response::Unhandled,
        }
    }
}

impl React<Reset> for Safe {
    fn react(&mut self, event: &mut Reset, data: &mut SafeData) -> Response<Self> {
        match self {
            Self::Locked(keypad) => keypad.react(event, data),
            Self::Lockdown => Response::transition(Self::locked()),
            Self::Open => Response::Unhandled,
        }
    }
}

impl React<Sounds> for Safe {
    fn react(&mut self, event: &mut Sounds, data: &mut SafeData) -> Response<Self> {
        event.0 = data.sounds.clone();
        Response::Handled
    }
}

impl React<Position> for Safe {
    fn react(&mut self, event: &mut Position, data: &mut SafeData) -> Response<Self> {
        event.0 = Some(data.position);
        Response::Handled
    }
}

impl State for Keypad {
    type Payload = SafeData;
    type Parent = Safe;

    fn name(&self) -> &str {
        match self {
            Self::NoError => "NoError",
            Self::Error => "Error",
        }
    }

    fn on_entry(&mut self, data: &mut SafeData) -> Response<Self> {
        match self {
            Self::Error if data.is_entry_complete() => Response::escape(Safe::Lockdown),
            _ => Response::Handled,
        }
    }
}

impl React<Digit> for Keypad {
    fn react(&mut self, event: &mut Digit, data: &mut SafeData) -> Response<Self> {
        match self {
            Self::NoError => {
                if !data.enter_number(event.0) {
                    Response::transition(Self::Error)
                } else if data.is_entry_complete() {
                    Response::escape(Safe::Open)
                } else {
                    Response::Handled
                }
            }
            Self::Error => {
                data.enter_number(event.0);
                if data.is_entry_complete() {
                    Response::escape(Safe::Lockdown)
                } else {
                    Response::Handled
                }
            }
        }
    }
}

impl React<Reset> for Keypad {
    fn react(&mut self, _event: &mut Reset, data: &mut SafeData) -> Response<Self> {
        data.sounds.push("clear");
        data.position = 0;
        Response::transition(Self::NoError)
    }
}

pub fn open_safe() -> StateMachine<Safe> {
    let mut safe = StateMachine::new();
    safe.initialize(Safe::Open, SafeData::default()).unwrap();
    safe
}

pub fn locked_safe(combination: &[i32]) -> StateMachine<Safe> {
    let mut safe = open_safe();
    safe.dispatch(Configure(combination.to_vec())).unwrap();
    safe
}

pub fn keypad_state(safe: &StateMachine<Safe>) -> Option<Keypad> {
    match safe.current_state() {
        Some(Safe::Locked(keypad)) => keypad.current_state().copied(),
        _ => None,
    }
}

pub fn sounds(safe: &mut StateMachine<Safe>) -> Vec<&'static str> {
    safe.dispatch(Sounds::default()).unwrap().0
}

pub fn position(safe: &mut StateMachine<Safe>) -> Option<usize> {
    safe.dispatch(Position::default()).unwrap().0
}
