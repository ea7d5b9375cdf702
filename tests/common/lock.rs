//! Flat combination lock: the error flag lives in the payload.

use handoff::{React, Response, Root, State, StateMachine};

pub struct Configure(pub Vec<i32>);
pub struct Digit(pub i32);
pub struct Reset;

/// Reads the entry position out of the payload.
#[derive(Default)]
pub struct Position(pub Option<usize>);

#[derive(Default)]
pub struct LockData {
    combination: Vec<i32>,
    position: usize,
    error: bool,
}

impl LockData {
    fn reset(&mut self) {
        self.position = 0;
        self.error = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lock {
    Open,
    Locked,
    Lockdown,
}

impl State for Lock {
    type Payload = LockData;
    type Parent = Root;

    fn name(&self) -> &str {
        match self {
            Self::Open => "Open",
            Self::Locked => "Locked",
            Self::Lockdown => "Lockdown",
        }
    }
}

impl React<Configure> for Lock {
    fn react(&mut self, event: &mut Configure, data: &mut LockData) -> Response<Self> {
        match self {
            Self::Open if !event.0.is_empty() => {
                data.combination = event.0.clone();
                data.reset();
                Response::transition(Self::Locked)
            }
            Self::Open => Response::Handled,
            _ => Response::Unhandled,
        }
    }
}

impl React<Digit> for Lock {
    fn react(&mut self, event: &mut Digit, data: &mut LockData) -> Response<Self> {
        match self {
            Self::Locked => {
                data.error |= data.combination[data.position] != event.0;
                data.position += 1;

                if data.position < data.combination.len() {
                    Response::Handled
                } else if data.error {
                    Response::transition(Self::Lockdown)
                } else {
                    Response::transition(Self::Open)
                }
            }
            _ => Response::Unhandled,
        }
    }
}

impl React<Reset> for Lock {
    fn react(&mut self, _event: &mut Reset, data: &mut LockData) -> Response<Self> {
        match self {
            Self::Locked => {
                data.reset();
                Response::Handled
            }
            Self::Lockdown => {
                data.reset();
                Response::transition(Self::Locked)
            }
            Self::Open => Response::Unhandled,
        }
    }
}

impl React<Position> for Lock {
    fn react(&mut self, event: &mut Position, data: &mut LockData) -> Response<Self> {
        event.0 = Some(data.position);
        Response::Handled
    }
}

pub fn open_lock() -> StateMachine<Lock> {
    let mut lock = StateMachine::new();
    lock.initialize(Lock::Open, LockData::default()).unwrap();
    lock
}

pub fn locked_with(combination: &[i32]) -> StateMachine<Lock> {
    let mut lock = open_lock();
    lock.dispatch(Configure(combination.to_vec())).unwrap();
    lock
}

pub fn position(lock: &mut StateMachine<Lock>) -> Option<usize> {
    lock.dispatch(Position::default()).unwrap().0
}
