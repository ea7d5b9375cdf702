//! Digital Button
//!
//! This example drives a two-state button with press and release events.
//!
//! Key concepts:
//! - Events that carry data in (`Press`) and out (`Release`, `GetKeyCode`)
//! - Transition actions running between exit and entry
//! - Entry and exit hooks working on the shared payload
//! - A reaction shared by every state (`ResetButton`)
//!
//! Run with: cargo run --example digital_button
//! Set `RUST_LOG=handoff=trace` to see each transition.

use handoff::{React, Response, Root, State, StateMachine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SPACE: u16 = 32;

struct Press {
    keycode: u16,
}

#[derive(Default)]
struct Release {
    result: bool,
}

struct ResetButton;

#[derive(Default)]
struct GetKeyCode {
    keycode: Option<u16>,
}

struct Keyboard {
    name: String,
    down_key: Option<u16>,
}

impl Drop for Keyboard {
    fn drop(&mut self) {
        println!("Button is being destroyed: {}", self.name);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Button {
    NoPress,
    BtnPress,
}

impl State for Button {
    type Payload = Keyboard;
    type Parent = Root;

    fn name(&self) -> &str {
        match self {
            Self::NoPress => "NoPress",
            Self::BtnPress => "BtnPress",
        }
    }

    fn on_entry(&mut self, keyboard: &mut Keyboard) -> Response<Self> {
        if let (Self::BtnPress, Some(key)) = (*self, keyboard.down_key) {
            println!("Key {key} is down");
        }
        Response::Handled
    }

    fn on_exit(&mut self, keyboard: &mut Keyboard) {
        if *self == Self::BtnPress {
            if let Some(key) = keyboard.down_key.take() {
                println!("Key {key} is up");
            }
        }
    }
}

impl React<Press> for Button {
    fn react(&mut self, event: &mut Press, keyboard: &mut Keyboard) -> Response<Self> {
        match self {
            Self::NoPress => {
                keyboard.down_key = Some(event.keycode);
                Response::transition_with(Self::BtnPress, |keyboard: &mut Keyboard| {
                    println!("({}) press true", keyboard.name);
                })
            }
            Self::BtnPress => Response::Unhandled,
        }
    }
}

impl React<Release> for Button {
    fn react(&mut self, event: &mut Release, _keyboard: &mut Keyboard) -> Response<Self> {
        event.result = *self == Self::BtnPress;
        match self {
            Self::BtnPress => Response::transition_with(Self::NoPress, |keyboard: &mut Keyboard| {
                println!("({}) press false", keyboard.name);
            }),
            Self::NoPress => Response::Handled,
        }
    }
}

impl React<ResetButton> for Button {
    fn react(&mut self, _event: &mut ResetButton, _keyboard: &mut Keyboard) -> Response<Self> {
        Response::transition_with(Self::NoPress, |_: &mut Keyboard| {
            println!("Resetting state machine!");
        })
    }
}

impl React<GetKeyCode> for Button {
    fn react(&mut self, event: &mut GetKeyCode, keyboard: &mut Keyboard) -> Response<Self> {
        event.keycode = keyboard.down_key;
        Response::Handled
    }
}

fn main() -> Result<(), handoff::FsmError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Digital Button ===\n");

    let mut button = StateMachine::new();
    button.initialize(
        Button::NoPress,
        Keyboard {
            name: "Button #1".to_string(),
            down_key: None,
        },
    )?;
    println!("Initial state: {:?}\n", button.current_state_name());

    button.dispatch(Press { keycode: SPACE })?;
    println!("After press: {:?}", button.current_state_name());

    button.dispatch(Press { keycode: SPACE })?;
    println!("Second press is ignored: {:?}", button.current_state_name());

    let held = button.dispatch(GetKeyCode::default())?;
    println!("Held key: {:?}\n", held.keycode);

    let release = button.dispatch(Release::default())?;
    println!("After release: {:?} (result = {})", button.current_state_name(), release.result);

    let release = button.dispatch(Release::default())?;
    println!("Second release: {:?} (result = {})\n", button.current_state_name(), release.result);

    button.dispatch(Press { keycode: SPACE })?;
    button.dispatch(ResetButton)?;
    let held = button.dispatch(GetKeyCode::default())?;
    println!("After reset: {:?}, held key: {:?}", button.current_state_name(), held.keycode);

    println!("\nDropping the machine runs the last exit hook and frees the payload:");
    drop(button);

    println!("\n=== Example Complete ===");
    Ok(())
}
