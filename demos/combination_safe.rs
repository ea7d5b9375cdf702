//! Combination Safe
//!
//! This example models a safe whose `Locked` state contains its own small
//! machine tracking whether a wrong digit was entered.
//!
//! Key concepts:
//! - Composite state holding a `NestedMachine`
//! - Escaping from a sub-state to a state of the outer family
//! - Entry hooks that immediately request another transition
//! - Builder with a name, a dispatch lock and transition history
//!
//! Run with: cargo run --example combination_safe
//! Set `RUST_LOG=handoff=trace` to see each transition.

use handoff::{
    BuildError, FsmError, MachineBuilder, MutexLock, NestedMachine, React, Response, Root, State,
    StateMachine,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

struct Configure(Vec<i32>);
struct Digit(i32);
struct Reset;

#[derive(Default)]
struct Vault {
    combination: Vec<i32>,
    position: usize,
}

impl Vault {
    fn enter_number(&mut self, digit: i32) -> bool {
        let matched = self.combination[self.position] == digit;
        self.position += 1;
        matched
    }

    fn is_entry_complete(&self) -> bool {
        self.position == self.combination.len()
    }
}

enum Safe {
    Open,
    Locked(NestedMachine<Keypad>),
    Lockdown,
}

enum Keypad {
    NoError,
    Error,
}

impl State for Safe {
    type Payload = Vault;
    type Parent = Root;

    fn name(&self) -> &str {
        match self {
            Self::Open => "Open",
            Self::Locked(_) => "Locked",
            Self::Lockdown => "Lockdown",
        }
    }

    fn on_entry(&mut self, vault: &mut Vault) -> Response<Self> {
        match self {
            Self::Open => {
                println!("[Safe] *Beep* *Beep* *Click* Ta-da!");
                Response::Handled
            }
            Self::Locked(keypad) => {
                println!("[Safe] *Click* *Grinck* *Boop* *Boop*");
                keypad.enter(Keypad::NoError, vault)
            }
            Self::Lockdown => {
                println!("[Safe] *WAH* *WAH* *WAH* *WAH*");
                Response::Handled
            }
        }
    }

    fn on_exit(&mut self, vault: &mut Vault) {
        match self {
            Self::Locked(keypad) => keypad.exit(vault),
            Self::Lockdown => vault.position = 0,
            Self::Open => {}
        }
    }
}

impl React<Configure> for Safe {
    fn react(&mut self, event: &mut Configure, vault: &mut Vault) -> Response<Self> {
        match self {
            Self::Open if !event.0.is_empty() => {
                vault.combination = std::mem::take(&mut event.0);
                vault.position = 0;
                Response::transition(Self::Locked(NestedMachine::new()))
            }
            _ => Response::Unhandled,
        }
    }
}

impl React<Digit> for Safe {
    fn react(&mut self, event: &mut Digit, vault: &mut Vault) -> Response<Self> {
        match self {
            Self::Locked(keypad) => keypad.react(event, vault),
            _ => Response::Unhandled,
        }
    }
}

impl React<Reset> for Safe {
    fn react(&mut self, event: &mut Reset, vault: &mut Vault) -> Response<Self> {
        match self {
            Self::Locked(keypad) => keypad.react(event, vault),
            Self::Lockdown => Response::transition(Self::Locked(NestedMachine::new())),
            Self::Open => Response::Unhandled,
        }
    }
}

impl State for Keypad {
    type Payload = Vault;
    type Parent = Safe;

    fn name(&self) -> &str {
        match self {
            Self::NoError => "NoError",
            Self::Error => "Error",
        }
    }

    fn on_entry(&mut self, vault: &mut Vault) -> Response<Self> {
        match self {
            Self::Error if vault.is_entry_complete() => Response::escape(Safe::Lockdown),
            _ => Response::Handled,
        }
    }
}

impl React<Digit> for Keypad {
    fn react(&mut self, event: &mut Digit, vault: &mut Vault) -> Response<Self> {
        let matched = vault.enter_number(event.0);
        match self {
            Self::NoError if !matched => Response::transition(Self::Error),
            Self::NoError if vault.is_entry_complete() => Response::escape(Safe::Open),
            Self::Error if vault.is_entry_complete() => Response::escape(Safe::Lockdown),
            _ => Response::Handled,
        }
    }
}

impl React<Reset> for Keypad {
    fn react(&mut self, _event: &mut Reset, vault: &mut Vault) -> Response<Self> {
        println!("[Safe] *Beep* *Boop*");
        vault.position = 0;
        Response::transition(Self::NoError)
    }
}

fn enter(safe: &mut StateMachine<Safe, MutexLock>, digits: &[i32]) -> Result<(), FsmError> {
    for digit in digits {
        safe.dispatch(Digit(*digit))?;
    }
    Ok(())
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Combination Safe ===\n");

    let mut safe = MachineBuilder::new()
        .name("vault")
        .lock(MutexLock::new())
        .history(32)
        .initial(Safe::Open)
        .payload(Vault::default())
        .build()?;

    println!("\n1. Setting the combination 1-2-3");
    safe.dispatch(Configure(vec![1, 2, 3]))?;
    println!("   State: {:?}", safe.current_state_name());

    println!("\n2. Entering 1-9 (wrong digit, safe still reports Locked)");
    enter(&mut safe, &[1, 9])?;
    println!("   State: {:?}", safe.current_state_name());

    println!("\n3. Clearing and entering 1-2-3");
    safe.dispatch(Reset)?;
    enter(&mut safe, &[1, 2, 3])?;
    println!("   State: {:?}", safe.current_state_name());

    println!("\n4. Locking again and entering 1-2-9");
    safe.dispatch(Configure(vec![1, 2, 3]))?;
    enter(&mut safe, &[1, 2, 9])?;
    println!("   State: {:?}", safe.current_state_name());

    println!("\n5. Resetting from lockdown");
    safe.dispatch(Reset)?;
    println!("   State: {:?}", safe.current_state_name());

    if let Some(history) = safe.history() {
        println!("\nOuter path: {}", history.get_path().join(" -> "));
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
