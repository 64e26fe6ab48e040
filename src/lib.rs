//! Fare Adjust: a fare settlement state machine for transit card terminals
//!
//! A terminal reads a card's entry station and balance, looks up the fare
//! for that station, and if the balance falls short, holds the card in a
//! settlement session until cash covering the shortage is paid.
//!
//! # Core Concepts
//!
//! - **Fare table**: validated, immutable station → fare mapping
//! - **Cards**: caller-owned records shared through [`CardHandle`]
//! - **FareMachine**: the `Idle`/`Settling` state machine
//! - **History**: timestamped log of every state change
//!
//! # Example
//!
//! ```rust
//! use fare_adjust::{fares, CardHandle, FareMachine, IcCard, StartOutcome};
//!
//! let mut machine = FareMachine::new(fares! { "A" => 180, "B" => 200 }.unwrap());
//! let card = CardHandle::new(IcCard::new("A", 100));
//!
//! let outcome = machine.try_start(&card).unwrap();
//! assert!(matches!(outcome, StartOutcome::Settling { shortage: 80, .. }));
//!
//! let receipt = machine.try_charge(100).unwrap();
//! assert_eq!(receipt.overpayment(), 20);
//! assert_eq!(card.balance(), 200);
//! assert!(!machine.is_settling());
//! ```

pub mod builder;
pub mod card;
pub mod config;
pub mod core;
pub mod fare;
pub mod settlement;
pub mod terminal;

// Re-export commonly used types
pub use builder::{BuildError, FareMachineBuilder};
pub use card::{Card, CardHandle, IcCard};
pub use config::{ConfigError, TerminalConfig};
pub use crate::core::{State, StateHistory, StateTransition, TerminalState};
pub use fare::{Amount, FareTable, FareTableError, FareViolation};
pub use settlement::{
    ChargeError, FareMachine, Receipt, Session, SessionId, StartError, StartOutcome,
};
pub use terminal::SharedTerminal;
