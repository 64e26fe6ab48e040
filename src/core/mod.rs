//! Core state types for the settlement terminal.
//!
//! This module contains the pure pieces of the machine:
//! - Terminal states via the `State` trait
//! - Immutable history of state changes
//!
//! Nothing here touches a card or a fare table.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::{State, TerminalState};
