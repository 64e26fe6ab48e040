//! Fare settlement: the terminal state machine and its outcomes.
//!
//! # Key Concepts
//!
//! - **FareMachine**: an `Idle`/`Settling` machine over a fixed fare table
//! - **Session**: the card being settled and its outstanding shortage
//! - **Outcomes**: boolean `start`/`charge` for simple callers, and
//!   `try_start`/`try_charge` that say exactly what happened

mod machine;
mod outcome;
mod session;

pub use machine::FareMachine;
pub use outcome::{ChargeError, Receipt, SessionId, StartError, StartOutcome};
pub use session::Session;
