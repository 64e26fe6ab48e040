//! Terminal states and the `State` trait they implement.
//!
//! States are plain values describing where a terminal sits in its
//! settlement cycle. Inspecting them has no side effects.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure. Implementors are recorded in
/// [`StateHistory`](super::StateHistory), so they must be cloneable,
/// comparable and serializable.
///
/// # Example
///
/// ```rust
/// use fare_adjust::core::{State, TerminalState};
///
/// assert_eq!(TerminalState::Settling.name(), "Settling");
/// assert_eq!(TerminalState::Idle.to_string(), "Idle");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Position of a fare terminal in its settlement cycle.
///
/// A terminal alternates between the two states forever; neither is final.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum TerminalState {
    /// No card is being settled and nothing is owed.
    #[default]
    Idle,
    /// A card is mid-settlement with a positive shortage outstanding.
    Settling,
}

impl State for TerminalState {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Settling => "Settling",
        }
    }
}

impl fmt::Display for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
