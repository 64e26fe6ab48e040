//! Outcomes and errors of settlement operations.

use crate::fare::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Identifier of one settlement session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Successful result of presenting a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// A session was opened; `shortage` must be paid before the card leaves.
    Settling {
        session: SessionId,
        fare: Amount,
        shortage: Amount,
    },

    /// The balance already covers the fare. The terminal stays idle.
    NoShortage { fare: Amount, balance: Amount },
}

impl StartOutcome {
    /// Whether a session was opened.
    pub fn is_settling(&self) -> bool {
        matches!(self, Self::Settling { .. })
    }

    /// Amount owed; zero when no settlement is needed.
    pub fn shortage(&self) -> Amount {
        match self {
            Self::Settling { shortage, .. } => *shortage,
            Self::NoShortage { .. } => 0,
        }
    }
}

/// Reasons a card could not be evaluated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StartError {
    /// Another session is open. It is left untouched.
    #[error("Terminal is busy settling session {session}")]
    Busy { session: SessionId, same_card: bool },

    #[error("Card has no entry record")]
    MissingEntry,

    #[error("Entry station '{station}' is not in the fare table")]
    UnknownStation { station: String },

    #[error("Shortage for fare {fare} against balance {balance} overflows")]
    ShortageOverflow { fare: Amount, balance: Amount },
}

/// Reasons a payment was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChargeError {
    #[error("No settlement session is active")]
    NotSettling,

    /// Partial payments are never applied; the session stays open.
    #[error("Payment of {offered} does not cover shortage of {shortage}")]
    Underpayment { offered: Amount, shortage: Amount },

    /// Every handle to the card was dropped mid-session. The session is closed.
    #[error("Card for session {session} was released before payment")]
    CardReleased { session: SessionId },

    #[error("Crediting {amount} to balance {balance} overflows")]
    BalanceOverflow { amount: Amount, balance: Amount },
}

/// Proof of a settled session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub session: SessionId,
    pub station: String,
    pub fare: Amount,
    pub shortage: Amount,
    /// Full amount accepted and credited to the card.
    pub paid: Amount,
    pub balance_after: Amount,
    /// Charge calls made during the session, this one included.
    pub attempts: usize,
    pub settled_at: DateTime<Utc>,
}

impl Receipt {
    /// Amount credited beyond the shortage.
    pub fn overpayment(&self) -> Amount {
        self.paid - self.shortage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_outcome_reports_shortage() {
        let settling = StartOutcome::Settling {
            session: SessionId::generate(),
            fare: 180,
            shortage: 80,
        };
        assert!(settling.is_settling());
        assert_eq!(settling.shortage(), 80);

        let covered = StartOutcome::NoShortage {
            fare: 180,
            balance: 300,
        };
        assert!(!covered.is_settling());
        assert_eq!(covered.shortage(), 0);
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn session_id_serializes_as_uuid_string() {
        let id = SessionId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }

    #[test]
    fn errors_render_amounts() {
        let err = ChargeError::Underpayment {
            offered: 50,
            shortage: 80,
        };
        assert_eq!(err.to_string(), "Payment of 50 does not cover shortage of 80");

        let err = StartError::UnknownStation {
            station: "Z".to_string(),
        };
        assert_eq!(err.to_string(), "Entry station 'Z' is not in the fare table");
    }

    #[test]
    fn overpayment_is_paid_minus_shortage() {
        let receipt = Receipt {
            session: SessionId::generate(),
            station: "A".to_string(),
            fare: 180,
            shortage: 80,
            paid: 100,
            balance_after: 200,
            attempts: 1,
            settled_at: Utc::now(),
        };
        assert_eq!(receipt.overpayment(), 20);
    }
}
