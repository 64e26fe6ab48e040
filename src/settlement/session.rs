//! An open settlement session.

use super::outcome::SessionId;
use crate::card::{CardHandle, WeakCard};
use crate::fare::Amount;
use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

/// The card being settled and what it still owes.
///
/// Exists only while the terminal is settling; its presence is what makes
/// the terminal busy.
pub struct Session<C> {
    pub(crate) id: SessionId,
    pub(crate) card: WeakCard<C>,
    pub(crate) station: String,
    pub(crate) fare: Amount,
    pub(crate) shortage: Amount,
    pub(crate) started_at: DateTime<Utc>,
    pub(crate) attempts: usize,
}

impl<C> Session<C> {
    pub(crate) fn open(card: WeakCard<C>, station: String, fare: Amount, shortage: Amount) -> Self {
        Self {
            id: SessionId::generate(),
            card,
            station,
            fare,
            shortage,
            started_at: Utc::now(),
            attempts: 0,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Entry station being settled.
    pub fn station(&self) -> &str {
        &self.station
    }

    /// Fare charged for the entry station.
    pub fn fare(&self) -> Amount {
        self.fare
    }

    /// Amount still owed.
    pub fn shortage(&self) -> Amount {
        self.shortage
    }

    /// When the session opened.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Charge calls made so far, rejected ones included.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Time since the session opened.
    pub fn elapsed(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Handle to the card, unless the caller has released it.
    pub fn card(&self) -> Option<CardHandle<C>> {
        self.card.upgrade()
    }
}

impl<C> fmt::Debug for Session<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("station", &self.station)
            .field("fare", &self.fare)
            .field("shortage", &self.shortage)
            .field("started_at", &self.started_at)
            .field("attempts", &self.attempts)
            .finish_non_exhaustive()
    }
}
