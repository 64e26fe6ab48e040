//! Stored-value cards presented to the terminal.
//!
//! Cards belong to the caller. The terminal reads the entry station and
//! balance, and credits the balance when a payment settles a shortage.

mod handle;

pub use handle::CardHandle;
pub(crate) use handle::WeakCard;

use crate::fare::Amount;
use serde::{Deserialize, Serialize};

/// Card collaborator seen by the settlement machine.
pub trait Card {
    /// Station the card entered at. Empty when there is no entry record.
    fn entry_station(&self) -> &str;

    /// Current stored value. May be negative.
    fn balance(&self) -> Amount;

    /// Add `amount` to the stored value.
    ///
    /// Callers check that the sum fits in [`Amount`] first;
    /// [`FareMachine::try_charge`](crate::settlement::FareMachine::try_charge)
    /// refuses a payment that would overflow before crediting anything.
    fn credit(&mut self, amount: Amount);
}

/// A plain IC transit card record.
///
/// # Example
///
/// ```rust
/// use fare_adjust::card::{Card, IcCard};
///
/// let mut card = IcCard::new("A", 100);
/// card.credit(80);
/// assert_eq!(card.balance(), 180);
/// assert_eq!(card.entry_station(), "A");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcCard {
    entry_station: String,
    balance: Amount,
}

impl IcCard {
    /// A card that entered at `entry_station`.
    pub fn new(entry_station: impl Into<String>, balance: Amount) -> Self {
        Self {
            entry_station: entry_station.into(),
            balance,
        }
    }

    /// A card with no entry record.
    pub fn without_entry(balance: Amount) -> Self {
        Self::new(String::new(), balance)
    }

    /// Whether the card carries an entry record.
    pub fn has_entry(&self) -> bool {
        !self.entry_station.is_empty()
    }
}

impl Card for IcCard {
    fn entry_station(&self) -> &str {
        &self.entry_station
    }

    fn balance(&self) -> Amount {
        self.balance
    }

    fn credit(&mut self, amount: Amount) {
        self.balance += amount;
    }
}
