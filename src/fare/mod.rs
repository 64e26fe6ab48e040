//! Flat per-entry-station fare table.
//!
//! The table maps a station identifier to the fare charged to a card that
//! entered there. It is validated once on construction and never mutated.

pub mod error;
pub mod validation;

pub use error::{FareTableError, FareViolation};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;

/// Monetary amount in the smallest currency unit.
///
/// Signed because card balances may go negative.
pub type Amount = i64;

/// Immutable mapping from station identifier to required fare.
///
/// # Example
///
/// ```rust
/// use fare_adjust::fare::FareTable;
///
/// let fares = FareTable::new([("A", 180), ("B", 200)]).unwrap();
/// assert_eq!(fares.fare_for("A"), Some(180));
/// assert_eq!(fares.fare_for("Z"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Amount>",
    into = "BTreeMap<String, Amount>"
)]
pub struct FareTable {
    fares: BTreeMap<String, Amount>,
}

impl FareTable {
    /// Build a table from `(station, fare)` pairs.
    ///
    /// Fails with every violation found if any station identifier is empty
    /// or padded with whitespace, any fare is negative, or a station
    /// appears twice.
    pub fn new<I, K>(entries: I) -> Result<Self, FareTableError>
    where
        I: IntoIterator<Item = (K, Amount)>,
        K: Into<String>,
    {
        let entries: Vec<(String, Amount)> = entries
            .into_iter()
            .map(|(station, fare)| (station.into(), fare))
            .collect();

        let checked = validation::validate_entries(
            entries.iter().map(|(station, fare)| (station.as_str(), *fare)),
        );

        match checked {
            Validation::Success(_) => Ok(Self {
                fares: entries.into_iter().collect(),
            }),
            Validation::Failure(violations) => Err(FareTableError::Invalid {
                violations: violations.iter().cloned().collect(),
            }),
        }
    }

    /// Fare for a card that entered at `station`.
    pub fn fare_for(&self, station: &str) -> Option<Amount> {
        self.fares.get(station).copied()
    }

    /// Whether `station` has a fare.
    pub fn contains(&self, station: &str) -> bool {
        self.fares.contains_key(station)
    }

    /// Station identifiers in sorted order.
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.fares.keys().map(String::as_str)
    }

    /// `(station, fare)` pairs in station order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Amount)> {
        self.fares.iter().map(|(station, fare)| (station.as_str(), *fare))
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.fares.len()
    }

    /// Whether the table has no stations.
    pub fn is_empty(&self) -> bool {
        self.fares.is_empty()
    }
}

impl TryFrom<BTreeMap<String, Amount>> for FareTable {
    type Error = FareTableError;

    fn try_from(fares: BTreeMap<String, Amount>) -> Result<Self, Self::Error> {
        Self::new(fares)
    }
}

impl From<FareTable> for BTreeMap<String, Amount> {
    fn from(table: FareTable) -> Self {
        table.fares
    }
}
