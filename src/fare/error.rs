//! Fare table error types.

use super::Amount;
use thiserror::Error;

/// A single problem found while validating fare table entries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FareViolation {
    #[error("Station identifier is empty")]
    EmptyStation,

    #[error("Station identifier '{station}' has leading or trailing whitespace")]
    UntrimmedStation { station: String },

    #[error("Fare for station '{station}' is negative ({fare})")]
    NegativeFare { station: String, fare: Amount },

    #[error("Station '{station}' is listed more than once")]
    DuplicateStation { station: String },
}

/// Errors that can occur when building a fare table
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FareTableError {
    /// One or more entries failed validation; every violation is listed.
    #[error("Invalid fare table: {} violation(s)", .violations.len())]
    Invalid { violations: Vec<FareViolation> },
}

impl FareTableError {
    /// All violations carried by this error.
    pub fn violations(&self) -> &[FareViolation] {
        match self {
            Self::Invalid { violations } => violations,
        }
    }
}
