//! Build errors for the fare machine builder.

use crate::fare::FareTableError;
use thiserror::Error;

/// Errors that can occur when building a fare machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No fares specified. Call .fare(), .fares() or .fare_table() before .build()")]
    MissingFares,

    #[error(transparent)]
    InvalidFares(#[from] FareTableError),
}
