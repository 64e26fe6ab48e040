//! Terminal configuration loaded from JSON.
//!
//! ```json
//! {
//!   "id": "6f1c1f0e-2d7a-4d6e-9a51-8f0f5b1b2c3d",
//!   "name": "North gate 2",
//!   "fares": { "A": 180, "B": 200 }
//! }
//! ```
//!
//! `id` and `name` are optional. The fare map goes through the same
//! validation as [`FareTable::new`].

use crate::card::Card;
use crate::fare::FareTable;
use crate::settlement::FareMachine;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while loading a terminal configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON or an invalid fare table
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration of a single fare terminal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerminalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub fares: FareTable,
}

impl TerminalConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Render the configuration as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build an idle terminal from this configuration.
    pub fn into_machine<C: Card>(self) -> FareMachine<C> {
        match self.id {
            Some(id) => FareMachine::with_id(id, self.fares),
            None => FareMachine::new(self.fares),
        }
    }
}
