//! Core types for storage selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EncStoreError, Result};

/// Which backend an engine persists into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    /// Lives as long as the owning [`StorageHost`](super::StorageHost).
    #[serde(alias = "sessionStorage")]
    Session,
    /// Survives process restarts.
    #[default]
    #[serde(alias = "localStorage")]
    Persistent,
}

impl StorageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Session => "session",
            StorageType::Persistent => "persistent",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageType {
    type Err = EncStoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "session" | "sessionStorage" => Ok(StorageType::Session),
            "persistent" | "localStorage" => Ok(StorageType::Persistent),
            other => Err(EncStoreError::Storage(format!(
                "Unknown storage type: {}",
                other
            ))),
        }
    }
}
