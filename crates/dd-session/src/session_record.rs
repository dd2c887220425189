use crate::{SESSION_KEY, StorageError, StorageResult};

use std::panic::Location;

use dd_core::Identity;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Persisted form of the current identity: `{"user": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user: Identity,
}

impl SessionRecord {
    pub fn new(user: Identity) -> Self {
        Self { user }
    }

    #[track_caller]
    pub fn encode(&self) -> StorageResult<String> {
        serde_json::to_string(self).map_err(|e| StorageError::Encoding {
            key: SESSION_KEY.to_string(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
