use crate::{StorageError, StorageScope};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Password must be at least {min_length} characters {location}")]
    WeakPassword {
        min_length: usize,
        location: ErrorLocation,
    },

    #[error("Malformed session record in {scope} storage: {source} {location}")]
    MalformedSessionRecord {
        scope: StorageScope,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Session storage failed: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn weak_password(min_length: usize) -> Self {
        Self::WeakPassword {
            min_length,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable code for the UI layer to map onto a user-facing message
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::WeakPassword { .. } => "WEAK_PASSWORD",
            Self::MalformedSessionRecord { .. } => "MALFORMED_SESSION_RECORD",
            Self::Storage { .. } => "STORAGE_ERROR",
        }
    }
}

impl From<StorageError> for SessionError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
