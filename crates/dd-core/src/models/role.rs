use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Free-text role label carried by an [`Identity`](crate::Identity).
///
/// Sign-in and sign-up assign [`Role::ADMIN`] and [`Role::USER`]; profile
/// updates may replace either with any label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// Elevated label granted to every password sign-in.
    pub const ADMIN: &'static str = "Admin";
    /// Label granted to freshly registered accounts.
    pub const USER: &'static str = "User";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn admin() -> Self {
        Self::new(Self::ADMIN)
    }

    pub fn user() -> Self {
        Self::new(Self::USER)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::user()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses user input. Surrounding whitespace is trimmed and a blank label is
/// rejected; stored labels are deserialized verbatim.
impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let label = s.trim();
        if label.is_empty() {
            return Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self::new(label))
    }
}
