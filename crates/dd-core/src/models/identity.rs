//! The signed-in principal.

use crate::{IdentityUpdate, Role, avatar_for_email, humanize_local_part};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Avatar image URI
    pub avatar: String,
}

impl Identity {
    /// Identity synthesized for a password sign-in.
    ///
    /// Everything is derived from the email, so signing in twice with the
    /// same address yields the same identity.
    pub fn for_sign_in(email: &str, avatar_base_url: &str) -> Self {
        Self {
            id: Self::id_for_email(email),
            email: email.to_string(),
            name: humanize_local_part(email),
            role: Role::admin(),
            avatar: avatar_for_email(avatar_base_url, email),
        }
    }

    /// Identity for a newly registered account with a caller-chosen name.
    pub fn for_sign_up(email: &str, name: &str, avatar_base_url: &str) -> Self {
        Self {
            id: Self::id_for_email(email),
            email: email.to_string(),
            name: name.to_string(),
            role: Role::user(),
            avatar: avatar_for_email(avatar_base_url, email),
        }
    }

    /// Stable id for an email address (UUID v5, OID namespace).
    pub fn id_for_email(email: &str) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, email.as_bytes())
    }

    /// Merge the supplied fields, leaving the rest untouched. The id never changes.
    pub fn apply(&mut self, update: IdentityUpdate) {
        let IdentityUpdate {
            email,
            name,
            role,
            avatar,
        } = update;

        if let Some(email) = email {
            self.email = email;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(role) = role {
            self.role = role;
        }
        if let Some(avatar) = avatar {
            self.avatar = avatar;
        }
    }
}
