pub mod error;
pub mod models;
pub mod naming;

pub use error::{CoreError, CoreResult};
pub use models::identity::Identity;
pub use models::identity_update::IdentityUpdate;
pub use models::role::Role;
pub use naming::{avatar_for_email, humanize_local_part, local_part};

/// Avatar service used when no base URL is configured.
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

#[cfg(test)]
mod tests;
