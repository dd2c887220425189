pub mod identity;
pub mod identity_update;
pub mod role;
