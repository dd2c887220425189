use dd_core::Role;

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Sign in with email and password
    SignIn {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Keep the session across runs
        #[arg(long)]
        remember: bool,
    },

    /// Register a new account (session lasts for this process only)
    SignUp {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Display name
        #[arg(long)]
        name: String,
    },

    /// Sign out and wipe any stored session
    SignOut,

    /// Show the current session
    Whoami,

    /// Change fields of the signed-in profile
    UpdateProfile {
        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        name: Option<String>,

        /// Role label, e.g. "Admin" or "Data Analyst"
        #[arg(long)]
        role: Option<Role>,

        /// Avatar image URI
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Request a password reset email
    ForgotPassword {
        #[arg(long)]
        email: String,
    },

    /// Set a new password with a reset token
    ResetPassword {
        #[arg(long)]
        token: String,

        #[arg(long)]
        password: String,
    },

    /// Confirm an email address with a verification token
    VerifyEmail {
        #[arg(long)]
        token: String,
    },

    /// Read commands from stdin against one long-lived session
    Shell,
}
