//! Maps a parsed command onto the session manager and renders the outcome as JSON.

use crate::{CliError, CliResult, Commands};

use dd_core::IdentityUpdate;
use dd_session::{SessionManager, SessionSnapshot, SessionState};
use serde_json::{Value, json};

pub async fn execute(manager: &SessionManager, command: Commands) -> CliResult<Value> {
    match command {
        Commands::SignIn {
            email,
            password,
            remember,
        } => {
            let identity = manager.sign_in(&email, &password, remember).await?;
            Ok(json!({ "user": identity, "remembered": remember }))
        }
        Commands::SignUp {
            email,
            password,
            name,
        } => {
            let identity = manager.sign_up(&email, &password, &name).await?;
            Ok(json!({ "user": identity }))
        }
        Commands::SignOut => {
            manager.sign_out();
            Ok(json!({ "signed_out": true }))
        }
        Commands::Whoami => Ok(describe(&manager.snapshot())),
        Commands::UpdateProfile {
            email,
            name,
            role,
            avatar,
        } => {
            let updated = manager.update_profile(IdentityUpdate {
                email,
                name,
                role,
                avatar,
            })?;
            Ok(json!({ "updated": updated.is_some(), "user": updated }))
        }
        Commands::ForgotPassword { email } => {
            manager.forgot_password(&email).await;
            Ok(json!({ "reset_requested": true, "email": email }))
        }
        Commands::ResetPassword { token, password } => {
            manager.reset_password(&token, &password).await?;
            Ok(json!({ "password_reset": true }))
        }
        Commands::VerifyEmail { token } => {
            manager.verify_email(&token).await;
            Ok(json!({ "email_verified": true }))
        }
        Commands::Shell => Err(CliError::shell("already in a shell")),
    }
}

/// JSON view of a session snapshot.
pub fn describe(snapshot: &SessionSnapshot) -> Value {
    let state = match snapshot.state() {
        SessionState::Initializing => "initializing",
        SessionState::SignedOut => "signed_out",
        SessionState::SignedIn => "signed_in",
    };

    json!({
        "state": state,
        "authenticated": snapshot.is_authenticated(),
        "user": snapshot.user,
    })
}

/// Serialize a result for stdout.
pub fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}
