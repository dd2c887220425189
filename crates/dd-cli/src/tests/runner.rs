use crate::commands::Commands;
use crate::runner::{describe, execute, render};
use crate::tests::test_manager;
use crate::CliError;

use dd_session::SessionError;
use googletest::assert_that;
use googletest::prelude::eq;

fn sign_in(remember: bool) -> Commands {
    Commands::SignIn {
        email: "jane.doe@co.com".to_string(),
        password: "secret1".to_string(),
        remember,
    }
}

#[tokio::test]
async fn given_sign_in_when_executed_then_returns_user_json() {
    let manager = test_manager();

    let value = execute(&manager, sign_in(true)).await.unwrap();

    assert_that!(value["user"]["name"].as_str(), eq(Some("Jane Doe")));
    assert_that!(value["user"]["role"].as_str(), eq(Some("Admin")));
    assert_that!(value["remembered"].as_bool(), eq(Some(true)));
}

#[tokio::test]
async fn given_short_password_when_executed_then_session_error() {
    let manager = test_manager();

    let result = execute(
        &manager,
        Commands::SignIn {
            email: "jane.doe@co.com".to_string(),
            password: "123".to_string(),
            remember: false,
        },
    )
    .await;

    assert!(matches!(
        result,
        Err(CliError::Session {
            source: SessionError::InvalidCredentials { .. },
            ..
        })
    ));
}

#[tokio::test]
async fn given_signed_in_when_whoami_then_reports_signed_in() {
    let manager = test_manager();
    execute(&manager, sign_in(false)).await.unwrap();

    let value = execute(&manager, Commands::Whoami).await.unwrap();

    assert_that!(value["state"].as_str(), eq(Some("signed_in")));
    assert_that!(value["authenticated"].as_bool(), eq(Some(true)));
    assert_that!(value["user"]["email"].as_str(), eq(Some("jane.doe@co.com")));
}

#[tokio::test]
async fn given_signed_out_when_update_profile_then_reports_not_updated() {
    let manager = test_manager();

    let value = execute(
        &manager,
        Commands::UpdateProfile {
            email: None,
            name: Some("X".to_string()),
            role: None,
            avatar: None,
        },
    )
    .await
    .unwrap();

    assert_that!(value["updated"].as_bool(), eq(Some(false)));
    assert!(value["user"].is_null());
}

#[tokio::test]
async fn given_signed_in_when_signed_out_then_whoami_reports_signed_out() {
    let manager = test_manager();
    execute(&manager, sign_in(true)).await.unwrap();

    execute(&manager, Commands::SignOut).await.unwrap();

    let value = describe(&manager.snapshot());
    assert_that!(value["state"].as_str(), eq(Some("signed_out")));
    assert!(value["user"].is_null());
}

#[tokio::test]
async fn given_recovery_commands_when_executed_then_all_succeed() {
    let manager = test_manager();

    let forgot = execute(
        &manager,
        Commands::ForgotPassword {
            email: "jane.doe@co.com".to_string(),
        },
    )
    .await
    .unwrap();
    let reset = execute(
        &manager,
        Commands::ResetPassword {
            token: "token".to_string(),
            password: "new-secret".to_string(),
        },
    )
    .await
    .unwrap();
    let verified = execute(
        &manager,
        Commands::VerifyEmail {
            token: "token".to_string(),
        },
    )
    .await
    .unwrap();

    assert_that!(forgot["reset_requested"].as_bool(), eq(Some(true)));
    assert_that!(reset["password_reset"].as_bool(), eq(Some(true)));
    assert_that!(verified["email_verified"].as_bool(), eq(Some(true)));
}

#[tokio::test]
async fn given_nested_shell_when_executed_then_error() {
    let manager = test_manager();

    let result = execute(&manager, Commands::Shell).await;

    assert!(matches!(result, Err(CliError::Shell { .. })));
}

#[test]
fn given_value_when_rendered_compact_and_pretty_then_formats_differ() {
    let value = serde_json::json!({ "signed_out": true });

    let compact = render(&value, false).unwrap();
    let pretty = render(&value, true).unwrap();

    assert_that!(compact.as_str(), eq(r#"{"signed_out":true}"#));
    assert!(pretty.contains('\n'));
}
