use crate::shell::run_lines;
use crate::tests::test_manager;

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq, not};

async fn run_script(script: &str) -> (String, dd_session::SessionManager) {
    let manager = test_manager();
    let mut out = Vec::new();

    run_lines(&manager, script.as_bytes(), &mut out, false)
        .await
        .unwrap();

    (String::from_utf8(out).unwrap(), manager)
}

#[tokio::test]
async fn given_ephemeral_sign_in_when_whoami_later_in_shell_then_still_signed_in() {
    let (output, manager) = run_script(
        "sign-in --email jane.doe@co.com --password secret1\n\
         whoami\n",
    )
    .await;

    let lines: Vec<&str> = output.lines().collect();
    assert_that!(lines.len(), eq(2));
    assert_that!(lines[1], contains_substring(r#""state":"signed_in""#));
    assert!(manager.is_authenticated());
}

#[tokio::test]
async fn given_quoted_name_when_signing_up_in_shell_then_name_is_kept_whole() {
    let (output, _manager) = run_script(
        r#"sign-up --email new@co.com --password secret1 --name "New Person"
"#,
    )
    .await;

    assert_that!(output, contains_substring(r#""name":"New Person""#));
}

#[tokio::test]
async fn given_exit_when_more_lines_follow_then_they_are_not_run() {
    let (output, manager) = run_script(
        "# comment\n\
         \n\
         exit\n\
         sign-in --email jane.doe@co.com --password secret1\n",
    )
    .await;

    assert_that!(output.as_str(), eq(""));
    assert!(!manager.is_authenticated());
}

#[tokio::test]
async fn given_bad_lines_when_run_then_errors_are_reported_and_shell_continues() {
    let (output, manager) = run_script(
        "sign-in --email jane.doe@co.com --password 123\n\
         frobnicate\n\
         sign-up --name \"unterminated\n\
         sign-in --email jane.doe@co.com --password secret1\n",
    )
    .await;

    assert_that!(output, contains_substring("Invalid credentials"));
    assert_that!(output, contains_substring("unterminated"));
    assert_that!(output, not(contains_substring("panicked")));
    assert!(manager.is_authenticated());
}
