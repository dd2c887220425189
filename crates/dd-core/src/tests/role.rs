use crate::{CoreError, Role};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_free_text_label_when_parsed_then_kept_trimmed() {
    let role = Role::from_str("  Data Analyst ").unwrap();

    assert_that!(role.as_str(), eq("Data Analyst"));
}

#[test]
fn given_blank_label_when_parsed_then_returns_invalid_role() {
    let result = Role::from_str("   ");

    assert!(matches!(result, Err(CoreError::InvalidRole { ref value, .. }) if value == "   "));
}

#[test]
fn given_role_when_serialized_then_plain_string() {
    let json = serde_json::to_string(&Role::admin()).unwrap();

    assert_that!(json.as_str(), eq("\"Admin\""));
    assert_eq!(Role::default(), Role::user());
}

#[test]
fn given_unrecognized_stored_label_when_deserialized_then_preserved() {
    let role: Role = serde_json::from_str("\"Regional Planner\"").unwrap();

    assert_that!(role.as_str(), eq("Regional Planner"));
}
