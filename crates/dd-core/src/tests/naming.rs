use crate::{DEFAULT_AVATAR_BASE_URL, avatar_for_email, humanize_local_part, local_part};

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_dotted_local_part_when_humanized_then_words_are_capitalized() {
    let name = humanize_local_part("jane.doe@co.com");

    assert_that!(name.as_str(), eq("Jane Doe"));
}

#[test]
fn given_digits_and_underscores_when_humanized_then_they_become_single_breaks() {
    let name = humanize_local_part("john_smith99@example.org");

    assert_that!(name.as_str(), eq("John Smith"));
}

#[test]
fn given_mixed_case_local_part_when_humanized_then_inner_case_is_kept() {
    let name = humanize_local_part("mcDonald-o'neil@example.org");

    assert_that!(name.as_str(), eq("McDonald O Neil"));
}

#[test]
fn given_local_part_without_letters_when_humanized_then_falls_back_to_raw() {
    let name = humanize_local_part("12345@example.org");

    assert_that!(name.as_str(), eq("12345"));
}

#[test]
fn given_input_without_at_sign_when_local_part_then_returns_whole_input() {
    assert_that!(local_part("not-an-email"), eq("not-an-email"));
    assert_that!(local_part("a@b@c"), eq("a"));
}

#[test]
fn given_email_with_reserved_characters_when_avatar_built_then_seed_is_percent_encoded() {
    let avatar = avatar_for_email(DEFAULT_AVATAR_BASE_URL, "jane+ops@co.com");

    assert_that!(
        avatar.as_str(),
        eq("https://api.dicebear.com/7.x/avataaars/svg?seed=jane%2Bops%40co.com")
    );
}
