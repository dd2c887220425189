//! Display-name and avatar derivation from an email address.

/// Everything before the first `@`, or the whole input when there is none.
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Turn the local part of an email into a display name.
///
/// Non-letters become word breaks and each word is capitalized:
/// `jane.doe@co.com` becomes `Jane Doe`. Falls back to the raw local part
/// when it contains no letters at all.
pub fn humanize_local_part(email: &str) -> String {
    let local = local_part(email);

    let words: Vec<String> = local
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        return local.to_string();
    }

    words.join(" ")
}

/// Avatar URI seeded by the email, e.g. `{base}?seed=jane%40co.com`.
pub fn avatar_for_email(base_url: &str, email: &str) -> String {
    format!("{}?seed={}", base_url, urlencoding::encode(email))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
