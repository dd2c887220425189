use crate::{CliError, CliResult};

/// Split a shell line into words.
///
/// Whitespace separates words; single or double quotes group text (quotes
/// themselves are dropped), so `--name "Jane Doe"` yields two words.
pub fn split(line: &str) -> CliResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(CliError::shell(format!("unterminated {} quote", q)));
    }

    if in_word {
        words.push(current);
    }

    Ok(words)
}
