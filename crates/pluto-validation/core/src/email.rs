//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// local-part: dot-separated atoms or a quoted string
// domain: dotted labels with an alphabetic top label, or a bracketed IPv4 literal
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?i)^(?:[^<>()\[\]\\.,;:\s@"]+(?:\.[^<>()\[\]\\.,;:\s@"]+)*|".+")"#,
        r"@(?:\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]|(?:[a-z0-9-]+\.)+[a-z]{2,})$",
    ))
    .unwrap()
});

/// Validates email format
///
/// Accepts an RFC 5322 subset:
/// - Unquoted local parts made of dot-separated atoms, or a quoted local part
/// - Domains of letters, digits and hyphens with a top label of 2+ letters
/// - Bracketed IPv4 literals such as `user@[192.168.0.1]`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
