//! Input validation helpers for account and catalog fields

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_.-]{3,32}$").expect("valid username regex"));

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate an email address format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate a username: 3-32 chars, alphanumeric plus `_ . -`
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}

/// Validate password strength: minimum length plus at least one letter and one digit
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Turn an arbitrary display name into a URL-safe slug
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }

    slug.trim_end_matches('-').to_string()
}
