//! Uppercase criterion - checks for a Latin capital letter.

/// Returns `true` if the password contains at least one character in `A-Z`.
pub fn uppercase_met(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}
