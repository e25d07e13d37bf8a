//! Digit criterion - checks for a decimal digit.

/// Returns `true` if the password contains at least one character in `0-9`.
pub fn digit_met(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}
