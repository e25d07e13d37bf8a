//! Length criterion - checks password minimum length.

/// Minimum number of characters (not bytes) a password needs.
pub const MIN_LENGTH: usize = 10;

/// Returns `true` if the password has at least [`MIN_LENGTH`] characters.
pub fn length_met(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
