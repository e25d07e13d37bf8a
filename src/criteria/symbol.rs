//! Symbol criterion - checks for anything outside `[A-Za-z0-9]`.

/// Returns `true` if the password contains a character that is neither a
/// Latin letter nor a decimal digit.
///
/// Whitespace, punctuation, accented or non-Latin letters and any other
/// Unicode character all qualify.
pub fn symbol_met(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}
