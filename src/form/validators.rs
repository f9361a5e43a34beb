//! Validation predicates for the sign-up fields
//!
//! Every predicate is total: invalid input only ever yields `false`.

use unicode_segmentation::UnicodeSegmentation;

/// Password text that is rejected regardless of length
pub const FORBIDDEN_PASSWORD: &str = "password";

/// Minimum password length, counted in user-perceived characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Loose email shape check on an already formatted email.
///
/// Only requires an `@` and a `.` somewhere in the text; their order and
/// position are not checked.
pub fn is_valid_email(formatted: &str) -> bool {
    formatted.contains('@') && formatted.contains('.')
}

pub fn is_valid_password(password: &str) -> bool {
    password != FORBIDDEN_PASSWORD && password_length(password) >= MIN_PASSWORD_LENGTH
}

/// Length in extended grapheme clusters, so a base letter with combining
/// marks, a flag or a ZWJ emoji sequence each count once
pub fn password_length(password: &str) -> usize {
    password.graphemes(true).count()
}

/// Exact, case-sensitive comparison
pub fn password_matches(password: &str, confirmation: &str) -> bool {
    password == confirmation
}

pub fn is_password_valid_and_confirmed(password: &str, confirmation: &str) -> bool {
    is_valid_password(password) && password_matches(password, confirmation)
}
