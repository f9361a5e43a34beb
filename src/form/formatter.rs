//! Email normalization

/// Normalize raw email text: trim surrounding whitespace, then lowercase.
///
/// Total over all strings; empty input yields an empty string.
pub fn format_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
