//! Text normalization shared by every extraction stage

/// Collapse newlines, carriage returns, tabs and whitespace runs into single
/// spaces and trim both ends.
///
/// Empty input yields an empty string. The function is idempotent.
///
/// # Examples
///
/// ```
/// use quizbank_domain::clean_text;
///
/// assert_eq!(clean_text("  Bases\tde\r\nDatos  "), "Bases de Datos");
/// assert_eq!(clean_text(""), "");
/// ```
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.replace(['\n', '\r', '\t'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
