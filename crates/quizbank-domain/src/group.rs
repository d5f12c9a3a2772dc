//! Group keys and the initials-based ID scheme
//!
//! IDs look like `BDD_T1_007`: the uppercased first letter of every word of
//! the subject, the same for the source, and a sequence number scoped to that
//! prefix. Two groups whose names share initials ("Bases de Datos" and
//! "Biología de Diatomeas") share a prefix and therefore one numbering
//! sequence; IDs stay unique, but the prefix alone does not identify a group.

use std::fmt;

/// Minimum number of digits in the sequence part of an ID
pub const SEQUENCE_WIDTH: usize = 3;

/// A `(subject, source)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    /// Subject (asignatura)
    pub subject: String,
    /// Source (origen)
    pub source: String,
}

impl GroupKey {
    /// Create a new group key
    pub fn new(subject: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            source: source.into(),
        }
    }

    /// ID prefix shared by every question of this group, e.g. `BDD_T1_`
    pub fn id_prefix(&self) -> String {
        format!("{}_{}_", initials(&self.subject), initials(&self.source))
    }

    /// Full ID for the given sequence number
    pub fn id_for(&self, sequence: u64) -> String {
        format!("{}{:0width$}", self.id_prefix(), sequence, width = SEQUENCE_WIDTH)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.subject, self.source)
    }
}

/// Uppercased first letter of every whitespace-separated word.
///
/// # Examples
///
/// ```
/// use quizbank_domain::initials;
///
/// assert_eq!(initials("Bases de Datos"), "BDD");
/// assert_eq!(initials("Test 1"), "T1");
/// ```
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Sequence number of `id` if it starts with `prefix` and its last
/// `_`-separated segment is all digits.
pub fn sequence_of(id: &str, prefix: &str) -> Option<u64> {
    if !id.starts_with(prefix) {
        return None;
    }
    let last = id.rsplit('_').next()?;
    if last.is_empty() || !last.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    last.parse().ok()
}
