//! Dot-separated identifiers of pre-release and build labels

use std::cmp::Ordering;
use std::fmt;

/// A single identifier of a pre-release or build label.
///
/// Numeric identifiers keep their digits as text so that arbitrarily long
/// values compare correctly without overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier<'a> {
    /// An identifier made only of ASCII digits
    Numeric(&'a str),
    /// An identifier containing at least one non-digit
    AlphaNumeric(&'a str),
}

impl<'a> Identifier<'a> {
    /// Classify a single identifier
    pub fn new(identifier: &'a str) -> Self {
        if !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(identifier)
        } else {
            Identifier::AlphaNumeric(identifier)
        }
    }

    /// Split a label on `.` and classify each part
    pub fn parse_list(label: &'a str) -> impl Iterator<Item = Identifier<'a>> + 'a {
        label.split('.').map(Identifier::new)
    }

    /// Get the identifier text as written
    pub fn as_str(&self) -> &'a str {
        match self {
            Identifier::Numeric(s) | Identifier::AlphaNumeric(s) => s,
        }
    }

    /// Check if the identifier is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Equal values with different spellings (`007`, `7`) fall back to text
            (Identifier::Numeric(a), Identifier::Numeric(b)) => {
                compare_numeric(a, b).then_with(|| a.cmp(b))
            }
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compare two digit strings by value, ignoring leading zeros
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two non-empty pre-release labels identifier by identifier.
pub(crate) fn compare_pre_release(a: &str, b: &str) -> Ordering {
    let mut left = Identifier::parse_list(a);
    let mut right = Identifier::parse_list(b);

    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => match l.cmp(&r) {
                Ordering::Equal => continue,
                ord => return ord,
            },
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}
