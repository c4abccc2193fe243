use std::fmt::Formatter;

/// Columns cleared before every write. Wider than the published schema so
/// stale cells from older layouts are removed too.
pub const CLEAR_FIRST_COLUMN: &str = "A";
pub const CLEAR_LAST_COLUMN: &str = "Z";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(pub String);

impl A1Notation {
    /// Whole-column range `<tab>!A:Z`.
    pub fn clear_range(tab_name: &str) -> Self {
        A1Notation(format!(
            "{}!{}:{}",
            tab_name, CLEAR_FIRST_COLUMN, CLEAR_LAST_COLUMN
        ))
    }

    /// Top-left anchor `<tab>!A1`.
    pub fn top_left(tab_name: &str) -> Self {
        A1Notation(format!("{}!A1", tab_name))
    }
}

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<A1Notation> for String {
    fn from(a1_notation: A1Notation) -> Self {
        a1_notation.0
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
