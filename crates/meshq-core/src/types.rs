//! Core types for meshq-core.
//!
//! A [`Query`] is an ordered list of [`QueryGroup`]s. Each group is the
//! expansion of one keyword; groups are ANDed, the terms inside a group are
//! ORed.

use serde::Serialize;

/// Operator joining the terms of one group.
pub const OR: &str = " OR ";
/// Operator joining groups.
pub const AND: &str = " AND ";

/// The expansion of a single keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryGroup {
    /// Keyword as parsed from the input (trimmed).
    pub keyword: String,
    /// Expanded terms, verbatim from the expander. Never empty.
    pub terms: Vec<String>,
}

impl std::fmt::Display for QueryGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.terms.join(OR))
    }
}

/// A boolean PubMed query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    pub groups: Vec<QueryGroup>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(AND)?;
            }
            write!(f, "{group}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
