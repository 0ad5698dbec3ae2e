//! Query assembly — expands each keyword and combines the results.
//!
//! Every parsed keyword is handed to an [`Expander`]. A non-empty expansion
//! becomes one OR-group; empty expansions are skipped. Groups are ANDed in
//! keyword order. Terms are used verbatim: no deduplication, quoting or
//! escaping happens here.

use crate::keywords::{parse_keywords_with, DEFAULT_DELIMITER};
use crate::types::{Query, QueryGroup};

/// Turns one keyword into the search terms that should stand for it.
///
/// An empty result means "no usable expansion" and drops the keyword from
/// the query.
pub trait Expander {
    fn expand(&self, keyword: &str) -> Vec<String>;
}

impl<F> Expander for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn expand(&self, keyword: &str) -> Vec<String> {
        self(keyword)
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Query builder carrying the keyword delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryBuilder {
    delimiter: char,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self { delimiter: DEFAULT_DELIMITER }
    }
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse `raw`, expand each keyword once and collect the non-empty groups.
    pub fn build<E: Expander + ?Sized>(&self, raw: &str, expander: &E) -> Query {
        let keywords = parse_keywords_with(raw, self.delimiter);
        tracing::debug!(count = keywords.len(), delimiter = %self.delimiter, "query: keywords parsed");

        let mut groups = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            let terms = expander.expand(&keyword);
            if terms.is_empty() {
                tracing::debug!(%keyword, "query: empty expansion, keyword skipped");
                continue;
            }
            tracing::debug!(%keyword, terms = terms.len(), "query: keyword expanded");
            groups.push(QueryGroup { keyword, terms });
        }

        Query { groups }
    }
}

/// Build a [`Query`] from `;`-delimited keywords.
pub fn build_query<E: Expander + ?Sized>(raw: &str, expander: &E) -> Query {
    QueryBuilder::default().build(raw, expander)
}

/// Build the rendered PubMed query string, e.g. `(a OR b) AND (c)`.
///
/// Returns an empty string when no keyword produced any terms.
pub fn build_pubmed_query<E: Expander + ?Sized>(raw: &str, expander: &E) -> String {
    build_query(raw, expander).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
