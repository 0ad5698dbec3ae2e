//! Domain-specific assertion macros for meshq harnesses.
//!
//! These wrap `pretty_assertions` and say which query invariant failed.

/// Assert that a rendered query is well formed: no empty `()` group, no
/// leading or trailing ` AND `, and exactly `$groups` top-level groups.
///
/// Only meaningful for terms without parentheses of their own.
#[macro_export]
macro_rules! assert_query_shape {
    ($query:expr, $groups:expr) => {{
        let query: &str = &$query;
        let groups: usize = $groups;
        assert!(!query.contains("()"), "assert_query_shape! failed: empty group in {query:?}");
        assert!(
            !query.starts_with(" AND") && !query.ends_with("AND "),
            "assert_query_shape! failed: dangling AND in {query:?}"
        );
        let actual = if query.is_empty() { 0 } else { query.split(") AND (").count() };
        pretty_assertions::assert_eq!(
            actual, groups,
            "assert_query_shape! failed: group count mismatch in {query:?}"
        );
    }};
}

/// Assert that every keyword of `$query` (a `meshq::Query`) is in `$keywords`
/// order, i.e. groups were emitted in input order.
#[macro_export]
macro_rules! assert_group_keywords {
    ($query:expr, [$($kw:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $query.groups.iter().map(|g| g.keyword.as_str()).collect();
        let expected: Vec<&str> = vec![$($kw),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_group_keywords! failed");
    }};
}
