//! meshq-core — keyword parsing and PubMed query assembly.
//!
//! This crate owns the pipeline from a raw keyword string to a boolean query,
//! plus the configuration shared by the CLI and the expander crate.
//!
//! # Pipeline
//!
//! ```text
//! raw ──► keywords ──► Expander ──► QueryGroup* ──► Query
//! ```
//!
//! The expansion step is a trait seam; this crate does no term lookup itself.

pub mod config;
pub mod keywords;
pub mod query;
pub mod types;

pub use keywords::{parse_keywords, parse_keywords_with, DEFAULT_DELIMITER};
pub use query::{build_pubmed_query, build_query, Expander, QueryBuilder};
pub use types::{Query, QueryGroup};
