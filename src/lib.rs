//! meshq — PubMed queries from MeSH-expanded keywords.
//!
//! This crate wires the pipeline crates together behind the `meshq` CLI and
//! re-exports them so integration tests can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! CLI ──► Config ──► MeshExpander ──► QueryBuilder ──► stdout
//! ```

pub mod cli;

pub use meshq_core::config::{Config, ConfigError, ExpansionConfig, QueryConfig};
pub use meshq_core::{
    build_pubmed_query, build_query, parse_keywords, parse_keywords_with, Expander, Query,
    QueryBuilder, QueryGroup,
};
pub use meshq_mesh::{Descriptor, MeshError, MeshExpander, MeshThesaurus};
