//! meshq-mesh — MeSH term expansion for meshq.
//!
//! [`MeshExpander`] implements [`meshq_core::Expander`] on top of a
//! [`MeshThesaurus`]: a compiled-in table of headings, optionally extended
//! from a TOML or JSON file, indexed by an FST over normalised terms.

pub mod expander;
pub mod ontology;
pub mod thesaurus;

pub use expander::MeshExpander;
pub use thesaurus::{normalize, Descriptor, MeshError, MeshThesaurus};
