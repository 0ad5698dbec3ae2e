//! MeSH expander — turns a keyword into PubMed field-tagged terms.
//!
//! A keyword that resolves to a descriptor expands to the heading tagged
//! `[MeSH Terms]` followed by its entry terms tagged `[Title/Abstract]`. An
//! unresolved keyword falls back to itself as a `[Title/Abstract]` term, or
//! to nothing when fallback is disabled.

use meshq_core::config::ExpansionConfig;
use meshq_core::Expander;

use crate::thesaurus::{MeshError, MeshThesaurus};

pub const MESH_TAG: &str = "[MeSH Terms]";
pub const TIAB_TAG: &str = "[Title/Abstract]";

/// Quote `term` for PubMed and append a field tag. Embedded double quotes
/// are dropped; a term that is empty afterwards yields `None`.
fn tagged(term: &str, tag: &str) -> Option<String> {
    let cleaned = term.replace('"', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    Some(format!("\"{cleaned}\"{tag}"))
}

#[derive(Debug)]
pub struct MeshExpander {
    thesaurus: MeshThesaurus,
    options: ExpansionConfig,
}

impl MeshExpander {
    pub fn new(thesaurus: MeshThesaurus, options: ExpansionConfig) -> Self {
        Self { thesaurus, options }
    }

    /// Build the thesaurus described by `options` (built-ins plus the
    /// optional extra file) and wrap it.
    pub fn from_config(options: &ExpansionConfig) -> Result<Self, MeshError> {
        let thesaurus = match &options.thesaurus {
            Some(path) => MeshThesaurus::with_extra(path)?,
            None => MeshThesaurus::builtin()?,
        };
        Ok(Self::new(thesaurus, options.clone()))
    }

    pub fn thesaurus(&self) -> &MeshThesaurus {
        &self.thesaurus
    }
}

impl Expander for MeshExpander {
    fn expand(&self, keyword: &str) -> Vec<String> {
        let mut terms = match self.thesaurus.lookup(keyword) {
            Some(descriptor) => {
                tracing::debug!(%keyword, heading = %descriptor.heading, "mesh: resolved");
                let mut terms: Vec<String> =
                    tagged(&descriptor.heading, MESH_TAG).into_iter().collect();
                if self.options.include_entry_terms {
                    terms.extend(descriptor.entry_terms.iter().filter_map(|t| tagged(t, TIAB_TAG)));
                }
                terms
            }
            None if self.options.fallback_to_keyword => {
                tracing::debug!(%keyword, "mesh: unresolved, using keyword");
                tagged(keyword, TIAB_TAG).into_iter().collect()
            }
            None => {
                tracing::debug!(%keyword, "mesh: unresolved, no fallback");
                Vec::new()
            }
        };

        if self.options.max_terms > 0 {
            terms.truncate(self.options.max_terms);
        }
        terms
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
