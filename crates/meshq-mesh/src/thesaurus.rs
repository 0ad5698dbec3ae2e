//! Thesaurus — MeSH descriptors behind an FST lookup index.
//!
//! Every heading and entry term is normalised (lowercased, whitespace
//! collapsed) and stored as a key in an [`fst::Map`] whose value is the index
//! of the owning [`Descriptor`].
//!
//! # Collisions
//!
//! - Two descriptors with the same normalised heading: the later replaces the
//!   earlier in place. This is how an extra thesaurus file overrides a
//!   built-in heading.
//! - A heading always owns its own key; another descriptor's entry term can
//!   not take it over.
//! - Two entry terms with the same key: the later descriptor wins.

use fst::{Automaton, IntoStreamer, Streamer};
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::ontology::BUILTIN;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("thesaurus file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to load thesaurus {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },
    #[error("descriptor with empty heading")]
    EmptyHeading,
    #[error("failed to build term index: {0}")]
    Index(#[from] fst::Error),
}

// ---------------------------------------------------------------------------
// Descriptor
// ---------------------------------------------------------------------------

/// A MeSH heading and its entry terms (synonyms).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Descriptor {
    pub heading: String,
    #[serde(default)]
    pub entry_terms: Vec<String>,
}

impl Descriptor {
    pub fn new<I, S>(heading: impl Into<String>, entry_terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            heading: heading.into(),
            entry_terms: entry_terms.into_iter().map(Into::into).collect(),
        }
    }
}

/// On-disk shape of an extra thesaurus file.
///
/// ```toml
/// [[descriptor]]
/// heading = "Sleep Apnea Syndromes"
/// entry_terms = ["Sleep Apnea", "Sleep-Disordered Breathing"]
/// ```
#[derive(Debug, Deserialize)]
struct ThesaurusFile {
    #[serde(default)]
    descriptor: Vec<Descriptor>,
}

/// Lowercase, trim, and collapse inner whitespace to single spaces.
pub fn normalize(term: &str) -> String {
    WHITESPACE.replace_all(term.trim(), " ").to_lowercase()
}

// ---------------------------------------------------------------------------
// Thesaurus
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct MeshThesaurus {
    descriptors: Vec<Descriptor>,
    index: fst::Map<Vec<u8>>,
}

impl MeshThesaurus {
    /// The compiled-in headings only.
    pub fn builtin() -> Result<Self, MeshError> {
        Self::from_descriptors(builtin_descriptors())
    }

    /// Built-in headings followed by the descriptors of a TOML/JSON file.
    pub fn with_extra(path: &Path) -> Result<Self, MeshError> {
        let extra = load_descriptors(path)?;
        tracing::info!(path = %path.display(), count = extra.len(), "thesaurus: extra descriptors loaded");
        Self::from_descriptors(builtin_descriptors().chain(extra))
    }

    pub fn from_descriptors<I>(descriptors: I) -> Result<Self, MeshError>
    where
        I: IntoIterator<Item = Descriptor>,
    {
        let mut merged: Vec<Descriptor> = Vec::new();
        let mut by_heading: HashMap<String, usize> = HashMap::new();
        for descriptor in descriptors {
            let key = normalize(&descriptor.heading);
            if key.is_empty() {
                return Err(MeshError::EmptyHeading);
            }
            match by_heading.get(&key) {
                Some(&slot) => {
                    tracing::debug!(heading = %descriptor.heading, "thesaurus: heading replaced");
                    merged[slot] = descriptor;
                }
                None => {
                    by_heading.insert(key, merged.len());
                    merged.push(descriptor);
                }
            }
        }

        // key -> (descriptor index, key is that descriptor's heading)
        let mut keys: BTreeMap<String, (u64, bool)> = BTreeMap::new();
        for (idx, descriptor) in merged.iter().enumerate() {
            let idx = idx as u64;
            keys.insert(normalize(&descriptor.heading), (idx, true));
        }
        for (idx, descriptor) in merged.iter().enumerate() {
            let idx = idx as u64;
            for term in &descriptor.entry_terms {
                let key = normalize(term);
                if key.is_empty() {
                    continue;
                }
                match keys.get(&key).copied() {
                    Some((owner, _)) if owner == idx => {}
                    Some((_, true)) => {
                        tracing::warn!(term = %term, heading = %descriptor.heading, "thesaurus: entry term shadows another heading, ignored");
                    }
                    Some((owner, false)) => {
                        tracing::warn!(
                            term = %term,
                            previous = %merged[owner as usize].heading,
                            heading = %descriptor.heading,
                            "thesaurus: entry term reassigned"
                        );
                        keys.insert(key, (idx, false));
                    }
                    None => {
                        keys.insert(key, (idx, false));
                    }
                }
            }
        }

        let index = fst::Map::from_iter(keys.into_iter().map(|(k, (idx, _))| (k, idx)))?;
        tracing::debug!(descriptors = merged.len(), keys = index.len(), "thesaurus: index built");
        Ok(Self { descriptors: merged, index })
    }

    /// Resolve a keyword (heading or entry term, any case) to its descriptor.
    pub fn lookup(&self, keyword: &str) -> Option<&Descriptor> {
        let idx = self.index.get(normalize(keyword))?;
        self.descriptors.get(idx as usize)
    }

    /// Known lookup keys starting with `prefix`, in lexicographic order.
    pub fn prefix(&self, prefix: &str) -> Vec<String> {
        let key = normalize(prefix);
        let automaton = fst::automaton::Str::new(&key).starts_with();
        let mut stream = self.index.search(automaton).into_stream();
        let mut out = Vec::new();
        while let Some((key, _)) = stream.next() {
            out.push(String::from_utf8_lossy(key).into_owned());
        }
        out
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

fn builtin_descriptors() -> impl Iterator<Item = Descriptor> {
    BUILTIN
        .entries()
        .map(|(heading, terms)| Descriptor::new(*heading, terms.iter().copied()))
}

fn load_descriptors(path: &Path) -> Result<Vec<Descriptor>, MeshError> {
    if !path.exists() {
        return Err(MeshError::NotFound(path.to_path_buf()));
    }
    let load = |source: config::ConfigError| MeshError::Load { path: path.to_path_buf(), source };
    let file: ThesaurusFile = config::Config::builder()
        .add_source(config::File::from(path))
        .build()
        .map_err(load)?
        .try_deserialize()
        .map_err(load)?;
    Ok(file.descriptor)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
