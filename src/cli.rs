//! Command-line surface of `meshq`.
//!
//! [`run`] takes its input and output streams as parameters so the harnesses
//! can drive it without a terminal.

use anyhow::Context;
use clap::Parser;
use std::io::{Read, Write};
use std::path::PathBuf;

use meshq_core::config::{Config, ConfigError};
use meshq_core::QueryBuilder;
use meshq_mesh::MeshExpander;

#[derive(Debug, Parser)]
#[command(name = "meshq", about = "Build a PubMed query from MeSH-expanded keywords")]
pub struct Cli {
    /// Keywords separated by the delimiter (default `;`). Omit or pass `-` to read stdin.
    pub keywords: Option<String>,

    /// Config file to use instead of ~/.config/meshq/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Extra thesaurus file (TOML or JSON) merged over the built-in headings.
    #[arg(long, value_name = "PATH")]
    pub thesaurus: Option<PathBuf>,

    /// Keyword delimiter.
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Print the query and its groups as JSON.
    #[arg(long)]
    pub json: bool,

    /// Only emit the MeSH heading for resolved keywords.
    #[arg(long)]
    pub no_entry_terms: bool,

    /// Drop keywords that resolve to no heading instead of searching them verbatim.
    #[arg(long)]
    pub no_fallback: bool,

    /// Cap on terms per keyword (0 = unlimited).
    #[arg(long, value_name = "N")]
    pub max_terms: Option<usize>,

    /// List known thesaurus terms starting with PREFIX and exit.
    #[arg(long, value_name = "PREFIX")]
    pub suggest: Option<String>,

    /// Log at debug level to stderr.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    ///
    /// Validation runs after the overrides, so a flag can replace a bad value
    /// from the file. An unusable `--config` file is an error; an unusable
    /// default config file falls back to the built-in defaults.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => {
                let cfg = Config::load_from(path)
                    .with_context(|| format!("loading config {}", path.display()))?;
                self.apply_overrides(cfg)
                    .with_context(|| format!("validating config {}", path.display()))
            }
            None => {
                match Config::load().and_then(|cfg| self.apply_overrides(cfg)) {
                    Ok(cfg) => Ok(cfg),
                    Err(err) => {
                        tracing::warn!(%err, "config: falling back to defaults");
                        Ok(self.apply_overrides(Config::defaults())?)
                    }
                }
            }
        }
    }

    fn apply_overrides(&self, mut cfg: Config) -> Result<Config, ConfigError> {
        if let Some(delimiter) = self.delimiter {
            cfg.query.delimiter = delimiter.to_string();
        }
        if let Some(path) = &self.thesaurus {
            cfg.expansion.thesaurus = Some(path.clone());
        }
        if self.no_entry_terms {
            cfg.expansion.include_entry_terms = false;
        }
        if self.no_fallback {
            cfg.expansion.fallback_to_keyword = false;
        }
        if let Some(n) = self.max_terms {
            cfg.expansion.max_terms = n;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Execute one invocation. Keywords come from `cli.keywords` or, when absent
/// or `-`, from `input`.
pub fn run<R: Read, W: Write>(cli: &Cli, mut input: R, out: &mut W) -> anyhow::Result<()> {
    let cfg = cli.resolve_config()?;
    let expander = MeshExpander::from_config(&cfg.expansion).context("loading MeSH thesaurus")?;

    if let Some(prefix) = &cli.suggest {
        for term in expander.thesaurus().prefix(prefix) {
            writeln!(out, "{term}")?;
        }
        return Ok(());
    }

    let raw = match cli.keywords.as_deref() {
        Some(keywords) if keywords != "-" => keywords.to_string(),
        _ => {
            let mut buf = String::new();
            input.read_to_string(&mut buf).context("reading keywords from stdin")?;
            buf
        }
    };

    let query = QueryBuilder::new()
        .delimiter(cfg.query.delimiter_char())
        .build(&raw, &expander);
    if query.is_empty() {
        tracing::warn!("no keyword produced any search terms");
    }

    if cli.json {
        let rendered = serde_json::json!({
            "query": query.to_string(),
            "groups": query.groups,
        });
        serde_json::to_writer_pretty(&mut *out, &rendered)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{query}")?;
    }
    Ok(())
}
