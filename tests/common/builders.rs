//! Test builders — a scripted expander and CLI argument helpers.
//!
//! These are for readability in test assertions, not for production use.

use meshq::cli::Cli;
use meshq::Expander;
use std::cell::RefCell;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// FakeExpander
// ---------------------------------------------------------------------------

/// Expander with a fixed keyword → terms table that records every call.
/// Unknown keywords expand to nothing.
///
/// ```rust
/// let fake = FakeExpander::new()
///     .with("x", ["a", "b"])
///     .with("z", ["c"]);
/// ```
#[derive(Debug, Default)]
pub struct FakeExpander {
    table: HashMap<String, Vec<String>>,
    calls: RefCell<Vec<String>>,
}

impl FakeExpander {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<I, S>(mut self, keyword: &str, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table
            .insert(keyword.to_string(), terms.into_iter().map(Into::into).collect());
        self
    }

    /// Keywords passed to [`Expander::expand`], in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Expander for FakeExpander {
    fn expand(&self, keyword: &str) -> Vec<String> {
        self.calls.borrow_mut().push(keyword.to_string());
        self.table.get(keyword).cloned().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Parse CLI args (without the program name), panicking on invalid input.
pub fn cli(args: &[&str]) -> Cli {
    use clap::Parser;
    Cli::try_parse_from(std::iter::once("meshq").chain(args.iter().copied()))
        .expect("test CLI args must parse")
}

/// Run the CLI against `stdin` and return what it printed.
pub fn run_cli(args: &[&str], stdin: &str) -> anyhow::Result<String> {
    let mut out = Vec::new();
    meshq::cli::run(&cli(args), stdin.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).expect("CLI output is UTF-8"))
}
