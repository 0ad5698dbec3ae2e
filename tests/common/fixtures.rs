//! Static inputs used across harnesses.

/// A config file that leaves every default in place.
pub const CONFIG_DEFAULTS: &str = "[query]\ndelimiter = \";\"\n";

/// An extra thesaurus adding one heading and overriding `Asthma`.
pub const THESAURUS_TOML: &str = r#"
[[descriptor]]
heading = "Sleep Apnea Syndromes"
entry_terms = ["Sleep Apnea", "Sleep-Disordered Breathing"]

[[descriptor]]
heading = "Asthma"
entry_terms = ["Asthmas"]
"#;

/// Keyword strings paired with the keywords they should parse into.
pub const KEYWORD_CASES: &[(&str, &[&str])] = &[
    ("", &[]),
    ("  ;  ; ", &[]),
    ("asthma", &["asthma"]),
    ("asthma;copd", &["asthma", "copd"]),
    ("  heart attack ;; type 2 diabetes  ", &["heart attack", "type 2 diabetes"]),
    ("flu;flu", &["flu", "flu"]),
];

/// Write `contents` to `name` inside a fresh temp dir. Keep the dir alive for
/// as long as the file is needed.
pub fn temp_file(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write temp file");
    (dir, path)
}
