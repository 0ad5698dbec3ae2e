//! Keyword parsing — splits the raw user input into trimmed keywords.

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = ';';

/// Split `raw` on `;`, trim each piece and drop the empty ones.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    parse_keywords_with(raw, DEFAULT_DELIMITER)
}

/// Unicode whitespace plus the ASCII separators U+001C..=U+001F.
fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Like [`parse_keywords`] with an explicit delimiter.
///
/// Order and duplicates are preserved. Whitespace inside a keyword is left
/// as typed.
pub fn parse_keywords_with(raw: &str, delimiter: char) -> Vec<String> {
    raw.split(delimiter)
        .map(|kw| kw.trim_matches(is_trimmed))
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect()
}
