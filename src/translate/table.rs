//! Key→string translation tables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The translations for a single locale.
///
/// A table is a flat key→string map. It deserializes transparently from any
/// flat map format (`serde_json` flat objects being the common case) and can
/// also be parsed from Java-style `.properties` text with
/// [`TranslationTable::from_properties`], since that is the format
/// translation files have historically shipped in.
///
/// [`TranslationTable::get`] returns `Option<&str>`: an absent key is never
/// conflated with a key whose translation is the empty string.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The translation for `key`, if the table has one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or replace the translation for `key`, returning the previous
    /// value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the `(key, translation)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Parse `.properties`-style text.
    ///
    /// Supported: `#`/`!` comment lines, `=` and `:` separators, backslash
    /// line continuations, and single-character escapes (`\t`, `\n`, `\r`,
    /// `\\`, `\=`, `\:`, …). Unicode `\uXXXX` escapes are not interpreted —
    /// ship translation files as UTF-8 instead.
    pub fn from_properties(text: &str) -> Self {
        let mut entries = HashMap::new();
        let mut lines = text.lines();

        while let Some(line) = lines.next() {
            let mut logical = line.trim_start().to_owned();
            if logical.is_empty() || logical.starts_with('#') || logical.starts_with('!') {
                continue;
            }

            // A trailing unescaped backslash joins the next line, with its
            // leading whitespace dropped.
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some(next) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let (key, value) = split_pair(&logical);
            entries.insert(unescape(key.trim_end()), unescape(value.trim_start()));
        }

        Self { entries }
    }
}

impl From<HashMap<String, String>> for TranslationTable {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for TranslationTable {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(key, value)| (key.into(), value.into())));
    }
}

fn ends_with_continuation(line: &str) -> bool {
    line.bytes().rev().take_while(|byte| *byte == b'\\').count() % 2 == 1
}

/// Split a logical line at the first unescaped `=` or `:`.
fn split_pair(line: &str) -> (&str, &str) {
    let mut escaped = false;

    for (index, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match ch {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..index], &line[index + 1..]),
            _ => {}
        }
    }

    // No separator: the whole line is a key with an empty value.
    (line, "")
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::TranslationTable;

    #[test]
    fn parses_basic_properties() {
        let table = TranslationTable::from_properties(
            "# command strings\n\
             GREETING = Hello\n\
             FAREWELL=Goodbye\n\
             ! legacy comment style\n\
             PROMPT: Pick a user\n",
        );

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("GREETING"), Some("Hello"));
        assert_eq!(table.get("FAREWELL"), Some("Goodbye"));
        assert_eq!(table.get("PROMPT"), Some("Pick a user"));
    }

    #[test]
    fn empty_value_is_present_not_absent() {
        let table = TranslationTable::from_properties("EMPTY=\nBARE_KEY\n");

        assert_eq!(table.get("EMPTY"), Some(""));
        assert_eq!(table.get("BARE_KEY"), Some(""));
        assert_eq!(table.get("MISSING"), None);
    }

    #[test]
    fn line_continuations_join() {
        let table = TranslationTable::from_properties(
            "HELP = first line \\\n    second line\n",
        );

        assert_eq!(table.get("HELP"), Some("first line second line"));
    }

    #[test]
    fn escaped_separators_stay_in_the_key() {
        let table = TranslationTable::from_properties("a\\=b = c\nTAB = col1\\tcol2\n");

        assert_eq!(table.get("a=b"), Some("c"));
        assert_eq!(table.get("TAB"), Some("col1\tcol2"));
    }

    #[test]
    fn loads_from_flat_json() {
        let table: TranslationTable = serde_json::from_value(serde_json::json!({
            "GREETING": "Bonjour",
            "FAREWELL": "Au revoir",
        }))
        .unwrap();

        assert_eq!(table.get("GREETING"), Some("Bonjour"));
    }

    #[test]
    fn collects_from_pairs() {
        let table: TranslationTable = [("GREETING", "Hallo")].into_iter().collect();

        assert_eq!(table.get("GREETING"), Some("Hallo"));
        assert!(!table.is_empty());
    }
}
