use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_table_toml, TableConfigError};

pub const DEFAULT_TOML: &str = include_str!("default_table.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Immutable mapping from romanized spellings to Hebrew text.
#[derive(Debug, Clone)]
pub struct HebrewTable {
    map: HashMap<String, String>,
}

impl HebrewTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableConfigError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static HebrewTable {
        static INSTANCE: OnceLock<HebrewTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            HebrewTable::from_toml(toml_str).expect("hebrew table TOML must be valid")
        })
    }

    /// Build a standalone table, independent of the global one.
    pub fn from_toml(toml_str: &str) -> Result<HebrewTable, TableConfigError> {
        let map = parse_table_toml(toml_str)?;
        Ok(HebrewTable {
            map: map.into_iter().collect(),
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Mapped value for `key`, or `key` itself when it is not in the table.
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_table() -> HebrewTable {
        HebrewTable::from_toml(DEFAULT_TOML).unwrap()
    }

    #[test]
    fn base_letters() {
        let table = default_table();
        assert_eq!(table.lookup("A"), "\u{05D0}");
        assert_eq!(table.lookup("Ch"), "\u{05D7}");
        assert_eq!(table.lookup("Th"), "\u{05EA}");
        assert_eq!(table.lookup("Tz"), "\u{05E6}");
    }

    #[test]
    fn initial_spelling_matches_plain_letter() {
        let table = default_table();
        for (plain, initial) in [("K", "Ki"), ("M", "Mi"), ("N", "Ni"), ("P", "Pi"), ("Tz", "Tzi")] {
            assert_eq!(table.lookup(plain), table.lookup(initial), "{initial}");
        }
    }

    #[test]
    fn finals_are_distinct_glyphs() {
        let table = default_table();
        assert_eq!(table.lookup("Kf"), "\u{05DA}");
        assert_eq!(table.lookup("Mf"), "\u{05DD}");
        assert_eq!(table.lookup("Nf"), "\u{05DF}");
        assert_eq!(table.lookup("Pf"), "\u{05E3}");
        assert_eq!(table.lookup("Tzf"), "\u{05E5}");
    }

    #[test]
    fn ligatures_and_shin_dots() {
        let table = default_table();
        assert_eq!(table.lookup("Ii"), "\u{05F2}");
        assert_eq!(table.lookup("Vv"), "\u{05F0}");
        assert_eq!(table.lookup("Vi"), "\u{05F1}");
        assert_eq!(table.lookup("Shl"), "\u{05E9}\u{05C2}");
        assert_eq!(table.lookup("Shr"), "\u{05E9}\u{05C1}");
    }

    #[test]
    fn identity_fallback() {
        let table = default_table();
        assert_eq!(table.get("X"), None);
        assert_eq!(table.lookup("X"), "X");
        assert_eq!(table.lookup("Thf"), "Thf");
        assert_eq!(table.lookup(""), "");
        assert_eq!(table.lookup(" "), " ");
    }

    #[test]
    fn escaped_semicolon() {
        let table = default_table();
        assert_eq!(table.lookup(";;"), ";");
        assert_eq!(table.lookup(";"), "\u{05B0}");
    }

    #[test]
    fn global_uses_default_table() {
        let table = HebrewTable::global();
        assert_eq!(table.len(), 50);
        assert_eq!(table.lookup("B"), "\u{05D1}");
    }

    #[test]
    fn init_custom_rejects_invalid() {
        let err = HebrewTable::init_custom("[letters]\nA = \"\"\n".to_string()).unwrap_err();
        assert!(matches!(err, TableConfigError::EmptyValue(_)));
    }

    #[test]
    fn codepoints_stay_in_hebrew_block() {
        let table = default_table();
        for value in table.map.values() {
            for c in value.chars() {
                let cp = c as u32;
                assert!(
                    c == ';' || (0x05B0..=0x05F2).contains(&cp),
                    "unexpected codepoint U+{cp:04X}"
                );
            }
        }
    }
}
