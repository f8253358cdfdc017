use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use super::grammar::{is_consonant_token, is_niqqud_token};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TableConfig {
    #[serde(default)]
    letters: BTreeMap<String, String>,
    #[serde(default)]
    finals: BTreeMap<String, String>,
    #[serde(default)]
    ligatures: BTreeMap<String, String>,
    #[serde(default)]
    shin_dots: BTreeMap<String, String>,
    #[serde(default)]
    niqqud: BTreeMap<String, String>,
}

impl TableConfig {
    /// `(section, entries, holds consonant spellings)` in lookup-priority order.
    fn into_sections(self) -> [(&'static str, BTreeMap<String, String>, bool); 5] {
        [
            ("letters", self.letters, true),
            ("finals", self.finals, true),
            ("ligatures", self.ligatures, true),
            ("shin_dots", self.shin_dots, true),
            ("niqqud", self.niqqud, false),
        ]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("table has no mappings")]
    Empty,
    #[error("non-ASCII key: {0}")]
    NonAsciiKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("key defined more than once: {0}")]
    DuplicateKey(String),
    #[error("hebrew table already initialized")]
    AlreadyInitialized,
}

/// A table key the tokenizer never captures as one group.
///
/// Such keys are kept (lookups by exact key still find them) but conversion
/// never reaches them. The default table's `Shr` is one: `r` is not a
/// modifier, so `Shr` tokenizes as `Sh` followed by a literal `r`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreachableKey {
    pub section: &'static str,
    pub key: String,
}

struct ParsedTable {
    map: BTreeMap<String, String>,
    unreachable: Vec<UnreachableKey>,
}

fn parse_sections(toml_str: &str) -> Result<ParsedTable, TableConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    let mut map = BTreeMap::new();
    let mut unreachable = Vec::new();
    for (section, entries, consonant) in config.into_sections() {
        for (key, value) in entries {
            if !key.is_ascii() {
                return Err(TableConfigError::NonAsciiKey(key));
            }
            if value.is_empty() {
                return Err(TableConfigError::EmptyValue(key));
            }
            if map.contains_key(&key) {
                return Err(TableConfigError::DuplicateKey(key));
            }
            let reachable = if consonant {
                is_consonant_token(&key)
            } else {
                is_niqqud_token(&key)
            };
            if !reachable {
                unreachable.push(UnreachableKey {
                    section,
                    key: key.clone(),
                });
            }
            map.insert(key, value);
        }
    }

    if map.is_empty() {
        return Err(TableConfigError::Empty);
    }
    Ok(ParsedTable { map, unreachable })
}

/// Parse table TOML into one sorted `BTreeMap<romanized, hebrew>`.
///
/// Keys that conversion can never capture as a single token are accepted
/// with a warning; see [`find_unreachable_keys`].
pub fn parse_table_toml(toml_str: &str) -> Result<BTreeMap<String, String>, TableConfigError> {
    let parsed = parse_sections(toml_str)?;
    for UnreachableKey { section, key } in &parsed.unreachable {
        warn!(section, key = key.as_str(), "table key is never matched by the tokenizer");
    }
    Ok(parsed.map)
}

/// Validate table TOML and list the keys conversion cannot reach.
///
/// Consonant sections (`letters`, `finals`, `ligatures`, `shin_dots`) are
/// reachable only through single consonant tokens, `niqqud` only through
/// single niqqud tokens.
pub fn find_unreachable_keys(toml_str: &str) -> Result<Vec<UnreachableKey>, TableConfigError> {
    parse_sections(toml_str).map(|parsed| parsed.unreachable)
}
