//! UniFFI export layer: Swift/Kotlin bindings for the transliteration engine.

mod types;

pub use types::{HebOutputFormat, HebSegment, RomhebError};

use std::path::Path;

use romheb_core::romanized::{default_toml, infer_finals, tokenize, HebrewTable};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
pub fn hebrew_convert(input: String, format: HebOutputFormat) -> String {
    romheb_core::convert(&input, format.into())
}

/// Table value for `token`, or `token` unchanged when it has no mapping.
#[uniffi::export]
pub fn hebrew_lookup(token: String) -> String {
    HebrewTable::global().lookup(&token).to_string()
}

/// Segments of `input` after finality inference, each with its rendering.
#[uniffi::export]
pub fn hebrew_tokenize(input: String) -> Vec<HebSegment> {
    let table = HebrewTable::global();
    let finals = infer_finals(&input);
    tokenize(&finals)
        .iter()
        .map(|segment| types::to_heb_segment(segment, table))
        .collect()
}

#[uniffi::export]
pub fn table_load_config(path: String) -> Result<(), RomhebError> {
    let content = std::fs::read_to_string(&path).map_err(|e| RomhebError::Io {
        msg: format!("{path}: {e}"),
    })?;
    HebrewTable::init_custom(content)
        .map_err(|e| RomhebError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
pub fn table_default_config() -> String {
    default_toml().to_string()
}

#[uniffi::export]
pub fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_both_formats() {
        assert_eq!(
            hebrew_convert("AN BNM".into(), HebOutputFormat::Unicode),
            "\u{05D0}\u{05DF} \u{05D1}\u{05E0}\u{05DD}"
        );
        assert_eq!(
            hebrew_convert("A and B".into(), HebOutputFormat::Html),
            "&#x5d0; and &#x5d1;"
        );
    }

    #[test]
    fn lookup_falls_back_to_identity() {
        assert_eq!(hebrew_lookup("Shl".into()), "\u{05E9}\u{05C2}");
        assert_eq!(hebrew_lookup("?".into()), "?");
    }

    #[test]
    fn tokenize_reports_units_and_literals() {
        let segments = hebrew_tokenize("B3 M".into());
        assert_eq!(
            segments,
            vec![
                HebSegment::Unit {
                    consonant: "B".into(),
                    niqqud: vec!["3".into()],
                    hebrew: "\u{05D1}\u{05B6}".into(),
                },
                HebSegment::Literal { text: " ".into() },
                HebSegment::Unit {
                    consonant: "Mf".into(),
                    niqqud: vec![],
                    hebrew: "\u{05DD}".into(),
                },
            ]
        );
    }

    #[test]
    fn load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = table_load_config(path.to_string_lossy().into_owned()).unwrap_err();
        assert!(matches!(err, RomhebError::Io { .. }));
    }

    #[test]
    fn load_config_rejects_invalid_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[letters]\nA = \"\"\n").unwrap();
        let err = table_load_config(path.to_string_lossy().into_owned()).unwrap_err();
        assert!(matches!(err, RomhebError::InvalidData { .. }));
    }

    #[test]
    fn default_config_parses() {
        let table = HebrewTable::from_toml(&table_default_config()).unwrap();
        assert_eq!(table.len(), 50);
    }
}
