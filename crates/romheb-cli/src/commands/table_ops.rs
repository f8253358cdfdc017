use std::fs;

use romheb_core::romanized::{find_unreachable_keys, parse_table_toml, UnreachableKey};

use super::die;

pub fn table_export() {
    print!("{}", romheb_core::romanized::default_toml());
}

/// One warning line per key the tokenizer never captures.
pub fn unreachable_report(unreachable: &[UnreachableKey]) -> Vec<String> {
    unreachable
        .iter()
        .map(|u| format!("warning: [{}] {:?} is never matched during conversion", u.section, u.key))
        .collect()
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(parse_table_toml(&content), "Error: {}");
    let unreachable = die!(find_unreachable_keys(&content), "Error: {}");
    for line in unreachable_report(&unreachable) {
        eprintln!("{line}");
    }
    println!("OK: {} mappings", map.len());
}
