fn main() {
    // Validate the embedded table at compile time.
    validate_toml(
        "src/romanized/default_table.toml",
        include_str!("src/romanized/default_table.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
