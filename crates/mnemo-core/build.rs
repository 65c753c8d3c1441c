fn main() {
    // Validate embedded resources at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_mnemonics(
        "src/table/default_mnemonics.dat",
        include_str!("src/table/default_mnemonics.dat"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}

fn validate_mnemonics(path: &str, content: &str) {
    // The first record must name its own codepoint; a leading space would
    // silently start the table at U+0001.
    if content.starts_with(' ') || content.is_empty() {
        panic!("{path} must start with a codepoint selector");
    }
}
