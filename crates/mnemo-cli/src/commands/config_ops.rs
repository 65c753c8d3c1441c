use std::fs;

use super::die;

pub fn settings_export() {
    print!("{}", mnemonify::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        mnemonify::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: encoder.annotate={}, decoder.strict={}, table.duplicates={:?}, table.path={}",
        s.encoder.annotate,
        s.decoder.strict,
        s.table.duplicates,
        s.table
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(embedded)".to_string()),
    );
}
