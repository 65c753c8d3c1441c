use std::fs;
use std::path::Path;

use serde::Serialize;

use mnemonify::table::{
    load_mnemonic_file, parse_mnemonic_toml, to_mnemonic_toml, write_mnemonic_data,
};
use mnemonify::{DecodeMode, Decoder, DuplicatePolicy, Encoder, MnemonicTable};

use super::die;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub codepoint: String,
    pub character: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
    pub encoded: String,
}

/// Resolve a query: a single character, a bare mnemonic, or a bracketed token
/// such as `[a!]` or `[#20AC]`.
pub fn lookup(table: &MnemonicTable, query: &str) -> Option<LookupResult> {
    let mut chars = query.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ if query.starts_with('[') => {
            let decoded = Decoder::new(table, DecodeMode::Strict).decode(query).ok()?;
            let mut decoded_chars = decoded.chars();
            match (decoded_chars.next(), decoded_chars.next()) {
                (Some(c), None) => c,
                _ => return None,
            }
        }
        _ => table.lookup(query)?,
    };
    Some(LookupResult {
        codepoint: format!("U+{:04X}", c as u32),
        character: c.to_string(),
        mnemonic: table.mnemonic(c).map(str::to_string),
        encoded: Encoder::new(table).encode(&c.to_string()),
    })
}

pub fn lookup_cmd(table: &MnemonicTable, query: &str, json: bool) {
    let Some(result) = lookup(table, query) else {
        eprintln!("No match for {query:?}");
        std::process::exit(1);
    };
    if json {
        let out = die!(serde_json::to_string_pretty(&result), "Error: {}");
        println!("{out}");
    } else {
        println!(
            "{}  {}  {}",
            result.codepoint,
            result.character.escape_debug(),
            result.encoded
        );
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct TableInfo {
    pub entries: usize,
    pub first: Option<u32>,
    pub last: Option<u32>,
    pub shadowed: usize,
}

pub fn info(table: &MnemonicTable) -> TableInfo {
    let entries = table.entries();
    TableInfo {
        entries: entries.len(),
        first: entries.first().map(|&(cp, _)| cp),
        last: entries.last().map(|&(cp, _)| cp),
        shadowed: table.shadowed(),
    }
}

pub fn info_cmd(table: &MnemonicTable) {
    let info = info(table);
    println!("entries:  {}", info.entries);
    if let (Some(first), Some(last)) = (info.first, info.last) {
        println!("range:    U+{first:04X}..U+{last:04X}");
    }
    println!("shadowed: {}", info.shadowed);
}

pub fn export_cmd(table: &MnemonicTable, toml: bool) {
    let out = if toml {
        die!(to_mnemonic_toml(table), "Error: {}")
    } else {
        die!(write_mnemonic_data(table.entries()), "Error: {}")
    };
    print!("{out}");
}

/// Convert a TOML mnemonic source into the compact format.
pub fn compile(input: &Path, output: &Path) -> Result<usize, mnemonify::MnemonifyError> {
    let content = fs::read_to_string(input).map_err(|source| mnemonify::MnemonifyError::Io {
        path: input.display().to_string(),
        source,
    })?;
    let map = parse_mnemonic_toml(&content)?;
    // Reject duplicates before anything is written.
    MnemonicTable::from_entries(
        map.iter().map(|(&cp, m)| (cp, m.as_str())),
        DuplicatePolicy::Reject,
    )?;
    let data = write_mnemonic_data(map.iter().map(|(&cp, m)| (cp, m.as_str())))?;
    fs::write(output, data).map_err(|source| mnemonify::MnemonifyError::Io {
        path: output.display().to_string(),
        source,
    })?;
    Ok(map.len())
}

pub fn compile_cmd(input: &str, output: &str) {
    let count = die!(compile(Path::new(input), Path::new(output)), "Error: {}");
    println!("Wrote {count} mnemonics to {output}");
}

pub fn validate_cmd(file: &str) {
    let table = die!(
        load_mnemonic_file(Path::new(file), DuplicatePolicy::Reject),
        "Error: {}"
    );
    let unusable = table
        .entries()
        .into_iter()
        .filter(|(_, m)| mnemonify::table::validate_mnemonic(m).is_err())
        .count();
    if unusable > 0 {
        eprintln!("Error: {unusable} mnemonics cannot round-trip");
        std::process::exit(1);
    }
    println!("OK: {} mnemonics", table.len());
}
