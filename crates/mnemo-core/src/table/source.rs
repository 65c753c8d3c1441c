//! Editable TOML form of the mnemonic table.
//!
//! ```toml
//! [mnemonics]
//! "00E0" = "a!"
//! "01F8" = "N|!"
//! ```
//!
//! The compact grammar stays the runtime format; this is what `mnemotool
//! table compile` reads and `table export --toml` writes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::loader::is_mnemonic_char;
use super::{MnemonicTable, TableError};

#[derive(Deserialize, Serialize)]
struct MnemonicSource {
    mnemonics: BTreeMap<String, String>,
}

/// Check that a mnemonic can be emitted by the encoder and looked up again
/// by the decoder.
pub fn validate_mnemonic(mnemonic: &str) -> Result<(), &'static str> {
    if mnemonic.is_empty() {
        return Err("empty");
    }
    if !mnemonic.chars().all(is_mnemonic_char) {
        return Err("contains characters outside printable ASCII");
    }
    if mnemonic.contains(['[', ']']) {
        return Err("contains a square bracket");
    }
    // `[#` always starts a hex escape
    if mnemonic.starts_with('#') {
        return Err("starts with `#`");
    }
    Ok(())
}

/// Parse TOML text into a sorted `BTreeMap<codepoint, mnemonic>`.
pub fn parse_mnemonic_toml(toml_str: &str) -> Result<BTreeMap<u32, String>, TableError> {
    let source: MnemonicSource =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if source.mnemonics.is_empty() {
        return Err(TableError::Empty);
    }

    let mut map = BTreeMap::new();
    for (key, mnemonic) in source.mnemonics {
        let hex = key.strip_prefix("U+").unwrap_or(&key);
        let codepoint = u32::from_str_radix(hex, 16)
            .ok()
            .filter(|&cp| char::from_u32(cp).is_some())
            .ok_or_else(|| TableError::InvalidCodepoint(key.clone()))?;
        validate_mnemonic(&mnemonic).map_err(|reason| TableError::InvalidMnemonic {
            codepoint,
            mnemonic: mnemonic.clone(),
            reason,
        })?;
        map.insert(codepoint, mnemonic);
    }
    Ok(map)
}

/// Render a table as TOML, keyed by four-digit (or wider) uppercase hex.
pub fn to_mnemonic_toml(table: &MnemonicTable) -> Result<String, TableError> {
    let source = MnemonicSource {
        mnemonics: table
            .entries()
            .into_iter()
            .map(|(cp, m)| (format!("{cp:04X}"), m.to_string()))
            .collect(),
    };
    toml::to_string(&source).map_err(|e| TableError::Serialize(e.to_string()))
}
