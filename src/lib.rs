//! Reversible, human-readable ASCII encoding of Unicode text.
//!
//! ```
//! assert_eq!(mnemonify::encode("Für [x]"), "F[u:]r [[]x[]]");
//! assert_eq!(mnemonify::decode("F[u:]r [[]x[]]", true).unwrap(), "Für [x]");
//! ```
//!
//! The free functions use the process-wide table. [`Mnemonifier`] bundles a
//! table, a transliterator and a decode mode, usually built from settings.

mod engine;
#[cfg(test)]
mod tests;
pub mod trace_init;

use std::path::Path;

pub use engine::{default_transliterator, Mnemonifier};
pub use mnemo_core::settings::{self, Settings, SettingsError};
pub use mnemo_core::table::{self, DuplicatePolicy, MnemonicTable, TableError};
pub use mnemo_core::translit::{self, NoTransliteration, Transliterator};
pub use mnemo_core::{
    decode, decode_lax, encode, DecodeMode, Decoder, Encoder, MalformedInput, MalformedKind,
};

#[derive(Debug, thiserror::Error)]
pub enum MnemonifyError {
    #[error("IO error: {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Package version, reported by `mnemotool --version`.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Read a settings file and install it as the global settings.
pub fn settings_load_config(path: &Path) -> Result<(), MnemonifyError> {
    let content = std::fs::read_to_string(path).map_err(|source| MnemonifyError::Io {
        path: path.display().to_string(),
        source,
    })?;
    settings::init_custom(content)?;
    Ok(())
}
