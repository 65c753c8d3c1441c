//! Bidirectional codepoint ↔ mnemonic table.
//!
//! The table is parsed from a compact resource (see [`parse_mnemonic_data`])
//! and then only read. `MnemonicTable::global()` holds the process-wide
//! instance, following the same `OnceLock` pattern as settings:
//!
//! - `init_custom(data)` installs a replacement resource before first use
//! - `global()` returns `&'static MnemonicTable` (lazy-init singleton)
//! - the default resource is embedded via `include_str!("default_mnemonics.dat")`

mod loader;
mod source;
mod writer;

pub use loader::{load_mnemonic_file, parse_mnemonic_data};
pub use source::{parse_mnemonic_toml, to_mnemonic_toml, validate_mnemonic};
pub use writer::write_mnemonic_data;

use std::collections::HashMap;
use std::io;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_MNEMONICS: &str = include_str!("default_mnemonics.dat");

static INSTANCE: OnceLock<MnemonicTable> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("mnemonic {mnemonic:?} maps to both U+{first:04X} and U+{second:04X}")]
    DuplicateMnemonic {
        mnemonic: String,
        first: u32,
        second: u32,
    },

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("TOML serialization error: {0}")]
    Serialize(String),

    #[error("[mnemonics] table is empty")]
    Empty,

    #[error("invalid codepoint key: {0}")]
    InvalidCodepoint(String),

    #[error("invalid mnemonic {mnemonic:?} for U+{codepoint:04X}: {reason}")]
    InvalidMnemonic {
        codepoint: u32,
        mnemonic: String,
        reason: &'static str,
    },

    #[error("U+{0:04X} cannot be addressed by the compact table format")]
    Unrepresentable(u32),

    #[error("mnemonic table already initialized")]
    AlreadyInitialized,
}

/// What to do when a mnemonic is assigned to a second codepoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The later record takes over the reverse entry.
    #[default]
    LastWins,
    /// Fail with [`TableError::DuplicateMnemonic`].
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct MnemonicTable {
    forward: HashMap<u32, Box<str>>,
    reverse: HashMap<Box<str>, u32>,
    /// Reverse entries that were overwritten under `LastWins`.
    shadowed: usize,
}

impl MnemonicTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(codepoint, mnemonic)` pairs in iteration order.
    pub fn from_entries<I, S>(entries: I, policy: DuplicatePolicy) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (codepoint, mnemonic) in entries {
            table.insert(codepoint, mnemonic.into(), policy)?;
        }
        Ok(table)
    }

    /// Install a custom resource before the first `global()` call.
    pub fn init_custom(data: &str, policy: DuplicatePolicy) -> Result<(), TableError> {
        // Parse eagerly so a broken resource is reported to the caller.
        let table = parse_mnemonic_data(data, policy)?;
        INSTANCE
            .set(table)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static MnemonicTable {
        INSTANCE.get_or_init(|| {
            parse_mnemonic_data(DEFAULT_MNEMONICS, DuplicatePolicy::LastWins)
                .expect("embedded mnemonic table must parse")
        })
    }

    pub(crate) fn insert(
        &mut self,
        codepoint: u32,
        mnemonic: String,
        policy: DuplicatePolicy,
    ) -> Result<(), TableError> {
        let mnemonic = mnemonic.into_boxed_str();
        if let Some(&first) = self.reverse.get(&mnemonic) {
            if first != codepoint {
                match policy {
                    DuplicatePolicy::Reject => {
                        return Err(TableError::DuplicateMnemonic {
                            mnemonic: mnemonic.into(),
                            first,
                            second: codepoint,
                        });
                    }
                    DuplicatePolicy::LastWins => {
                        warn!(
                            mnemonic = &*mnemonic,
                            first, second = codepoint, "duplicate mnemonic, later entry wins"
                        );
                        self.shadowed += 1;
                    }
                }
            }
        }
        self.forward.insert(codepoint, mnemonic.clone());
        self.reverse.insert(mnemonic, codepoint);
        Ok(())
    }

    /// Mnemonic for a character, if the table defines one.
    pub fn mnemonic(&self, c: char) -> Option<&str> {
        self.mnemonic_for(c as u32)
    }

    pub fn mnemonic_for(&self, codepoint: u32) -> Option<&str> {
        self.forward.get(&codepoint).map(|m| &**m)
    }

    /// Character for a mnemonic. Entries whose codepoint is not a Unicode
    /// scalar value are treated as absent.
    pub fn lookup(&self, mnemonic: &str) -> Option<char> {
        self.reverse
            .get(mnemonic)
            .and_then(|&cp| char::from_u32(cp))
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn shadowed(&self) -> usize {
        self.shadowed
    }

    /// Forward entries sorted by codepoint.
    pub fn entries(&self) -> Vec<(u32, &str)> {
        let mut entries: Vec<(u32, &str)> =
            self.forward.iter().map(|(&cp, m)| (cp, &**m)).collect();
        entries.sort_unstable_by_key(|&(cp, _)| cp);
        entries
    }
}
