//! Codec defaults: whether the encoder annotates hex escapes, which decode mode
//! `Mnemonifier` starts in, and where the mnemonic table comes from.
//!
//! The embedded `default_settings.toml` applies unless a host installs its own
//! TOML with [`init_custom`] before anything reads [`settings`]. Both go
//! through [`parse_settings_toml`].

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::decode::DecodeMode;
use crate::table::DuplicatePolicy;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Replace the embedded defaults. Fails with `AlreadyInitialized` once
/// `settings()` has been read or another custom TOML is installed.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    let parsed = parse_settings_toml(&toml_content)?;
    SETTINGS
        .set(parsed)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Process-wide settings, parsed from the embedded defaults on first use
/// unless `init_custom` ran first.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    })
}

/// The embedded defaults, as printed by `mnemotool settings export`.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub encoder: EncoderSettings,
    pub decoder: DecoderSettings,
    pub table: TableSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncoderSettings {
    pub annotate: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecoderSettings {
    pub strict: bool,
}

impl DecoderSettings {
    pub fn mode(&self) -> DecodeMode {
        DecodeMode::from_strict(self.strict)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableSettings {
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if let Some(path) = &s.table.path {
        if path.as_os_str().is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "table.path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
    }
    Ok(())
}
