use std::borrow::Cow;

use mnemo_core::settings::Settings;
use mnemo_core::table::load_mnemonic_file;
use mnemo_core::{
    DecodeMode, Decoder, Encoder, MalformedInput, MnemonicTable, NoTransliteration,
    Transliterator,
};
use tracing::debug;

use crate::MnemonifyError;

/// A configured encoder/decoder pair.
///
/// Holds the table (the shared global one unless a custom file was loaded),
/// the transliterator used for hex-escape tags, and the decode mode.
pub struct Mnemonifier {
    table: Cow<'static, MnemonicTable>,
    translit: Box<dyn Transliterator>,
    mode: DecodeMode,
}

impl Default for Mnemonifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Mnemonifier {
    /// Global table, no transliteration, lax decoding.
    pub fn new() -> Self {
        Self {
            table: Cow::Borrowed(MnemonicTable::global()),
            translit: Box::new(NoTransliteration),
            mode: DecodeMode::Lax,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, MnemonifyError> {
        let table = match &settings.table.path {
            Some(path) => {
                debug!(path = %path.display(), "loading custom mnemonic table");
                Cow::Owned(load_mnemonic_file(path, settings.table.duplicates)?)
            }
            None => Cow::Borrowed(MnemonicTable::global()),
        };
        let translit: Box<dyn Transliterator> = if settings.encoder.annotate {
            default_transliterator()
        } else {
            Box::new(NoTransliteration)
        };
        Ok(Self {
            table,
            translit,
            mode: settings.decoder.mode(),
        })
    }

    pub fn with_table(mut self, table: MnemonicTable) -> Self {
        self.table = Cow::Owned(table);
        self
    }

    pub fn with_transliterator(mut self, translit: impl Transliterator + 'static) -> Self {
        self.translit = Box::new(translit);
        self
    }

    pub fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn table(&self) -> &MnemonicTable {
        &self.table
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    pub fn encode(&self, text: &str) -> String {
        Encoder::new(&self.table)
            .with_transliterator(self.translit.as_ref())
            .encode(text)
    }

    /// Decode in the configured mode.
    pub fn decode(&self, text: &str) -> Result<String, MalformedInput> {
        Decoder::new(&self.table, self.mode).decode(text)
    }

    pub fn decode_lax(&self, text: &str) -> String {
        Decoder::new(&self.table, self.mode).decode_lax(text)
    }
}

/// The best transliterator compiled in: `deunicode` when the feature is on.
pub fn default_transliterator() -> Box<dyn Transliterator> {
    #[cfg(feature = "deunicode")]
    {
        Box::new(mnemo_core::translit::Deunicode)
    }
    #[cfg(not(feature = "deunicode"))]
    {
        Box::new(NoTransliteration)
    }
}
