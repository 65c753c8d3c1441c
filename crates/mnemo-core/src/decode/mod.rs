//! Decoding of mnemonified text.
//!
//! Strict and lax decoding share one scanner and one token parser. They differ
//! only in what happens when something does not parse: `Strict` reports
//! [`MalformedInput`], `Lax` copies the offending `[` and rescans from the next
//! byte, so it cannot fail.

#[cfg(test)]
mod tests;
mod token;

use std::convert::Infallible;

use tracing::{debug, debug_span};

use crate::table::MnemonicTable;
use token::{parse_token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MalformedKind {
    #[error("unescaped `]`")]
    StrayCloseBracket,
    #[error("escape is not terminated")]
    UnterminatedEscape,
    #[error("malformed hex escape")]
    MalformedHexEscape,
    #[error("hex escape is not a Unicode scalar value")]
    InvalidCodepoint,
    #[error("hex escape is not canonical uppercase without leading zeros")]
    NonCanonicalHex,
    #[error("malformed bracket escape")]
    MalformedBracketEscape,
    #[error("unknown mnemonic")]
    UnknownMnemonic,
}

/// Strict-mode rejection of an encoded string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed input at byte {offset}: {kind}: {input:?}")]
pub struct MalformedInput {
    pub input: String,
    pub offset: usize,
    pub kind: MalformedKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    Strict,
    #[default]
    Lax,
}

impl DecodeMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lax
        }
    }
}

/// Decides what a rejection does to the scan.
trait DecodePolicy {
    type Error;

    fn reject(&self, input: &str, offset: usize, kind: MalformedKind) -> Result<(), Self::Error>;
}

struct Strict;

impl DecodePolicy for Strict {
    type Error = MalformedInput;

    fn reject(&self, input: &str, offset: usize, kind: MalformedKind) -> Result<(), MalformedInput> {
        debug!(offset, %kind, "strict decode rejected input");
        Err(MalformedInput {
            input: input.to_string(),
            offset,
            kind,
        })
    }
}

struct Lax;

impl DecodePolicy for Lax {
    type Error = Infallible;

    fn reject(&self, _input: &str, _offset: usize, _kind: MalformedKind) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Decode with the global table. Lax mode never returns an error.
pub fn decode(text: &str, strict: bool) -> Result<String, MalformedInput> {
    Decoder::new(MnemonicTable::global(), DecodeMode::from_strict(strict)).decode(text)
}

/// Lax decode with the global table.
pub fn decode_lax(text: &str) -> String {
    Decoder::new(MnemonicTable::global(), DecodeMode::Lax).decode_lax(text)
}

pub struct Decoder<'a> {
    table: &'a MnemonicTable,
    mode: DecodeMode,
}

impl<'a> Decoder<'a> {
    pub fn new(table: &'a MnemonicTable, mode: DecodeMode) -> Self {
        Self { table, mode }
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    pub fn decode(&self, text: &str) -> Result<String, MalformedInput> {
        match self.mode {
            DecodeMode::Strict => self.scan(text, &Strict),
            DecodeMode::Lax => Ok(self.decode_lax(text)),
        }
    }

    /// Lax decode regardless of the configured mode.
    pub fn decode_lax(&self, text: &str) -> String {
        match self.scan(text, &Lax) {
            Ok(decoded) => decoded,
            Err(never) => match never {},
        }
    }

    fn scan<P: DecodePolicy>(&self, text: &str, policy: &P) -> Result<String, P::Error> {
        if !text.contains('[') {
            if let Some(offset) = text.find(']') {
                policy.reject(text, offset, MalformedKind::StrayCloseBracket)?;
            }
            return Ok(text.to_string());
        }
        let _span = debug_span!("decode", len = text.len()).entered();

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        while let Some(found) = text[cursor..].find('[') {
            let open = cursor + found;
            let literal = &text[cursor..open];
            if let Some(offset) = literal.find(']') {
                policy.reject(text, cursor + offset, MalformedKind::StrayCloseBracket)?;
            }
            out.push_str(literal);

            match parse_token(text, open, self.table) {
                Ok(token) => {
                    if token.kind == (TokenKind::Hex { canonical: false }) {
                        policy.reject(text, open, MalformedKind::NonCanonicalHex)?;
                    }
                    out.push(token.ch);
                    cursor = open + token.len;
                }
                Err(kind) => {
                    policy.reject(text, open, kind)?;
                    out.push('[');
                    cursor = open + 1;
                }
            }
        }

        let tail = &text[cursor..];
        if let Some(offset) = tail.find(']') {
            policy.reject(text, cursor + offset, MalformedKind::StrayCloseBracket)?;
        }
        out.push_str(tail);
        Ok(out)
    }
}
