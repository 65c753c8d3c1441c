use std::fmt::Write;

use tracing::{debug, debug_span};

use crate::table::MnemonicTable;
use crate::translit::{usable_tag, NoTransliteration, Transliterator};

/// Encode `text` with the global table and no transliteration.
pub fn encode(text: &str) -> String {
    Encoder::new(MnemonicTable::global()).encode(text)
}

/// Printable ASCII other than the brackets passes through untouched.
fn is_plain(text: &str) -> bool {
    text.bytes()
        .all(|b| (0x20..=0x7E).contains(&b) && b != b'[' && b != b']')
}

pub struct Encoder<'a> {
    table: &'a MnemonicTable,
    translit: &'a dyn Transliterator,
}

impl<'a> Encoder<'a> {
    pub fn new(table: &'a MnemonicTable) -> Self {
        Self {
            table,
            translit: &NoTransliteration,
        }
    }

    /// Attach `{tag}` approximations to hex escapes.
    pub fn with_transliterator(mut self, translit: &'a dyn Transliterator) -> Self {
        self.translit = translit;
        self
    }

    pub fn encode(&self, text: &str) -> String {
        if is_plain(text) {
            return text.to_string();
        }
        let _span = debug_span!("encode", len = text.len()).entered();

        let mut out = String::with_capacity(text.len() * 2);
        let mut hex_escapes = 0usize;
        for c in text.chars() {
            match c {
                '[' => out.push_str("[[]"),
                ']' => out.push_str("[]]"),
                c if c.is_ascii() => out.push(c),
                c => {
                    let mnemonic = if (c as u32) < 0x10000 {
                        self.table.mnemonic(c)
                    } else {
                        None
                    };
                    match mnemonic {
                        Some(m) => {
                            out.push('[');
                            out.push_str(m);
                            out.push(']');
                        }
                        None => {
                            self.push_hex_escape(&mut out, c);
                            hex_escapes += 1;
                        }
                    }
                }
            }
        }

        debug!(out_len = out.len(), hex_escapes);
        out
    }

    fn push_hex_escape(&self, out: &mut String, c: char) {
        // Writing to a String cannot fail.
        let _ = write!(out, "[#{:X}", c as u32);
        if let Some(tag) = self.translit.approximate(c) {
            if usable_tag(c, &tag) {
                out.push('{');
                out.push_str(&tag);
                out.push('}');
            }
        }
        out.push(']');
    }
}
