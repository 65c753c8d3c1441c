//! Reversible Unicode → ASCII encoding with RFC1345-style mnemonics.
//!
//! `à` becomes `[a!]`, `Ǹ` becomes `[N|!]` (decomposition of the mnemonics of
//! its parts), and anything without a mnemonic becomes a hex escape such as
//! `[#20AC]`. Literal square brackets are written as `[[]` and `[]]` so that
//! every encoded string decodes back to exactly the original.

pub mod decode;
pub mod encode;
pub mod settings;
pub mod table;
#[cfg(test)]
mod tests;
pub mod translit;

pub use decode::{decode, decode_lax, DecodeMode, Decoder, MalformedInput, MalformedKind};
pub use encode::{encode, Encoder};
pub use table::{DuplicatePolicy, MnemonicTable, TableError};
pub use translit::{NoTransliteration, Transliterator};
