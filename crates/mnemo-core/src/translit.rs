//! Optional ASCII approximations attached to hex escapes as `{tag}`.
//!
//! A transliterator is advisory only: the decoder never consults it, and a
//! missing or unhelpful approximation just leaves the tag off.

/// Source of best-effort ASCII spellings for single characters.
pub trait Transliterator: Send + Sync {
    /// Approximate `c` in ASCII, or `None` when there is nothing better than
    /// the character itself.
    fn approximate(&self, c: char) -> Option<String>;
}

/// Never approximates anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransliteration;

impl Transliterator for NoTransliteration {
    fn approximate(&self, _c: char) -> Option<String> {
        None
    }
}

impl<F> Transliterator for F
where
    F: Fn(char) -> Option<String> + Send + Sync,
{
    fn approximate(&self, c: char) -> Option<String> {
        self(c)
    }
}

/// Transliteration backed by the `deunicode` tables.
#[cfg(feature = "deunicode")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Deunicode;

#[cfg(feature = "deunicode")]
impl Transliterator for Deunicode {
    fn approximate(&self, c: char) -> Option<String> {
        deunicode::deunicode_char(c).map(|s| s.trim().to_string())
    }
}

/// Whether an approximation may be written as a tag for `c`.
///
/// Rejects echoes of the character, the `?`/`[?]` placeholders, anything that
/// would close the tag early, and anything outside printable ASCII.
pub(crate) fn usable_tag(c: char, approximation: &str) -> bool {
    let mut buf = [0u8; 4];
    approximation != c.encode_utf8(&mut buf)
        && approximation != "?"
        && approximation != "[?]"
        && !approximation.contains(['{', '}'])
        && approximation.bytes().all(|b| (0x20..=0x7E).contains(&b))
}
