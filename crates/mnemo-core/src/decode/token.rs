//! Single-token parser shared by strict and lax decoding.

use crate::table::MnemonicTable;

use super::MalformedKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Hex { canonical: bool },
    Bracket,
    Mnemonic,
}

/// One successfully parsed bracketed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub ch: char,
    /// Bytes consumed, starting at the opening `[`.
    pub len: usize,
}

/// Parse the token whose opening `[` is at `open`.
///
/// The character after `[` selects the grammar: `#` is a hex escape, `[` or
/// `]` an escaped bracket, anything else a mnemonic.
pub(crate) fn parse_token(
    text: &str,
    open: usize,
    table: &MnemonicTable,
) -> Result<Token, MalformedKind> {
    let bytes = text.as_bytes();
    debug_assert_eq!(bytes.get(open), Some(&b'['));
    match bytes.get(open + 1) {
        Some(b'#') if open + 2 < bytes.len() => parse_hex(text, open),
        Some(&b) if b == b'[' || b == b']' => parse_bracket(bytes, open),
        _ => parse_mnemonic(text, open, table),
    }
}

fn parse_hex(text: &str, open: usize) -> Result<Token, MalformedKind> {
    let bytes = text.as_bytes();
    let digits_start = open + 2;
    let digits_end = digits_start
        + bytes[digits_start..]
            .iter()
            .take_while(|b| b.is_ascii_hexdigit())
            .count();
    if digits_end == digits_start {
        return Err(MalformedKind::MalformedHexEscape);
    }

    let end = match bytes.get(digits_end) {
        Some(b']') => digits_end + 1,
        Some(b'{') => {
            let close = text[digits_end + 1..]
                .find('}')
                .map(|i| digits_end + 1 + i)
                .ok_or(MalformedKind::UnterminatedEscape)?;
            if bytes.get(close + 1) != Some(&b']') {
                return Err(MalformedKind::MalformedHexEscape);
            }
            close + 2
        }
        Some(_) => return Err(MalformedKind::MalformedHexEscape),
        None => return Err(MalformedKind::UnterminatedEscape),
    };

    let digits = &text[digits_start..digits_end];
    let codepoint =
        u32::from_str_radix(digits, 16).map_err(|_| MalformedKind::InvalidCodepoint)?;
    let ch = char::from_u32(codepoint).ok_or(MalformedKind::InvalidCodepoint)?;
    let canonical = digits == format!("{codepoint:X}");
    Ok(Token {
        kind: TokenKind::Hex { canonical },
        ch,
        len: end - open,
    })
}

fn parse_bracket(bytes: &[u8], open: usize) -> Result<Token, MalformedKind> {
    match bytes.get(open + 2) {
        Some(b']') => Ok(Token {
            kind: TokenKind::Bracket,
            ch: char::from(bytes[open + 1]),
            len: 3,
        }),
        Some(_) => Err(MalformedKind::MalformedBracketEscape),
        None => Err(MalformedKind::UnterminatedEscape),
    }
}

fn parse_mnemonic(text: &str, open: usize, table: &MnemonicTable) -> Result<Token, MalformedKind> {
    let close = text[open + 1..]
        .find(']')
        .map(|i| open + 1 + i)
        .ok_or(MalformedKind::UnterminatedEscape)?;
    let ch = table
        .lookup(&text[open + 1..close])
        .ok_or(MalformedKind::UnknownMnemonic)?;
    Ok(Token {
        kind: TokenKind::Mnemonic,
        ch,
        len: close + 1 - open,
    })
}
