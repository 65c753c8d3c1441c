use super::*;

fn strict(text: &str) -> Result<String, MalformedInput> {
    decode(text, true)
}

#[test]
fn no_brackets_passes_through() {
    assert_eq!(decode_lax("Hello"), "Hello");
    assert_eq!(strict("Hello").unwrap(), "Hello");
    assert_eq!(strict("").unwrap(), "");
}

#[test]
fn decodes_tokens() {
    assert_eq!(strict("F[u:]r Elis[e!]").unwrap(), "Für Elisè");
    assert_eq!(strict("[[]x[]]").unwrap(), "[x]");
    assert_eq!(strict("[#20AC][#1D11E][#20B9]").unwrap(), "\u{20ac}\u{1d11e}\u{20b9}");
    assert_eq!(strict("[#20AC{EU}][#20B9]").unwrap(), "\u{20ac}\u{20b9}");
    assert_eq!(strict("[|'][E=|!]").unwrap(), "\u{301}\u{400}");
}

#[test]
fn lax_accepts_the_same_happy_path() {
    for encoded in ["F[u:]r Elis[e!]", "[[]x[]]", "[#20AC{EUR}]", "[|'][E=|!]"] {
        assert_eq!(decode_lax(encoded), strict(encoded).unwrap());
    }
}

#[test]
fn strict_failures() {
    for invalid in [
        "]][[Hello][#q][",
        "[#20aC]",
        "Lo]vely",
        "[O:]rks]l",
        "Hi[",
    ] {
        assert!(strict(invalid).is_err(), "{invalid:?} should be rejected");
    }
}

#[test]
fn strict_failure_details() {
    let err = strict("Lo]vely").unwrap_err();
    assert_eq!(err.kind, MalformedKind::StrayCloseBracket);
    assert_eq!(err.offset, 2);
    assert_eq!(err.input, "Lo]vely");

    let err = strict("[#20aC]").unwrap_err();
    assert_eq!(err.kind, MalformedKind::NonCanonicalHex);
    assert_eq!(err.offset, 0);

    let err = strict("[O:]rks]l").unwrap_err();
    assert_eq!(err.kind, MalformedKind::StrayCloseBracket);
    assert_eq!(err.offset, 7);

    let err = strict("Hi[").unwrap_err();
    assert_eq!(err.kind, MalformedKind::UnterminatedEscape);
    assert_eq!(err.offset, 2);

    let err = strict("]][[Hello][#q][").unwrap_err();
    assert_eq!(err.kind, MalformedKind::StrayCloseBracket);
    assert_eq!(err.offset, 0);

    let err = strict("ab[Hello]").unwrap_err();
    assert_eq!(err.kind, MalformedKind::UnknownMnemonic);
    assert_eq!(err.offset, 2);
}

#[test]
fn strict_rejects_zero_padding() {
    let err = strict("[#020AC]").unwrap_err();
    assert_eq!(err.kind, MalformedKind::NonCanonicalHex);
}

#[test]
fn strict_rejects_invalid_codepoints() {
    let err = strict("[#D800]").unwrap_err();
    assert_eq!(err.kind, MalformedKind::InvalidCodepoint);
}

#[test]
fn lax_truncated_escapes_pass_through() {
    let full = "[#123{4}";
    for i in 0..8 {
        let prefix = &full[..i];
        assert_eq!(decode_lax(prefix), prefix, "prefix {prefix:?}");
        assert_eq!(decode(prefix, false).unwrap(), prefix);
    }
    assert_eq!(decode_lax(full), full);
}

#[test]
fn lax_garbage_passes_through() {
    assert_eq!(decode_lax("]][[Hello][#q]["), "]][[Hello][#q][");
    assert_eq!(decode_lax("Lo]vely"), "Lo]vely");
    assert_eq!(decode_lax("[#D800]"), "[#D800]");
}

#[test]
fn lax_decodes_non_canonical_hex() {
    assert_eq!(decode_lax("[#20ac][["), "\u{20ac}[[");
    assert_eq!(decode_lax("[#0041]"), "A");
}

#[test]
fn lax_rescans_inside_unknown_token() {
    // The first `[` fails, the second still starts a valid token.
    assert_eq!(decode_lax("[x[a!]"), "[xà");
    assert_eq!(decode_lax("[[a!]"), "[à");
}

#[test]
fn lax_tail_after_token() {
    assert_eq!(decode_lax("[O:]rks]l"), "Örks]l");
}

#[test]
fn tag_may_contain_brackets() {
    assert_eq!(strict("[#20AC{[E]}]").unwrap(), "€");
}

#[test]
fn mode_selects_policy() {
    let table = MnemonicTable::global();
    let lax = Decoder::new(table, DecodeMode::Lax);
    let strict = Decoder::new(table, DecodeMode::Strict);
    assert_eq!(lax.decode("Hi[").unwrap(), "Hi[");
    assert!(strict.decode("Hi[").is_err());
    assert_eq!(strict.decode_lax("Hi["), "Hi[");
    assert_eq!(DecodeMode::from_strict(true), DecodeMode::Strict);
    assert_eq!(DecodeMode::default(), DecodeMode::Lax);
}

#[test]
fn custom_table() {
    let table = MnemonicTable::from_entries([(0xE0, "grave-a")], Default::default()).unwrap();
    let decoder = Decoder::new(&table, DecodeMode::Strict);
    assert_eq!(decoder.decode("[grave-a]").unwrap(), "à");
    assert!(decoder.decode("[a!]").is_err());
}

#[test]
fn empty_mnemonic_is_never_reached() {
    let table = MnemonicTable::from_entries([(0xE0, "")], Default::default()).unwrap();
    let decoder = Decoder::new(&table, DecodeMode::Lax);
    assert_eq!(decoder.decode_lax("[]"), "[]");
}

#[test]
fn error_display_names_the_problem() {
    let msg = strict("Lo]vely").unwrap_err().to_string();
    assert!(msg.contains("byte 2"), "{msg}");
    assert!(msg.contains("unescaped"), "{msg}");
}
