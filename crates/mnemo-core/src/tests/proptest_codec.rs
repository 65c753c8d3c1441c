//! Property-based tests for the encode/decode pair.
//!
//! Inputs are weighted toward characters that exercise each token kind:
//! brackets and hex-looking ASCII, table-backed characters, and characters
//! that fall through to hex escapes.

use proptest::prelude::*;

use super::assert_roundtrip;
use crate::{decode, decode_lax, encode};

fn arb_char() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => prop::sample::select(vec!['[', ']', '#', '{', '}', 'A', 'f', '0', ' ']),
        4 => prop::char::range('\u{a0}', '\u{17f}'),
        2 => prop::char::range('\u{300}', '\u{4ff}'),
        2 => prop::char::range('\u{2000}', '\u{2bff}'),
        1 => any::<char>(),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_char(), 0..32).prop_map(|v| v.into_iter().collect())
}

fn arb_encoded_garbage() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['[', ']', '#', '{', '}', 'A', 'c', '2', '0', 'a', '!', ':', 'u']),
        0..24,
    )
    .prop_map(|v| v.into_iter().collect())
}

proptest! {
    #[test]
    fn roundtrip(text in arb_text()) {
        assert_roundtrip(&text);
    }

    #[test]
    fn plain_ascii_is_identity(text in "[ -Z\\\\^-~]{0,40}") {
        prop_assert_eq!(encode(&text), text);
    }

    #[test]
    fn lax_never_fails_and_agrees_with_strict(text in arb_encoded_garbage()) {
        let lax = decode_lax(&text);
        prop_assert_eq!(decode(&text, false).unwrap(), lax.clone());
        if let Ok(strict) = decode(&text, true) {
            prop_assert_eq!(strict, lax);
        }
    }
}
