//! Cross-module tests: encode/decode interplay over the shipped table.

mod proptest_codec;

use crate::{decode, encode};

/// Encode, check the output is ASCII, and decode in both modes.
fn assert_roundtrip(input: &str) {
    let encoded = encode(input);
    assert!(encoded.is_ascii(), "non-ASCII output for {input:?}");
    assert_eq!(decode(&encoded, false).unwrap(), input);
    assert_eq!(decode(&encoded, true).unwrap(), input);
}
