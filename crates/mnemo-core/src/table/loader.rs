use std::fs;
use std::path::Path;

use tracing::{debug, debug_span};

use super::{DuplicatePolicy, MnemonicTable, TableError};

/// Characters allowed inside a mnemonic run: printable ASCII without space.
pub(crate) fn is_mnemonic_char(c: char) -> bool {
    ('\u{21}'..='\u{7F}').contains(&c)
}

/// Parse the compact resource grammar.
///
/// The resource is a flat run of records, each a selector character followed
/// by the mnemonic text. A space selector means "previous codepoint + 1"; any
/// other selector is the codepoint itself. The mnemonic ends at the first
/// character outside `'!'..='\x7F'`, which is the next record's selector.
///
/// Content is not validated beyond `policy`: empty mnemonics and codepoints
/// that are not scalar values are stored as found.
pub fn parse_mnemonic_data(
    data: &str,
    policy: DuplicatePolicy,
) -> Result<MnemonicTable, TableError> {
    let _span = debug_span!("parse_mnemonic_data", bytes = data.len()).entered();

    let mut table = MnemonicTable::new();
    let mut chars = data.chars().peekable();
    let mut codepoint: u32 = 0;

    while let Some(selector) = chars.next() {
        codepoint = if selector == ' ' {
            codepoint.saturating_add(1)
        } else {
            selector as u32
        };
        let mut mnemonic = String::new();
        while let Some(c) = chars.next_if(|&c| is_mnemonic_char(c)) {
            mnemonic.push(c);
        }
        table.insert(codepoint, mnemonic, policy)?;
    }

    debug!(entries = table.len(), shadowed = table.shadowed());
    Ok(table)
}

/// Read and parse a resource file. Unreadable files and invalid UTF-8 are
/// reported as [`TableError::Io`].
pub fn load_mnemonic_file(
    path: &Path,
    policy: DuplicatePolicy,
) -> Result<MnemonicTable, TableError> {
    let data = fs::read_to_string(path)?;
    parse_mnemonic_data(&data, policy)
}
