use super::loader::is_mnemonic_char;
use super::TableError;

/// Serialize entries into the compact resource grammar.
///
/// Entries are written in codepoint order; consecutive codepoints use the
/// space selector. Codepoints in `' '..='\x7F'` can only be reached that way,
/// so an entry there without a predecessor is [`TableError::Unrepresentable`].
pub fn write_mnemonic_data<'a, I>(entries: I) -> Result<String, TableError>
where
    I: IntoIterator<Item = (u32, &'a str)>,
{
    let mut sorted: Vec<(u32, &str)> = entries.into_iter().collect();
    sorted.sort_by_key(|&(cp, _)| cp);

    let mut out = String::new();
    let mut previous: u32 = 0;
    for (codepoint, mnemonic) in sorted {
        if mnemonic.is_empty() {
            return Err(TableError::InvalidMnemonic {
                codepoint,
                mnemonic: mnemonic.to_string(),
                reason: "empty",
            });
        }
        if !mnemonic.chars().all(is_mnemonic_char) {
            return Err(TableError::InvalidMnemonic {
                codepoint,
                mnemonic: mnemonic.to_string(),
                reason: "contains characters outside printable ASCII",
            });
        }

        let selector = if codepoint == previous.wrapping_add(1) {
            ' '
        } else {
            char::from_u32(codepoint)
                .filter(|&c| c != ' ' && !is_mnemonic_char(c))
                .ok_or(TableError::Unrepresentable(codepoint))?
        };
        out.push(selector);
        out.push_str(mnemonic);
        previous = codepoint;
    }
    Ok(out)
}
