use std::fs;
use std::io::{self, BufRead};
use std::process;

use mnemonify::Mnemonifier;

use super::die;

/// Command-line texts, or stdin lines when none were given.
fn inputs(texts: &[String]) -> Vec<String> {
    if !texts.is_empty() {
        return texts.to_vec();
    }
    io::stdin()
        .lock()
        .lines()
        .map(|line| die!(line, "Error reading stdin: {}"))
        .collect()
}

pub fn encode_cmd(m: &Mnemonifier, texts: &[String]) {
    for text in inputs(texts) {
        println!("{}", m.encode(&text));
    }
}

pub fn decode_cmd(m: &Mnemonifier, texts: &[String]) {
    for text in inputs(texts) {
        let decoded = die!(m.decode(&text), "Error: {}");
        println!("{decoded}");
    }
}

/// Outcome of round-tripping one line.
#[derive(Debug, PartialEq, Eq)]
pub enum CheckFailure {
    NonAscii,
    Lax(String),
    Strict(String),
}

pub fn check_line(m: &Mnemonifier, line: &str) -> Option<CheckFailure> {
    let encoded = m.encode(line);
    if !encoded.is_ascii() {
        return Some(CheckFailure::NonAscii);
    }
    let lax = m.decode_lax(&encoded);
    if lax != line {
        return Some(CheckFailure::Lax(lax));
    }
    let strict = mnemonify::Decoder::new(m.table(), mnemonify::DecodeMode::Strict);
    match strict.decode(&encoded) {
        Ok(decoded) if decoded == line => None,
        Ok(decoded) => Some(CheckFailure::Strict(decoded)),
        Err(e) => Some(CheckFailure::Strict(e.to_string())),
    }
}

pub fn check_cmd(m: &Mnemonifier, file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let mut total = 0usize;
    let mut failed = 0usize;
    for (lineno, line) in content.lines().enumerate() {
        total += 1;
        if let Some(failure) = check_line(m, line) {
            failed += 1;
            println!("{}:{}: {:?}", file, lineno + 1, failure);
        }
    }
    println!("{total} lines, {failed} failed");
    if failed > 0 {
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_line_accepts_roundtrips() {
        let m = Mnemonifier::new();
        assert_eq!(check_line(&m, "Für [Elisè] \u{1d11e}"), None);
        assert_eq!(check_line(&m, ""), None);
    }

    #[test]
    fn check_line_reports_broken_table() {
        // Two characters sharing one mnemonic cannot both round-trip.
        let table = mnemonify::MnemonicTable::from_entries(
            [(0xE0, "a"), (0xE1, "a")],
            mnemonify::DuplicatePolicy::LastWins,
        )
        .unwrap();
        let m = Mnemonifier::new().with_table(table);
        assert_eq!(check_line(&m, "\u{e1}"), None);
        assert_eq!(check_line(&m, "\u{e0}"), Some(CheckFailure::Lax("\u{e1}".into())));
    }

    #[test]
    fn check_line_reports_non_ascii_tags() {
        let m = Mnemonifier::new().with_transliterator(|_c: char| Some("é".to_string()));
        // Non-ASCII approximations are dropped, so the output stays ASCII.
        assert_eq!(check_line(&m, "\u{20ac}"), None);
        assert_eq!(m.encode("\u{20ac}"), "[#20AC]");
    }
}
