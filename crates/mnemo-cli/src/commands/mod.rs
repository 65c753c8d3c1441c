pub mod codec_ops;
pub mod config_ops;
pub mod table_ops;

use std::borrow::Cow;
use std::path::Path;

use mnemonify::{DuplicatePolicy, MnemonicTable, Mnemonifier, Settings};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;

/// Build the handle the codec commands run with: global settings, optionally
/// overridden by an explicit table file and the `--no-annotate` flag.
pub fn open_mnemonifier(
    settings: &Settings,
    table: Option<&str>,
    annotate: bool,
) -> Mnemonifier {
    let mut settings = settings.clone();
    if !annotate {
        settings.encoder.annotate = false;
    }
    if let Some(path) = table {
        settings.table.path = Some(path.into());
    }
    die!(
        Mnemonifier::from_settings(&settings),
        "Error opening mnemonic table: {}"
    )
}

/// The table named on the command line, or the global default.
pub fn open_table(path: Option<&str>, policy: DuplicatePolicy) -> Cow<'static, MnemonicTable> {
    match path {
        Some(path) => Cow::Owned(die!(
            mnemonify::table::load_mnemonic_file(Path::new(path), policy),
            "Error opening {path}: {}"
        )),
        None => Cow::Borrowed(MnemonicTable::global()),
    }
}
