use std::io::Write;

use super::*;

#[test]
fn default_handle_matches_free_functions() {
    let m = Mnemonifier::new();
    assert_eq!(m.encode("Für Elisè"), encode("Für Elisè"));
    assert_eq!(m.decode("[#20ac][[").unwrap(), "\u{20ac}[[");
    assert_eq!(m.mode(), DecodeMode::Lax);
}

#[test]
fn strict_handle_rejects() {
    let m = Mnemonifier::new().with_mode(DecodeMode::Strict);
    assert!(m.decode("Lo]vely").is_err());
    assert_eq!(m.decode_lax("Lo]vely"), "Lo]vely");
}

#[test]
fn handle_with_transliterator() {
    let m = Mnemonifier::new().with_transliterator(|c: char| {
        (c == '\u{20ac}').then(|| "EUR".to_string())
    });
    assert_eq!(m.encode("\u{20ac}5"), "[#20AC{EUR}]5");
    assert_eq!(m.decode("[#20AC{EUR}]5").unwrap(), "\u{20ac}5");
}

#[test]
fn handle_with_custom_table() {
    let table = MnemonicTable::from_entries([(0x20AC, "Eu")], DuplicatePolicy::Reject).unwrap();
    let m = Mnemonifier::new().with_table(table);
    assert_eq!(m.encode("\u{20ac}"), "[Eu]");
    assert_eq!(m.decode("[Eu]").unwrap(), "\u{20ac}");
    assert_eq!(m.table().len(), 1);
}

#[test]
fn from_default_settings() {
    let settings = settings::parse_settings_toml(settings::DEFAULT_SETTINGS_TOML).unwrap();
    let m = Mnemonifier::from_settings(&settings).unwrap();
    assert_eq!(m.mode(), DecodeMode::Lax);
    assert_eq!(m.encode("à"), "[a!]");
}

#[test]
fn from_settings_with_table_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all("\u{20ac}Eu".as_bytes()).unwrap();
    let toml = format!(
        "[encoder]\nannotate = false\n[decoder]\nstrict = true\n[table]\nduplicates = \"reject\"\npath = {:?}\n",
        file.path().display().to_string()
    );
    let settings = settings::parse_settings_toml(&toml).unwrap();
    let m = Mnemonifier::from_settings(&settings).unwrap();
    assert_eq!(m.mode(), DecodeMode::Strict);
    assert_eq!(m.encode("\u{20ac}à"), "[Eu][#E0]");
}

#[test]
fn from_settings_with_missing_table() {
    let dir = tempfile::tempdir().unwrap();
    let toml = format!(
        "[encoder]\nannotate = false\n[decoder]\nstrict = false\n[table]\npath = {:?}\n",
        dir.path().join("absent.dat").display().to_string()
    );
    let settings = settings::parse_settings_toml(&toml).unwrap();
    let err = Mnemonifier::from_settings(&settings).err().unwrap();
    assert!(matches!(err, MnemonifyError::Table(TableError::Io(_))));
}

#[test]
fn settings_load_reports_missing_file() {
    let err = settings_load_config(Path::new("/nonexistent/mnemonify.toml")).unwrap_err();
    assert!(matches!(err, MnemonifyError::Io { .. }));
}

#[test]
fn trace_file_lives_in_log_dir() {
    let path = trace_init::trace_file(Path::new("/var/log/mnemo"));
    assert_eq!(path, Path::new("/var/log/mnemo/mnemonify-trace.jsonl"));
}

#[cfg(feature = "trace")]
#[test]
fn init_tracing_creates_log_dir() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs").join("nested");
    trace_init::init_tracing(&log_dir).unwrap();
    assert!(log_dir.is_dir());
    // A second call is a no-op.
    trace_init::init_tracing(&log_dir).unwrap();
}

#[cfg(feature = "trace")]
#[test]
fn init_tracing_reports_unusable_dir() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert!(trace_init::init_tracing(&file.path().join("logs")).is_err());
}

#[cfg(not(feature = "trace"))]
#[test]
fn init_tracing_is_inert_without_feature() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");
    trace_init::init_tracing(&log_dir).unwrap();
    assert!(!log_dir.exists());
}

#[test]
fn version_is_package_version() {
    assert_eq!(engine_version(), env!("CARGO_PKG_VERSION"));
    assert!(!engine_version().is_empty());
}
