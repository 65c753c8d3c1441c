//! JSON-lines trace file, compiled in with the `trace` feature.
//!
//! Without the feature `init_tracing` does nothing and the core crates emit no
//! events, since `tracing` is built with `max_level_off`.

use std::io;
use std::path::{Path, PathBuf};

pub const TRACE_FILE_NAME: &str = "mnemonify-trace.jsonl";

/// Full path of the trace file written under `log_dir`.
pub fn trace_file(log_dir: &Path) -> PathBuf {
    log_dir.join(TRACE_FILE_NAME)
}

/// Install a global subscriber writing to [`trace_file`]. The directory is
/// created if missing. Only the first successful call installs anything.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> io::Result<()> {
    use std::sync::Once;

    static INIT: Once = Once::new();

    std::fs::create_dir_all(log_dir)?;
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE_NAME);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // The writer thread must outlive every command.
        std::mem::forget(guard);

        let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("mnemonify=debug,mnemo_core=debug,mnemo_cli=debug")
        });
        let installed = tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();
        if installed.is_err() {
            eprintln!("mnemonify: a tracing subscriber is already installed");
        }
    });
    Ok(())
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> io::Result<()> {
    Ok(())
}
