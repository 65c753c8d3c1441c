use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use mnemo_cli::commands::{codec_ops, config_ops, open_mnemonifier, open_table, table_ops};
use mnemonify::DecodeMode;

#[derive(Parser)]
#[command(
    name = "mnemotool",
    about = "Mnemonic ASCII encoding tool",
    version = mnemonify::engine_version()
)]
struct Cli {
    /// Settings TOML file (defaults to the embedded settings)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Log to stderr (filter with RUST_LOG; needs the `trace` feature)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Write JSON trace events to DIR/mnemonify-trace.jsonl (needs the `trace` feature)
    #[arg(long, global = true, value_name = "DIR", conflicts_with = "verbose")]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text (arguments, or one line at a time from stdin)
    Encode {
        texts: Vec<String>,
        /// Custom mnemonic table in compact format
        #[arg(long)]
        table: Option<String>,
        /// Leave transliteration tags off hex escapes
        #[arg(long)]
        no_annotate: bool,
    },
    /// Decode text (arguments, or one line at a time from stdin)
    Decode {
        texts: Vec<String>,
        /// Custom mnemonic table in compact format
        #[arg(long)]
        table: Option<String>,
        /// Reject malformed escapes
        #[arg(long)]
        strict: bool,
    },
    /// Show the mnemonic for a character, or the character for a mnemonic
    Lookup {
        /// A single character, a mnemonic, or a bracketed token like [a!]
        query: String,
        /// Custom mnemonic table in compact format
        #[arg(long)]
        table: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Round-trip every line of a file and report failures
    Check {
        file: String,
        /// Custom mnemonic table in compact format
        #[arg(long)]
        table: Option<String>,
    },
    /// Mnemonic table tools
    Table {
        #[command(subcommand)]
        command: TableCommand,
    },
    /// Settings tools
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Subcommand)]
enum TableCommand {
    /// Show entry count, codepoint range and shadowed mnemonics
    Info {
        /// Table file (defaults to the embedded table)
        file: Option<String>,
    },
    /// Print a table in compact format or as TOML
    Export {
        /// Table file (defaults to the embedded table)
        #[arg(long)]
        table: Option<String>,
        /// Output TOML instead of the compact format
        #[arg(long)]
        toml: bool,
    },
    /// Compile a TOML mnemonic source into the compact format
    Compile {
        /// Input TOML file
        input: String,
        /// Output table file
        output: String,
    },
    /// Check that a table has no duplicate or unusable mnemonics
    Validate {
        /// Table file
        file: String,
    },
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Export default settings as TOML
    Export,
    /// Validate a custom settings TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    if let Some(dir) = &cli.trace_dir {
        if let Err(e) = mnemonify::trace_init::init_tracing(dir) {
            eprintln!("Error opening trace directory {}: {e}", dir.display());
            std::process::exit(1);
        }
    } else if cli.verbose {
        init_logging();
    }
    if let Some(path) = &cli.settings {
        if let Err(e) = mnemonify::settings_load_config(Path::new(path)) {
            eprintln!("Error loading settings: {e}");
            std::process::exit(1);
        }
    }
    let settings = mnemonify::settings::settings();

    match cli.command {
        Command::Encode {
            texts,
            table,
            no_annotate,
        } => {
            let m = open_mnemonifier(settings, table.as_deref(), !no_annotate);
            codec_ops::encode_cmd(&m, &texts);
        }
        Command::Decode {
            texts,
            table,
            strict,
        } => {
            let mut m = open_mnemonifier(settings, table.as_deref(), false);
            if strict {
                m = m.with_mode(DecodeMode::Strict);
            }
            codec_ops::decode_cmd(&m, &texts);
        }
        Command::Lookup { query, table, json } => {
            let table = open_table(table.as_deref(), settings.table.duplicates);
            table_ops::lookup_cmd(&table, &query, json);
        }
        Command::Check { file, table } => {
            let m = open_mnemonifier(settings, table.as_deref(), true);
            codec_ops::check_cmd(&m, &file);
        }
        Command::Table { command } => match command {
            TableCommand::Info { file } => {
                let table = open_table(file.as_deref(), settings.table.duplicates);
                table_ops::info_cmd(&table);
            }
            TableCommand::Export { table, toml } => {
                let table = open_table(table.as_deref(), settings.table.duplicates);
                table_ops::export_cmd(&table, toml);
            }
            TableCommand::Compile { input, output } => {
                table_ops::compile_cmd(&input, &output);
            }
            TableCommand::Validate { file } => {
                table_ops::validate_cmd(&file);
            }
        },
        Command::Settings { command } => match command {
            SettingsCommand::Export => config_ops::settings_export(),
            SettingsCommand::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
