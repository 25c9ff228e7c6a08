use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use audit_validator::{
    DEFAULT_DOCS_DIR, DEFAULT_MAX_FILE_SIZE, MissingFilePolicy, ValidationConfig, output,
    validate_default,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Validate the structure of the audit documents.
#[derive(Debug, Parser)]
#[command(name = "audit-validator", version, about)]
struct Cli {
    /// Directory containing the audit documents
    #[arg(long, default_value = DEFAULT_DOCS_DIR)]
    docs_dir: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Report configured documents that do not exist instead of skipping them
    #[arg(long)]
    require_all: bool,

    /// Maximum size of a single document in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    max_file_size: u64,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn validation_config(&self) -> ValidationConfig {
        let mut config = ValidationConfig::default();
        if self.require_all {
            config.missing_file_policy = MissingFilePolicy::Error;
        }
        config.max_file_size = self.max_file_size;
        config
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Logs go to stderr; RUST_LOG overrides the verbosity flag.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}

/// Run the validator and print its report.
///
/// Returns whether validation passed.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = validate_default(&cli.docs_dir, &cli.validation_config());

    match cli.format {
        OutputFormat::Json => {
            let mut stdout = std::io::stdout().lock();
            output::write_json(&report, &mut stdout)?;
            stdout.flush()?;
        }
        OutputFormat::Human if report.ok => {
            let mut stdout = std::io::stdout().lock();
            output::write_human(&report, &mut stdout)?;
            stdout.flush()?;
        }
        OutputFormat::Human => {
            let mut stderr = std::io::stderr().lock();
            output::write_human(&report, &mut stderr)?;
            stderr.flush()?;
        }
    }

    Ok(report.ok)
}
