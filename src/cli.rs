//! CLI module containing the main entry point logic.
//!
//! Kept out of main.rs so the argument handling can be unit tested.

use crate::config::{self, Config, PathMode};
use crate::driver::{Driver, TransformStats};
use crate::error::{Error, Result};
use clap::Parser as ClapParser;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for `kernel_helper`.
#[derive(ClapParser, Debug)]
#[command(name = "kernel_helper")]
#[command(version = PKG_VERSION)]
#[command(
    about = "Convert an OpenCL kernel into string literals that can be pasted into a C/C++ program",
    long_about = None
)]
#[command(after_help = "Example: kernel_helper -f kernel.cl -o out.txt -v")]
pub struct Cli {
    /// Activate verbose mode (echo converted lines to stdout)
    #[arg(short = 'v')]
    verbose: bool,

    /// Enable output of blank lines
    #[arg(short = 'b')]
    blank_lines: bool,

    /// Use file paths as given instead of looking in the data directory
    #[arg(short = 'a')]
    immediate_directory: bool,

    /// Kernel file to process
    #[arg(short = 'f', value_name = "KERNEL_FILE", default_value = config::DEFAULT_KERNEL_FILE)]
    kernel_file: PathBuf,

    /// Output file to write
    #[arg(short = 'o', value_name = "OUTPUT_FILE", default_value = config::DEFAULT_OUTPUT_FILE)]
    output_file: PathBuf,

    /// Directory searched when -a is not given
    #[arg(long, value_name = "DIR", default_value = config::IO_DIRECTORY)]
    data_dir: PathBuf,

    /// Maximum length of a single line in bytes (0 for no limit)
    #[arg(long, value_name = "N", default_value_t = config::MAX_LINE_LENGTH)]
    max_line_length: usize,

    /// Require a newline at the end of the last line
    #[arg(long)]
    strict_newline: bool,

    /// Print a summary of the run to stderr (none, text, json)
    #[arg(long, value_name = "FORMAT", default_value = "none")]
    summary: SummaryFormat,
}

/// Format of the end-of-run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryFormat {
    /// No summary (default)
    None,
    /// One human-readable line
    Text,
    /// Pretty-printed JSON
    Json,
}

impl SummaryFormat {
    /// Render `stats` in this format. Returns None when no summary is wanted.
    #[must_use]
    pub fn format_stats(self, stats: &TransformStats) -> Option<String> {
        match self {
            Self::None => None,
            Self::Text => Some(stats.to_text()),
            Self::Json => Some(stats.to_json()),
        }
    }
}

impl Cli {
    /// Build the run configuration from the parsed flags.
    #[must_use]
    pub fn config(&self) -> Config {
        let path_mode = if self.immediate_directory {
            PathMode::Immediate
        } else {
            PathMode::DataDirectory
        };
        Config::default()
            .verbose(self.verbose)
            .include_blank_lines(self.blank_lines)
            .path_mode(path_mode)
            .data_dir(&self.data_dir)
            .max_line_length((self.max_line_length > 0).then_some(self.max_line_length))
            .require_trailing_newline(self.strict_newline)
    }
}

/// Resolve paths, open both files and run the conversion.
///
/// The output file is only created once the input has been opened.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`], [`Error::FileNotCreatable`] or any error
/// from the conversion itself.
pub fn execute(cli: &Cli) -> Result<TransformStats> {
    let config = cli.config();

    let in_path = config.resolve_path(&cli.kernel_file);
    let input = File::open(&in_path).map_err(|e| Error::not_found(&in_path, e))?;

    let out_path = config.resolve_path(&cli.output_file);
    let output = File::create(&out_path).map_err(|e| Error::not_creatable(&out_path, e))?;

    tracing::debug!(input = %in_path.display(), output = %out_path.display(), "converting kernel");
    Driver::new(&config).process(BufReader::new(input), BufWriter::new(output))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Main CLI logic.
pub fn run_cli() {
    let cli = Cli::parse();
    init_tracing();

    match execute(&cli) {
        Ok(stats) => {
            if let Some(summary) = cli.summary.format_stats(&stats) {
                eprintln!("{summary}");
            }
        }
        Err(e) => crate::fatal_error(&format!("Error: {e}")),
    }
}
