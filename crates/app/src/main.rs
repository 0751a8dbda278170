//! Command-line front end for the two-column CSV codec.
//!
//! ```bash
//! # JSON rows -> CSV with header and total line
//! colsum export --input rows.json --output table.csv
//!
//! # CSV -> JSON rows, the file has no header line
//! colsum import table.csv --no-skip-header --pretty
//!
//! # Sum of the value column
//! colsum total table.csv
//! ```
//!
//! Defaults for the header/total switches come from `config.toml` in the
//! platform config directory, or from `--config <path>`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod files;

use config::Config;

#[derive(Parser)]
#[command(name = "colsum")]
#[command(about = "Export and import a description/value table as CSV")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (default: <config dir>/colsum/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a JSON list of {description, value} rows as CSV
    Export {
        /// JSON input file, `-` for stdin
        #[arg(long, short)]
        input: PathBuf,

        /// CSV output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Leave out the `Description,Value` header line
        #[arg(long)]
        no_header: bool,

        /// Leave out the `Total,<sum>` line
        #[arg(long)]
        no_total: bool,
    },

    /// Read a CSV file and print its rows as JSON
    Import {
        /// CSV input file, `-` for stdin
        input: PathBuf,

        #[command(flatten)]
        skip: SkipArgs,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Read a CSV file and print the sum of its value column
    Total {
        /// CSV input file, `-` for stdin
        input: PathBuf,

        #[command(flatten)]
        skip: SkipArgs,
    },

    /// Add thousands separators to a value for display
    Format {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Remove thousands separators from a displayed value
    Unformat {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

#[derive(Args)]
struct SkipArgs {
    /// Treat the first line as data instead of a header
    #[arg(long)]
    no_skip_header: bool,

    /// Treat the last line as data instead of a total
    #[arg(long)]
    no_skip_total: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Export {
            input,
            output,
            no_header,
            no_total,
        } => {
            let options = config.export_options(no_header, no_total);
            let csv = commands::export_rows(&input, options)?;
            files::write_text(output.as_deref(), &csv)?;
        }
        Commands::Import {
            input,
            skip,
            pretty,
        } => {
            let options = config.import_options(skip.no_skip_header, skip.no_skip_total);
            let rows = commands::import_rows(&input, options)?;
            files::write_text(None, &commands::rows_to_json(&rows, pretty)?)?;
        }
        Commands::Total { input, skip } => {
            let options = config.import_options(skip.no_skip_header, skip.no_skip_total);
            files::write_text(None, &commands::total(&input, options)?)?;
        }
        Commands::Format { value } => {
            files::write_text(None, &colsum_core::format_with_thousands_separator(&value))?;
        }
        Commands::Unformat { value } => {
            files::write_text(None, &colsum_core::remove_thousands_separator(&value))?;
        }
    }

    Ok(())
}
