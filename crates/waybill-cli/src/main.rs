#![forbid(unsafe_code)]

mod output;
mod replay;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use output::OutputMode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "waybill: logistics event-log replay and queries",
    long_about = None
)]
struct Cli {
    /// Log file to replay.
    log: PathBuf,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress per-line diagnostics.
    #[arg(short, long)]
    quiet: bool,

    /// Emit JSON query output instead of plain text.
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    fn default_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("WAYBILL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(cli.default_filter()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    replay::run(&cli.log, cli.output_mode())
}
