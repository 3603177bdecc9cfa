#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use waybill_gen::{WorkloadConfig, generate};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "wbgen: synthetic waybill workload generator",
    long_about = None
)]
struct Cli {
    /// RNG seed.
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Number of warehouses (at least 2).
    #[arg(short, long, default_value_t = 10)]
    nodes: u64,

    /// Number of parcels to register.
    #[arg(short, long, default_value_t = 100)]
    parcels: u64,

    /// Number of distinct clients.
    #[arg(short, long, default_value_t = 10)]
    clients: u64,

    /// Mean gap between consecutive event timestamps.
    #[arg(short = 't', long, default_value_t = 10)]
    mean_gap: u64,

    /// Output file (stdout when omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ensure!(cli.nodes >= 2, "the number of warehouses must be at least 2");

    let config = WorkloadConfig {
        seed: cli.seed,
        nodes: cli.nodes,
        parcels: cli.parcels,
        clients: cli.clients,
        mean_gap: cli.mean_gap,
    };

    match cli.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("cannot create output file {}", path.display()))?;
            let mut out = BufWriter::new(file);
            generate(&config, &mut out)?;
            out.flush().context("flushing output")?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            generate(&config, &mut out)?;
            out.flush().context("flushing output")?;
        }
    }
    Ok(())
}
