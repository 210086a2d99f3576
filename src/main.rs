//! Command-line front end for the GPR-20 data pipeline.
//!
//! Store requests from a file (or `-` for stdin):
//! ```bash
//! gpr20-data store requests.json
//! gpr20-data --data-root /mnt/usb/gpr20_data store -
//! ```
//!
//! Inspect a raw instrument response:
//! ```bash
//! gpr20-data decode '#5xxxxx1.0,2.0,3.0,'
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gpr20_data::data::decoder::decode_response;
use gpr20_data::data::loader::load_requests;
use gpr20_data::{process_sample, StorageConfig};

#[derive(Parser)]
#[command(name = "gpr20-data")]
#[command(about = "Decode VNA responses and store GPR-20 samples as JSON", long_about = None)]
struct Cli {
    /// Data root (defaults to ~/gpr20_data)
    #[arg(long, env = "GPR20_DATA_ROOT", global = true)]
    data_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process and store one or more request documents
    Store {
        /// JSON files holding a request object or an array of them; `-` reads stdin
        #[arg(required = true)]
        requests: Vec<PathBuf>,
    },

    /// Decode a single raw VNA response and print its values
    Decode {
        /// Raw response, e.g. '#5xxxxx1.0,2.0,3.0,'
        response: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Store { requests } => {
            let config = match cli.data_root {
                Some(root) => StorageConfig::with_root(root),
                None => StorageConfig::from_home().context("resolving data root")?,
            };
            store(&config, &requests)
        }
        Commands::Decode { response } => {
            let values = decode_response(&response).context("decoding response")?;
            for v in values {
                println!("{v}");
            }
            Ok(())
        }
    }
}

fn store(config: &StorageConfig, files: &[PathBuf]) -> Result<()> {
    let mut stored = 0usize;
    let mut failed = 0usize;

    for file in files {
        let requests = match load_requests(file) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", file.display());
                failed += 1;
                continue;
            }
        };

        for request in requests {
            let sample_id = request.metadata.sample_id.clone();
            match process_sample(config, request) {
                Ok(path) => {
                    println!("{}", path.display());
                    stored += 1;
                }
                Err(e) => {
                    log::warn!("Sample {sample_id} not stored: {e}");
                    failed += 1;
                }
            }
        }
    }

    log::info!("{stored} stored, {failed} failed");
    if failed > 0 {
        bail!("{failed} request(s) failed, {stored} stored");
    }
    Ok(())
}
