//! Standalone benchmark runner that prints the tab-separated report.
//!
//! Generates one corpus of 30 synthetic records, then times JSON and bincode
//! dump/load passes over it at 10, 20, 50 and 100 repetitions. The table goes
//! to stdout, progress logging to stderr.
//!
//! Usage:
//!   cargo run --release

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serbench::format::binary::BincodeFormat;
use serbench::format::json::JsonFormat;
use serbench::harness::{Harness, HarnessConfig};
use serbench_core::generator::{generate_corpus, CorpusParams};
use std::io;

fn main() -> Result<()> {
    serbench_core::initialize_logger(log::LevelFilter::Info)
        .context("failed to initialize logger")?;

    let params = CorpusParams::standard();
    let mut rng = StdRng::from_entropy();
    let corpus = generate_corpus(&mut rng, &params)?;
    log::info!(
        "Generated {} records ({} batches of {} entries per shape)",
        corpus.len(),
        params.batches,
        params.records_per_shape
    );

    let json = JsonFormat::new();
    let binary = BincodeFormat::new();
    let config = HarnessConfig::default();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let rows = Harness::new(&corpus, &json, &binary).run(&config, &mut out)?;

    log::info!("Benchmark finished: {} rows", rows.len());
    Ok(())
}
