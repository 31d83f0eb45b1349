//! # pwcheck
//!
//! Classifies candidate passwords as `unique`, `duplicate` or `invalid`
//! against a Bloom filter preloaded with known passwords.
//!
//! ## Usage
//!
//! ```text
//! pwcheck                           # built-in demo run
//! pwcheck request.json              # {"existing": [...], "candidates": [...]}
//! pwcheck --capacity 4096 -k 7 req.json
//! ```
//!
//! Filter size comes from `PWCHECK_CAPACITY`, `PWCHECK_HASH_COUNT` and
//! `PWCHECK_WARN_FPR`; command-line flags take precedence. Logs go to
//! stderr (`RUST_LOG`), results to stdout.

mod input;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use uniqueness_filter::{BloomConfig, BloomFilter, UniquenessApi, UniquenessService};

use crate::input::{CheckInput, CheckOutput};

/// pwcheck: flag previously used passwords
#[derive(Parser, Debug)]
#[command(name = "pwcheck")]
#[command(about = "Classify candidate passwords as unique, duplicate or invalid")]
struct Args {
    /// JSON request file with `existing` and `candidates`; runs the demo when omitted
    request: Option<PathBuf>,

    /// Bit array size, overrides PWCHECK_CAPACITY
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Number of hash functions, overrides PWCHECK_HASH_COUNT
    #[arg(short = 'k', long)]
    hash_count: Option<usize>,

    /// Estimated FPR that triggers a saturation warning, overrides PWCHECK_WARN_FPR
    #[arg(long)]
    warn_fpr: Option<f64>,
}

impl Args {
    /// Apply command-line overrides on top of `base` and revalidate
    fn config(&self, mut base: BloomConfig) -> Result<BloomConfig> {
        if let Some(capacity) = self.capacity {
            base.capacity = capacity;
        }
        if let Some(hash_count) = self.hash_count {
            base.hash_count = hash_count;
        }
        if let Some(warn_fpr) = self.warn_fpr {
            base.warn_fpr = warn_fpr;
        }
        base.validate().context("Invalid filter configuration")?;
        Ok(base)
    }
}

fn load_input(args: &Args) -> Result<CheckInput> {
    match &args.request {
        Some(path) => {
            info!(path = %path.display(), "Loading check request");
            CheckInput::from_path(path)
        }
        None => {
            info!("No request file given, running built-in demo");
            Ok(CheckInput::demo())
        }
    }
}

fn run(config: &BloomConfig, input: CheckInput) -> Result<CheckOutput> {
    let mut filter = BloomFilter::from_config(config).context("Failed to create membership filter")?;

    let mut service = UniquenessService::new(&mut filter).with_warn_fpr(config.warn_fpr);
    service.preload(&input.existing);
    let results = service.classify(input.candidates);

    info!(
        bits_set = filter.bits_set(),
        capacity = filter.capacity(),
        estimated_fpr = filter.estimated_false_positive_rate(),
        "Filter state after run"
    );

    Ok(CheckOutput::new(results))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let env_config = BloomConfig::from_env().context("Invalid PWCHECK_* configuration")?;
    let config = args.config(env_config)?;
    info!(
        capacity = config.capacity,
        hash_count = config.hash_count,
        "Loaded filter configuration"
    );

    let input = load_input(&args)?;
    let output = run(&config, input)?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
