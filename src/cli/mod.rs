//! CLI interface for price-estimator
//!
//! Provides subcommands for:
//! - `estimate`: Estimate a price from a set of pages
//! - `extract`: List the prices found in a piece of text
//! - `baseline`: Aggregate a list of amounts
//! - `config`: Show the effective configuration

mod baseline;
mod estimate;
mod extract;

pub use baseline::BaselineArgs;
pub use estimate::EstimateArgs;
pub use extract::ExtractArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "price-estimator")]
#[command(about = "Estimate market prices from scraped page text")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate a price from a set of pages
    Estimate(EstimateArgs),
    /// List the prices found in a piece of text
    Extract(ExtractArgs),
    /// Aggregate a list of amounts into a baseline
    Baseline(BaselineArgs),
    /// Show the effective configuration
    Config,
}
