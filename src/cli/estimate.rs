//! Estimate command implementation

use crate::config::Config;
use crate::estimate::{EstimateReport, EstimateRequest, Estimator};
use crate::fetch::WebFetcher;
use clap::Args;

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// What to price, e.g. "petrol price"
    pub query: String,

    /// City or region added to the report
    #[arg(short, long)]
    pub location: Option<String>,

    /// Page to scan: an http(s) URL or a local file (repeatable)
    #[arg(short, long = "source", required = true)]
    pub sources: Vec<String>,

    /// Maximum number of sources to fetch
    #[arg(short, long)]
    pub max_sources: Option<usize>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,
}

impl EstimateArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let fetcher = WebFetcher::new(&config.fetch)?;
        let estimator = Estimator::new(fetcher, config);

        let mut request = EstimateRequest::new(self.query.clone()).with_sources(self.sources.clone());
        if let Some(location) = &self.location {
            request = request.with_location(location.clone());
        }
        if let Some(max_sources) = self.max_sources {
            request = request.with_max_sources(max_sources);
        }

        let report = estimator.estimate(&request).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }
        Ok(())
    }
}

fn print_report(report: &EstimateReport) {
    println!("Query:    {}", report.query);
    if let Some(location) = &report.location {
        println!("Location: {}", location);
    }
    println!("Category: {}", report.category);
    println!(
        "Sources:  {} fetched, {} failed",
        report.sources_fetched, report.sources_failed
    );
    println!("Prices:   {} observed", report.observation_count);

    match &report.baseline {
        Some(baseline) => {
            let cur = &report.reference_currency;
            println!("  low    {} {}", baseline.low.round_dp(2), cur);
            println!("  median {} {}", baseline.median.round_dp(2), cur);
            println!("  mean   {} {}", baseline.mean.round_dp(2), cur);
            println!("  high   {} {}", baseline.high.round_dp(2), cur);
        }
        None => {
            if let Some(notes) = &report.notes {
                println!("{}", notes);
            }
        }
    }
}
