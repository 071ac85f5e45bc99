//! Extract command implementation

use crate::config::Config;
use crate::extract::PriceExtractor;
use crate::fetch::{html_to_text, looks_like_html};
use crate::fx::ExchangeTable;
use crate::observation::observe;
use anyhow::Context;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Text or HTML file to scan (stdin when omitted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Override the reference currency
    #[arg(short, long)]
    pub reference: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ExtractArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let raw = match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                buf
            }
        };
        let text = if looks_like_html(&raw) {
            html_to_text(&raw)
        } else {
            raw
        };

        let mut extraction = config.extraction.clone();
        if let Some(reference) = &self.reference {
            extraction.reference_currency = reference.clone();
        }
        let extractor = PriceExtractor::from_config(&extraction);
        let fx = ExchangeTable::from_config(&extraction, &config.fx);

        let source = self.file.as_ref().map(|p| p.display().to_string());
        let observations = observe(&extractor, &fx, source.as_deref(), &text);
        tracing::debug!(count = observations.len(), "Extracted observations");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&observations)?);
            return Ok(());
        }

        for obs in &observations {
            println!(
                "{:>4} {:>14} -> {:>14} {}",
                obs.currency,
                obs.amount,
                obs.amount_in_reference,
                fx.reference()
            );
        }
        println!("{} observation(s)", observations.len());
        Ok(())
    }
}
