//! Baseline command implementation

use crate::baseline::{aggregate, BaselineOutcome};
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct BaselineArgs {
    /// Amounts already in the reference currency
    #[arg(required = true)]
    pub amounts: Vec<Decimal>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl BaselineArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let outcome = aggregate(self.amounts.iter().copied());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            return Ok(());
        }

        match outcome {
            BaselineOutcome::Estimated(baseline) => {
                println!("low:    {}", baseline.low);
                println!("median: {}", baseline.median);
                println!("mean:   {}", baseline.mean);
                println!("high:   {}", baseline.high);
            }
            BaselineOutcome::NoData { note } => println!("{}", note),
        }
        Ok(())
    }
}
