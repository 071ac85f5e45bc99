use clap::Parser;
use price_estimator::cli::{Cli, Commands};
use price_estimator::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    let _telemetry = price_estimator::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Estimate(args) => {
            tracing::debug!("Running estimate");
            args.execute(&config).await?;
        }
        Commands::Extract(args) => {
            args.execute(&config)?;
        }
        Commands::Baseline(args) => {
            args.execute()?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Extraction: reference={}, max_text_chars={}",
                config.extraction.reference_currency, config.extraction.max_text_chars
            );
            for (code, rate) in &config.fx.rates {
                println!("  FX: 1 {} = {} {}", code, rate, config.extraction.reference_currency);
            }
            println!(
                "  Fetch: timeout={}s, max_sources={}, user_agent={}",
                config.fetch.timeout_secs, config.fetch.max_sources, config.fetch.user_agent
            );
            println!("  Report: max_observations={}", config.report.max_observations);
            println!(
                "  Telemetry: level={}, format={:?}, metrics_port={:?}",
                config.telemetry.log_level,
                config.telemetry.log_format,
                config.telemetry.metrics_port
            );
        }
    }

    Ok(())
}
