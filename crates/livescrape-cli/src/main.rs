//! Refreshes the live channel playlist from the event listing

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use livescrape_core::{LiveScraper, RandomIds, RunOutcome, ScrapeConfig, TracingReporter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "livescrape=info,livescrape_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting scraper v{}", env!("CARGO_PKG_VERSION"));

    let config = ScrapeConfig::default();
    let scraper = match LiveScraper::with_config(config) {
        Ok(scraper) => scraper,
        Err(e) => {
            error!(error = %e, "could not initialize HTTP client");
            return Ok(());
        }
    };

    // Partial and empty runs both end normally
    match scraper.run(&TracingReporter, &RandomIds).await {
        Ok(RunOutcome::Written { path, channels }) => {
            info!(path = %path.display(), channels, "captured live channels");
        }
        Ok(outcome) => info!(?outcome, "run finished without writing output"),
        Err(e) => error!(error = %e, "error generating JSON"),
    }

    Ok(())
}
