//! Main scraper API
//!
//! Provides the high-level API combining the fetcher, the collector and the
//! playlist builder into one run.

use std::path::PathBuf;

use crate::client::{HttpFetcher, PageFetcher};
use crate::collector::ChannelCollector;
use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::id::IdSource;
use crate::playlist::build_playlist;
use crate::report::{Reporter, ScrapeEvent};
use crate::storage::{load_template, write_document};
use crate::types::ChannelRecord;

/// How a run ended
///
/// Every variant is a normal termination; only a failed output write is an
/// `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No channel had streams, nothing was written
    NothingToSave,
    /// Template missing or unusable, nothing was written
    TemplateUnavailable,
    /// Output document written
    Written { path: PathBuf, channels: usize },
}

/// Main scraper API
///
/// Owns the run configuration and the page fetcher.
pub struct LiveScraper<F = HttpFetcher> {
    config: ScrapeConfig,
    fetcher: F,
}

impl LiveScraper<HttpFetcher> {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ScrapeConfig::default())
    }

    /// Create a new scraper with custom configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ScrapeConfig) -> Result<Self> {
        let fetcher = HttpFetcher::with_config(&config)?;
        Ok(Self { config, fetcher })
    }
}

impl<F: PageFetcher> LiveScraper<F> {
    /// Create a scraper that fetches pages through `fetcher`
    pub fn with_fetcher(config: ScrapeConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Collect channel records from the configured listing page
    pub async fn collect<R: Reporter>(&self, reporter: &R) -> Vec<ChannelRecord> {
        let collector = ChannelCollector::new(&self.config, &self.fetcher, reporter);
        collector.collect(&self.config.listing_url()).await
    }

    /// Collect channels, merge them into the template and write the output
    ///
    /// Nothing is written when no channel was collected or when the
    /// template can't be loaded; both are reported and end the run normally.
    ///
    /// # Errors
    /// Only a failure to write the output document is returned
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> livescrape_core::Result<()> {
    /// use livescrape_core::{LiveScraper, RandomIds, TracingReporter};
    /// let scraper = LiveScraper::new()?;
    /// let outcome = scraper.run(&TracingReporter, &RandomIds).await?;
    /// println!("{:?}", outcome);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<R: Reporter, I: IdSource + ?Sized>(
        &self,
        reporter: &R,
        ids: &I,
    ) -> Result<RunOutcome> {
        let records = self.collect(reporter).await;

        if records.is_empty() {
            reporter.report(ScrapeEvent::NothingToSave);
            return Ok(RunOutcome::NothingToSave);
        }

        let template_path = &self.config.template_path;
        let document = match load_template(template_path)
            .and_then(|template| build_playlist(&records, &template, ids))
        {
            Ok(document) => document,
            Err(e) => {
                reporter.report(ScrapeEvent::TemplateUnavailable {
                    path: template_path.clone(),
                    error: e.to_string(),
                });
                return Ok(RunOutcome::TemplateUnavailable);
            }
        };

        let output_path = &self.config.output_path;
        write_document(output_path, &document)?;

        reporter.report(ScrapeEvent::DocumentWritten {
            path: output_path.clone(),
            channels: records.len(),
        });

        Ok(RunOutcome::Written {
            path: output_path.clone(),
            channels: records.len(),
        })
    }
}
