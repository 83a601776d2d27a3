//! Channel collection
//!
//! Drives listing discovery, detail page fetching and stream extraction.
//! Pages are fetched strictly one after another; a failure on one detail
//! page only drops that candidate.

use crate::client::PageFetcher;
use crate::config::ScrapeConfig;
use crate::parser::{parse_stream_links, scan_listing};
use crate::report::{Reporter, ScrapeEvent};
use crate::types::ChannelRecord;
use crate::url::{derive_label, resolve_detail_url};

/// Collects channel records from the listing page and its detail pages
pub struct ChannelCollector<F, R> {
    fetcher: F,
    reporter: R,
    site_origin: String,
    fallback_path: String,
}

impl<F: PageFetcher, R: Reporter> ChannelCollector<F, R> {
    /// Create a collector for the site described by `config`
    pub fn new(config: &ScrapeConfig, fetcher: F, reporter: R) -> Self {
        Self {
            fetcher,
            reporter,
            site_origin: config.site_origin.clone(),
            fallback_path: config.fallback_path.clone(),
        }
    }

    /// Visit every candidate on the listing page and keep those with streams
    ///
    /// # Arguments
    /// * `listing_url` - Full URL of the listing page
    ///
    /// # Returns
    /// Records in candidate order, possibly empty. Never fails: a listing
    /// fetch error yields an empty list, detail errors drop one candidate.
    pub async fn collect(&self, listing_url: &str) -> Vec<ChannelRecord> {
        self.reporter.report(ScrapeEvent::ListingFetchStarted {
            url: listing_url.to_string(),
        });

        let html = match self.fetcher.fetch(listing_url).await {
            Ok(html) => html,
            Err(e) => {
                self.reporter.report(ScrapeEvent::ListingFetchFailed {
                    url: listing_url.to_string(),
                    error: e.to_string(),
                });
                return Vec::new();
            }
        };

        let scan = scan_listing(&html, &self.site_origin, &self.fallback_path);
        self.reporter.report(ScrapeEvent::WatchButtonsFound {
            count: scan.watch_buttons,
        });

        let mut records = Vec::new();
        for link in &scan.links {
            if let Some(record) = self.collect_link(link).await {
                records.push(record);
            }
        }

        if records.is_empty() {
            self.reporter.report(ScrapeEvent::NoChannelsFound);
        }
        self.reporter.report(ScrapeEvent::CollectionFinished {
            channels: records.len(),
        });

        records
    }

    /// Fetch one detail page and turn it into a record if it has streams
    async fn collect_link(&self, link: &str) -> Option<ChannelRecord> {
        let url = resolve_detail_url(&self.site_origin, link);
        let label = derive_label(link);

        self.reporter.report(ScrapeEvent::ProcessingLink {
            label: label.clone(),
        });

        let html = match self.fetcher.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                self.reporter.report(ScrapeEvent::DetailFetchFailed {
                    url,
                    error: e.to_string(),
                });
                return None;
            }
        };

        match parse_stream_links(&html) {
            Ok(Some(stream_links)) => {
                self.reporter.report(ScrapeEvent::StreamsFound {
                    label: label.clone(),
                });
                Some(ChannelRecord {
                    label,
                    link: url,
                    stream_links,
                })
            }
            // Event not live yet
            Ok(None) => None,
            Err(e) => {
                self.reporter.report(ScrapeEvent::MalformedStreamData {
                    url,
                    error: e.to_string(),
                });
                None
            }
        }
    }
}
