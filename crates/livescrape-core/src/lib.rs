//! Live-Event Channel Scraper Core Library
//!
//! Discovers live-event pages on a listing page, recovers the stream URLs
//! embedded in each one, and merges them into a channel playlist document.
//!
//! # Overview
//!
//! A run goes through these stages, one request at a time:
//! - Listing discovery: watch-button links, deduplicated, with a fallback link
//! - Stream extraction: the `serverStreamLinks` object inlined in each detail page
//! - Playlist building: one channel per live event, merged into a template
//!
//! Failures stay local. A detail page that can't be fetched or parsed only
//! drops that event; a run with nothing collected writes nothing.
//!
//! # Example
//!
//! ```no_run
//! use livescrape_core::{LiveScraper, RandomIds, Result, RunOutcome, TracingReporter};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = LiveScraper::new()?;
//!
//!     match scraper.run(&TracingReporter, &RandomIds).await? {
//!         RunOutcome::Written { path, channels } => {
//!             println!("{} channels written to {}", channels, path.display());
//!         }
//!         outcome => println!("Nothing written: {:?}", outcome),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod collector;
mod config;
mod error;
mod id;
pub mod parser;
pub mod playlist;
mod report;
mod scraper;
mod storage;
mod types;
pub mod url;

// Re-export client types
pub use client::{HttpFetcher, PageFetcher};

// Re-export collector
pub use collector::ChannelCollector;

// Re-export configuration
pub use config::{FALLBACK_PATH, LISTING_PATH, SITE_ORIGIN, ScrapeConfig, USER_AGENT};

// Re-export error types
pub use error::{Result, ScrapeError};

// Re-export ID sources
pub use id::{IdSource, RandomIds, SequentialIds};

// Re-export parser functions
pub use parser::{ListingScan, discover_links, parse_stream_links, scan_listing};

// Re-export playlist builder
pub use playlist::{OutputChannel, build_channel, build_playlist};

// Re-export reporting
pub use report::{RecordingReporter, Reporter, ScrapeEvent, TracingReporter};

// Re-export main scraper API
pub use scraper::{LiveScraper, RunOutcome};

// Re-export storage helpers
pub use storage::{load_template, to_pretty_json, write_document};

// Re-export data types
pub use types::{ChannelRecord, QUALITY_PRECEDENCE, StreamLinkSet};

// Re-export URL helper functions for convenience
pub use url::{derive_label, normalize_link, resolve_detail_url};
