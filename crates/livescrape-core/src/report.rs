//! Operator-facing progress and failure reporting
//!
//! Components never log directly; they hand [`ScrapeEvent`]s to an injected
//! [`Reporter`]. [`TracingReporter`] forwards them to `tracing`, while
//! [`RecordingReporter`] keeps them in memory so tests can assert on them.

use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{error, info, warn};

/// Something worth telling the operator about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeEvent {
    /// Listing page request is about to go out
    ListingFetchStarted { url: String },
    /// Watch buttons on the listing page, counted before filtering
    WatchButtonsFound { count: usize },
    /// Listing page could not be fetched; the run collects nothing
    ListingFetchFailed { url: String, error: String },
    /// A candidate link is being visited
    ProcessingLink { label: String },
    /// A detail page yielded stream links
    StreamsFound { label: String },
    /// A detail page could not be fetched; the candidate is dropped
    DetailFetchFailed { url: String, error: String },
    /// The embedded stream data was present but not valid JSON
    MalformedStreamData { url: String, error: String },
    /// Not a single candidate produced stream links
    NoChannelsFound,
    /// Collection pass is over
    CollectionFinished { channels: usize },
    /// Nothing was collected so no document gets written
    NothingToSave,
    /// Template could not be loaded; the build phase is skipped
    TemplateUnavailable { path: PathBuf, error: String },
    /// Output document was written
    DocumentWritten { path: PathBuf, channels: usize },
}

/// Receives report events
pub trait Reporter {
    fn report(&self, event: ScrapeEvent);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, event: ScrapeEvent) {
        (**self).report(event)
    }
}

/// Emits every event as a `tracing` record
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: ScrapeEvent) {
        match event {
            ScrapeEvent::ListingFetchStarted { url } => {
                info!(%url, "fetching listing page");
            }
            ScrapeEvent::WatchButtonsFound { count } => {
                info!(count, "found watch buttons on listing page");
            }
            ScrapeEvent::ListingFetchFailed { url, error } => {
                error!(%url, %error, "error during scraping");
            }
            ScrapeEvent::ProcessingLink { label } => {
                info!(%label, "processing link");
            }
            ScrapeEvent::StreamsFound { label } => {
                info!(%label, "found stream links");
            }
            ScrapeEvent::DetailFetchFailed { url, error } => {
                error!(%url, %error, "error scraping detail page");
            }
            ScrapeEvent::MalformedStreamData { url, error } => {
                error!(%url, %error, "stream data JSON parse error");
            }
            ScrapeEvent::NoChannelsFound => {
                warn!("no channels with stream links found");
            }
            ScrapeEvent::CollectionFinished { channels } => {
                info!(channels, "scraping finished");
            }
            ScrapeEvent::NothingToSave => {
                warn!("no data to save (matches might not have started yet)");
            }
            ScrapeEvent::TemplateUnavailable { path, error } => {
                error!(path = %path.display(), %error, "error generating JSON");
            }
            ScrapeEvent::DocumentWritten { path, channels } => {
                info!(path = %path.display(), channels, "file generated");
            }
        }
    }
}

/// Keeps events in memory, in the order they were reported
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ScrapeEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far
    pub fn events(&self) -> Vec<ScrapeEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Number of recorded events matching `predicate`
    pub fn count(&self, predicate: impl Fn(&ScrapeEvent) -> bool) -> usize {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: ScrapeEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
