//! Run configuration
//!
//! Every run uses the same fixed site and file locations; `Default` carries them.

use std::path::PathBuf;
use std::time::Duration;

pub const SITE_ORIGIN: &str = "https://hoadaotv.org";
pub const LISTING_PATH: &str = "/soccer";
pub const FALLBACK_PATH: &str = "/havre-athletic-club-vs-paris-saint-germain-2397996";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for a single scrape-and-build run
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Scheme and host of the source site (default: "https://hoadaotv.org")
    pub site_origin: String,
    /// Path of the listing page (default: "/soccer")
    pub listing_path: String,
    /// Detail page always attempted, even when the listing doesn't link it
    pub fallback_path: String,
    /// Template document merged into (default: "template.json")
    pub template_path: PathBuf,
    /// Output document, overwritten on success (default: "channels.json")
    pub output_path: PathBuf,
    /// Browser-like User-Agent sent with every request
    pub user_agent: String,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

impl ScrapeConfig {
    /// Full URL of the listing page
    pub fn listing_url(&self) -> String {
        format!("{}{}", self.site_origin, self.listing_path)
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            site_origin: SITE_ORIGIN.to_string(),
            listing_path: LISTING_PATH.to_string(),
            fallback_path: FALLBACK_PATH.to_string(),
            template_path: PathBuf::from("template.json"),
            output_path: PathBuf::from("channels.json"),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}
