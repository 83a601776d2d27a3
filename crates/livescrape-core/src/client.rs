//! HTTP page fetching
//!
//! Requests go out one at a time with a desktop browser User-Agent, because
//! the site rejects unidentified clients. There is no retry or rate limiting:
//! a failed page is simply missing from the run.

use std::future::Future;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};

/// Source of raw page bodies
///
/// The collector only needs "URL in, HTML out"; tests plug in canned pages.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send {
        (**self).fetch(url)
    }
}

/// `reqwest`-backed fetcher used for real runs
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a new fetcher with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&ScrapeConfig::default())
    }

    /// Create a new fetcher using the User-Agent and timeout from `config`
    pub fn with_config(config: &ScrapeConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .cookie_store(true)
            .default_headers(headers);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(ScrapeError::HttpError)?;

        Ok(Self { client })
    }

    /// Perform a single GET and return the body as text
    ///
    /// # Errors
    /// - `HttpError` - Network errors or an unreadable body
    /// - `RateLimited` - Server returned 429
    /// - `NotFound` - Server returned 404
    /// - `HttpStatus` - Any other non-success status
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ScrapeError::HttpError)?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ScrapeError::RateLimited);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScrapeError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(ScrapeError::HttpError)
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send {
        self.get_text(url)
    }
}
