use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::info;

pub const JOBS_LIST_URL: &str = "https://vacancymail.co.zw/jobs/";

// Browser-like User-Agent; the site rejects obvious bot clients.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the listings page.
pub struct Fetcher {
    client: reqwest::Client,
    url: String,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        Self::with_url(JOBS_LIST_URL)
    }

    pub fn with_url(url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Fetch the raw HTML of the listings page. Non-2xx statuses are errors.
    pub async fn fetch_listings(&self) -> Result<String> {
        info!("Opening site and fetching job listings: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("HTTP {} for {}", status, self.url);
        }

        response
            .text()
            .await
            .context("Failed to read response body")
    }
}
