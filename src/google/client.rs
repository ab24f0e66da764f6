//! HTTP client for Google result pages using wreq for TLS fingerprint emulation.

use crate::config::Config;
use crate::models::Platform;
use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::RngExt;
use std::time::Duration;
use tracing::{debug, info};
use wreq::Client;
use wreq_util::Emulation;

const GOOGLE_BASE_URL: &str = "https://www.google.com";

/// A fetched result page. Non-200 statuses are returned, not raised.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl RawPage {
    /// Returns true for a 200 response.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Source of result pages - enables mocking for tests.
#[async_trait]
pub trait SerpSource: Send + Sync {
    /// Fetches the result page for a keyword.
    ///
    /// Errors mean the request never produced a response (connection
    /// failure, timeout, unreadable body).
    async fn fetch(&self, keyword: &str, num_results: usize) -> Result<RawPage>;

    /// Returns the platform this source reads.
    fn platform(&self) -> Platform;
}

/// Google HTTP client with browser impersonation and a rotating User-Agent.
pub struct GoogleClient {
    client: Client,
    user_agents: Vec<String>,
    accept_language: String,
    base_url: Option<String>,
}

impl GoogleClient {
    /// Creates a new Google client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, None)
    }

    /// Creates a new Google client with an optional custom base URL (for testing).
    pub fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs));

        // Configure proxy if specified
        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        let user_agents = if config.user_agents.is_empty() {
            Config::default().user_agents
        } else {
            config.user_agents.clone()
        };

        Ok(Self {
            client,
            user_agents,
            accept_language: config.accept_language.clone(),
            base_url,
        })
    }

    /// Returns the base URL (custom for testing, Google for production).
    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(GOOGLE_BASE_URL)
    }

    /// Builds the search URL for a keyword.
    fn search_url(&self, keyword: &str, num_results: usize) -> String {
        format!(
            "{}/search?q={}&num={}",
            self.base_url(),
            urlencoding::encode(keyword),
            num_results
        )
    }

    /// Picks a User-Agent from the pool.
    fn pick_user_agent(&self) -> &str {
        let idx = rand::rng().random_range(0..self.user_agents.len());
        &self.user_agents[idx]
    }
}

/// Derives the `Sec-Ch-Ua-Platform` hint that matches a User-Agent.
fn platform_hint(user_agent: &str) -> &'static str {
    if user_agent.contains("Macintosh") {
        "\"macOS\""
    } else if user_agent.contains("Windows") {
        "\"Windows\""
    } else {
        "\"Linux\""
    }
}

#[async_trait]
impl SerpSource for GoogleClient {
    async fn fetch(&self, keyword: &str, num_results: usize) -> Result<RawPage> {
        let url = self.search_url(keyword, num_results);
        let user_agent = self.pick_user_agent();

        info!("Fetching: {}", url);
        debug!("User-Agent: {}", user_agent);

        let response = self
            .client
            .get(url.as_str())
            .emulation(Emulation::Chrome131)
            .header("User-Agent", user_agent)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8")
            .header("Accept-Language", self.accept_language.as_str())
            .header("Accept-Encoding", "gzip, deflate, br")
            .header("DNT", "1")
            .header("Connection", "keep-alive")
            .header("Sec-Ch-Ua-Platform", platform_hint(user_agent))
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status().as_u16();
        info!("Status code: {}", status);

        let body = if status == 200 {
            response.text().await.context("Failed to read response body")?
        } else {
            String::new()
        };

        Ok(RawPage { url, status, body })
    }

    fn platform(&self) -> Platform {
        Platform::Google
    }
}
