use crate::config::ScraperSettings;
use crate::http::RateLimiter;
use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use std::time::Duration;

/// HTTP client with built-in rate limiting
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: RateLimiter,
}

impl RateLimitedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        let rate_limiter = RateLimiter::new(rate_limit_ms);

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    pub fn from_settings(settings: &ScraperSettings) -> Result<Self> {
        Self::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )
    }

    pub fn get(&mut self, url: &str) -> Result<Response> {
        self.rate_limiter.wait();
        self.send_get_request(url)
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    fn send_get_request(&self, url: &str) -> Result<Response> {
        self.client
            .get(url)
            .send()
            .context("Failed to send GET request")
    }
}
