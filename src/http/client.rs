use crate::errors::FetchError;
use crate::rate_limiter::RateLimiter;
use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// HTTP client with built-in rate limiting and a per-request timeout
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

    /// GET `url` and decode the body as JSON
    pub async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self.rate_limiter.wait().await;
        debug!("GET {}", url);

        let response = self.send_get_request(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(url, status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::unavailable(url, describe(&e)))?;

        serde_json::from_str(&text).map_err(|e| FetchError::malformed(url, e.to_string()))
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::unavailable(url, describe(&e)))
    }
}

fn describe(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else {
        error.to_string()
    }
}
