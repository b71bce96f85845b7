//! Stats document served over HTTP (the scraper's published JSON).

use super::{parse_stats_document, StatsSource};
use crate::engine::stats::StatsTable;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("cfb-predictor/", env!("CARGO_PKG_VERSION"));

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

pub struct HttpStatsSource {
    client: Client,
    url: String,
    request_timeout: Duration,
    max_retries: u32,
}

/// Failure of a single request. Only transport errors and 5xx are worth
/// another attempt.
enum FetchError {
    Retryable(anyhow::Error),
    Fatal(anyhow::Error),
}

impl HttpStatsSource {
    pub fn new(url: &str, request_timeout_ms: u64) -> Self {
        Self {
            client: Client::new(),
            url: url.trim().to_string(),
            request_timeout: Duration::from_millis(request_timeout_ms),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    async fn fetch_once(&self) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(&self.url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(self.request_timeout)
            .send()
            .await
            .with_context(|| format!("stats request to {} failed", self.url))
            .map_err(FetchError::Retryable)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let err = anyhow::anyhow!("stats source {} returned {}: {}", self.url, status, body);
            return Err(if status.is_server_error() {
                FetchError::Retryable(err)
            } else {
                FetchError::Fatal(err)
            });
        }

        resp.text()
            .await
            .context("failed to read stats response body")
            .map_err(FetchError::Retryable)
    }
}

#[async_trait]
impl StatsSource for HttpStatsSource {
    async fn fetch_table(&self) -> Result<StatsTable> {
        let mut last_err = None;
        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                tokio::time::sleep(Duration::from_millis(500 * attempt as u64)).await;
            }
            match self.fetch_once().await {
                Ok(body) => {
                    // A bad document will not improve on retry.
                    let table = parse_stats_document(&body, &self.url)?;
                    tracing::info!(url = %self.url, teams = table.len(), "loaded stats over http");
                    return Ok(table);
                }
                Err(FetchError::Fatal(e)) => return Err(e),
                Err(FetchError::Retryable(e)) => {
                    tracing::warn!(attempt, url = %self.url, error = %e, "stats fetch failed");
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| anyhow::anyhow!("stats fetch failed: {}", self.url)))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
