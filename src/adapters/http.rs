use crate::domain::model::{FetchFailure, FetchedPage};
use crate::domain::ports::PageFetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_USER_AGENT: &str = concat!("lead-scorer/", env!("CARGO_PKG_VERSION"));

/// Production page fetcher. One GET per call, bounded by the client timeout, no retries.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &Url) -> std::result::Result<FetchedPage, FetchFailure> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        tracing::debug!("{} answered {}", url, status);

        let body = response
            .text()
            .await
            .map_err(|e| match classify(e) {
                FetchFailure::Transport(message) => FetchFailure::Body(message),
                other => other,
            })?;

        Ok(FetchedPage { status, body })
    }
}

fn classify(error: reqwest::Error) -> FetchFailure {
    if error.is_timeout() {
        FetchFailure::Timeout
    } else if error.is_connect() {
        FetchFailure::Connect(error.to_string())
    } else {
        FetchFailure::Transport(error.to_string())
    }
}
