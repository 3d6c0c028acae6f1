use std::{ops::Deref, time::Duration};

use anyhow::Context;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};

use crate::yt::{CaptionFetcher, FetchResponse};

pub const USER_AGENT: &str = concat!("summary-pulse/", env!("CARGO_PKG_VERSION"));
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Base HTTP client shared by the caption fetcher and the watch page locator
pub fn http_client() -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build http client")
}

pub struct HttpFetcher(ClientWithMiddleware);

impl Deref for HttpFetcher {
    type Target = ClientWithMiddleware;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl HttpFetcher {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_retries(0)
    }

    /// Retries transient failures (connect errors, 5xx, 429) with exponential backoff
    pub fn with_retries(max_retries: u32) -> anyhow::Result<Self> {
        let mut builder = ClientBuilder::new(http_client()?);

        if max_retries > 0 {
            let policy = ExponentialBackoff::builder().build_with_max_retries(max_retries);
            builder = builder.with(RetryTransientMiddleware::new_with_policy(policy));
        }

        Ok(HttpFetcher(builder.build()))
    }
}

impl CaptionFetcher for HttpFetcher {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, url: &str) -> anyhow::Result<FetchResponse> {
        let resp = self
            .get(url)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))
            .context("Failed to fetch caption resource")?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .context("Failed to read caption resource body")?;

        Ok(FetchResponse { status, body })
    }
}
