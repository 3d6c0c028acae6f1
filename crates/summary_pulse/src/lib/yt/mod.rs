pub mod fetcher;
pub mod locator;

use std::future::Future;

/// Status and body of a fetched caption resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetches caption resources and playlist segments over HTTP
pub trait CaptionFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = anyhow::Result<FetchResponse>> + Send;
}

/// Metadata enrichment: maps a video id to the URL of its caption resource
pub trait CaptionLocator {
    fn locate(&self, video_id: &str) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;
}
