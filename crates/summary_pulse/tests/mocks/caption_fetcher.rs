use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use summary_pulse::yt::{CaptionFetcher, FetchResponse};

#[derive(Clone, Default)]
pub struct MockCaptionFetcher {
    pub responses: HashMap<String, FetchResponse>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockCaptionFetcher {
    pub fn with_body(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            FetchResponse {
                status: 200,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(
            url.to_string(),
            FetchResponse {
                status,
                body: String::new(),
            },
        );
        self
    }
}

impl CaptionFetcher for MockCaptionFetcher {
    async fn fetch(&self, url: &str) -> anyhow::Result<FetchResponse> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("connection refused: {}", url))
    }
}
