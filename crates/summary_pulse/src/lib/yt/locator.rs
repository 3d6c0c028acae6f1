use std::ops::Deref;

use crate::{
    parser::{select_caption_track, vtt_url, YtHtmlDocument},
    yt::{fetcher::http_client, CaptionLocator},
};

/// Locates caption tracks by reading the player response embedded in a video's watch page
pub struct WatchPageLocator {
    client: reqwest::Client,
    base_url: String,
}

impl Deref for WatchPageLocator {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl WatchPageLocator {
    const WATCH_URL: &str = "https://www.youtube.com/watch";

    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            client: http_client()?,
            base_url: Self::WATCH_URL.into(),
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn fetch_watch_page(&self, video_id: &str) -> anyhow::Result<YtHtmlDocument> {
        let resp = self
            .get(&self.base_url)
            .query(&[("v", video_id)])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.text().await?.into())
    }
}

impl CaptionLocator for WatchPageLocator {
    #[tracing::instrument(skip(self))]
    async fn locate(&self, video_id: &str) -> anyhow::Result<Option<String>> {
        let doc = self
            .fetch_watch_page(video_id)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to load watch page"))?;

        let tracks = doc.caption_tracks()?;
        tracing::debug!(count = tracks.len(), "Found caption tracks");

        Ok(select_caption_track(&tracks).map(|track| vtt_url(&track.base_url)))
    }
}
