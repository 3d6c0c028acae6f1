use std::sync::{Arc, Mutex};
use summary_pulse::yt::CaptionLocator;

#[derive(Clone)]
pub struct MockCaptionLocator {
    pub caption_url: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockCaptionLocator {
    pub fn new(caption_url: &str) -> Self {
        Self {
            caption_url: Some(caption_url.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn without_captions() -> Self {
        Self {
            caption_url: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            caption_url: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl CaptionLocator for MockCaptionLocator {
    async fn locate(&self, video_id: &str) -> anyhow::Result<Option<String>> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.caption_url.clone())
    }
}
