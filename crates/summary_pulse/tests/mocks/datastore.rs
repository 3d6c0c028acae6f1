use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use summary_datastore::{DataStore, StoredSummary};

#[derive(Clone, Default)]
pub struct MockDataStore {
    pub stored: Arc<Mutex<HashMap<String, StoredSummary>>>,
    pub lookups: Arc<Mutex<Vec<String>>>,
    pub inserted: Arc<Mutex<Vec<StoredSummary>>>,
    pub fail_with: Option<String>,
}

impl MockDataStore {
    pub fn with_summary(summary: StoredSummary) -> Self {
        let store = Self::default();
        store
            .stored
            .lock()
            .unwrap()
            .insert(summary.video_id.clone(), summary);
        store
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl DataStore for MockDataStore {
    async fn find_summary(&self, video_id: &str) -> anyhow::Result<Option<StoredSummary>> {
        self.lookups.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.stored.lock().unwrap().get(video_id).cloned())
    }

    async fn insert_summary(&self, summary: &StoredSummary) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.inserted.lock().unwrap().push(summary.clone());
        self.stored
            .lock()
            .unwrap()
            .insert(summary.video_id.clone(), summary.clone());
        Ok(())
    }
}
