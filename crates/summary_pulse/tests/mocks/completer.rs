use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use summary_pulse::{Completer, ModelConfig};

#[derive(Clone)]
pub struct MockCompleter {
    pub response: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
    pub delay: Option<Duration>,
}

impl MockCompleter {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            delay: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }

    pub fn slow(response: &str, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(response)
        }
    }
}

impl Completer for MockCompleter {
    type Error = anyhow::Error;

    async fn complete(
        &self,
        _config: &ModelConfig,
        _system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(user_prompt.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.response.clone())
    }
}
