use std::future::Future;

use crate::error::ErrorKind;

/// Endpoint, credential and model used for a completion call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
}

/// A language-model completion service
pub trait Completer {
    type Error: std::fmt::Display + Send + 'static;

    fn complete(
        &self,
        config: &ModelConfig,
        system_prompt: &str,
        user_prompt: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Completion service settings as supplied by configuration; the endpoint
/// may be missing
#[derive(Debug, Clone, Default)]
pub struct LlmSettings {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub model: String,
}

impl LlmSettings {
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

    /// Resolves the settings into a usable model configuration, failing when
    /// no endpoint is set
    pub fn model_config(&self) -> Result<ModelConfig, ErrorKind> {
        let endpoint = self
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())
            .ok_or_else(|| ErrorKind::Configuration("no completion endpoint configured".into()))?;

        let model = match self.model.trim() {
            "" => Self::DEFAULT_MODEL.to_string(),
            model => model.to_string(),
        };

        Ok(ModelConfig {
            endpoint: endpoint.to_string(),
            api_key: self.api_key.clone().filter(|key| !key.is_empty()),
            model,
        })
    }
}
