//! Advisor configuration and completion strategy selection.

use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::completion::{CompletionProviderTrait, LiveCompletionProvider, StubCompletionProvider};
use crate::error::AiError;

/// Environment variable holding the completion API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the completion model.
pub const MODEL_ENV: &str = "PORTIFI_ADVISOR_MODEL";
/// Environment variable overriding the completion endpoint.
pub const BASE_URL_ENV: &str = "PORTIFI_ADVISOR_BASE_URL";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ASSISTANT_NAME: &str = "PortiFi Advisor";

/// Configuration for the advisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorConfig {
    /// Completion API key; the stub strategy is used when absent.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Option<String>,
    /// Persona name used in the system prompt.
    pub assistant_name: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            assistant_name: DEFAULT_ASSISTANT_NAME.to_string(),
        }
    }
}

impl AdvisorConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// Call once at startup; services receive the resulting value.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            api_key: read(API_KEY_ENV),
            model: read(MODEL_ENV).unwrap_or(defaults.model),
            base_url: read(BASE_URL_ENV),
            assistant_name: defaults.assistant_name,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Selects the completion strategy for the process lifetime.
///
/// An API key selects the live provider; without one, the stub answers.
pub fn build_completion_provider(
    config: &AdvisorConfig,
) -> Result<Arc<dyn CompletionProviderTrait>, AiError> {
    match config.api_key.as_deref() {
        Some(key) => {
            info!("Advisor using live completions with model {}", config.model);
            let provider =
                LiveCompletionProvider::new(key, &config.model, config.base_url.as_deref())?;
            Ok(Arc::new(provider))
        }
        None => {
            warn!("No completion API key configured; advisor will use canned responses");
            Ok(Arc::new(StubCompletionProvider::new()))
        }
    }
}
