//! Runtime configuration sourced from the process environment.
//!
//! The evaluator receives an explicit [`EvaluatorConfig`] instead of reading
//! the environment itself; [`EvaluatorConfig::from_env`] is the only place
//! the variables are consulted:
//!
//! - `OPENAI_API_KEY` (required): API credential for the completion endpoint
//! - `MODEL_NAME` (required): model identifier sent with every request
//! - `REPLYSCORE_HTTP_TIMEOUT` (optional): per-request timeout in humantime
//!   syntax, e.g. "45s" or "2m" (default 30s)

use std::time::Duration;
use thiserror::Error;

use crate::providers::{ApiCredential, CompletionConfig, ProviderError, OPENAI_API_KEY_ENV};

/// Environment variable naming the model identifier.
pub const MODEL_NAME_ENV: &str = "MODEL_NAME";

/// Environment variable overriding the per-request timeout.
pub const HTTP_TIMEOUT_ENV: &str = "REPLYSCORE_HTTP_TIMEOUT";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Credential(#[from] ProviderError),

    #[error("Model identifier not set: configure '{0}' environment variable")]
    MissingModel(&'static str),

    #[error("Invalid {0}: {1}")]
    InvalidTimeout(&'static str, String),
}

/// Configuration handed to the evaluator's constructor.
#[derive(Debug)]
pub struct EvaluatorConfig {
    /// API credential for the completion endpoint
    pub credential: ApiCredential,

    /// Model identifier sent with every request
    pub model: String,

    /// Per-request timeout
    pub request_timeout: Duration,
}

impl EvaluatorConfig {
    /// Build a config programmatically with the default timeout.
    pub fn new(credential: ApiCredential, model: impl Into<String>) -> Self {
        Self {
            credential,
            model: model.into(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load the configuration from the process environment.
    ///
    /// Fails before any file or network I/O when `OPENAI_API_KEY` or
    /// `MODEL_NAME` is missing or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let credential = ApiCredential::from_env(OPENAI_API_KEY_ENV, "OpenAI API key")?;
        if credential.is_empty() {
            return Err(ConfigError::Credential(ProviderError::NotConfigured(
                format!("OpenAI API key is set but empty: check '{}'", OPENAI_API_KEY_ENV),
            )));
        }

        let model = std::env::var(MODEL_NAME_ENV)
            .ok()
            .filter(|m| !m.trim().is_empty())
            .ok_or(ConfigError::MissingModel(MODEL_NAME_ENV))?;

        let request_timeout = match std::env::var(HTTP_TIMEOUT_ENV) {
            Ok(raw) => humantime::parse_duration(&raw)
                .map_err(|e| ConfigError::InvalidTimeout(HTTP_TIMEOUT_ENV, e.to_string()))?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            credential,
            model,
            request_timeout,
        })
    }

    /// Project the per-request completion settings.
    pub fn completion_config(&self) -> CompletionConfig {
        CompletionConfig {
            model: self.model.clone(),
            timeout: self.request_timeout,
            ..CompletionConfig::default()
        }
    }
}
