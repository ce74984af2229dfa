//! # replyscore-runtime
//!
//! Model-boundary runtime for replyscore: the OpenAI-compatible completion
//! client, credential and configuration handling, and the sequential batch
//! evaluator.
//!
//! The deterministic pipeline (record validation, prompt construction,
//! response interpretation, report assembly) lives in `replyscore-core`;
//! this crate is the only place network calls happen.
//!
//! ## Example
//!
//! ```rust,ignore
//! use replyscore_core::OUTPUT_FILENAME;
//! use replyscore_runtime::{EvaluatorConfig, TicketEvaluator};
//!
//! let config = EvaluatorConfig::from_env()?;
//! let evaluator = TicketEvaluator::from_csv_path(config, "docs/tickets.csv")?;
//! let report = evaluator.process_all().await;
//! report.write_csv_file(OUTPUT_FILENAME)?;
//! ```

pub mod config;
pub mod evaluator;
pub mod providers;

// Re-export main types at crate root
pub use config::{ConfigError, EvaluatorConfig, HTTP_TIMEOUT_ENV, MODEL_NAME_ENV};
pub use evaluator::{EvaluationFailure, TicketEvaluator};
pub use providers::{
    ApiCredential, CompletionClient, CompletionConfig, CompletionResponse, CredentialSource,
    OpenAiClient, ProviderError, TokenUsage, OPENAI_API_KEY_ENV,
};
