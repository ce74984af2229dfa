//! Batch evaluator: drives validated records through the model boundary.
//!
//! Construction is the fail-fast boundary: every input row is validated
//! before the first model call. Processing is the isolation boundary: a
//! failure on one record becomes a sentinel row and the batch continues.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use replyscore_core::{
    build_prompt, interpret_response, EvaluationReport, InterpretError, ModelEvaluation,
    ReportError, TicketEvaluation, TicketRecord,
};

use crate::config::EvaluatorConfig;
use crate::providers::{CompletionClient, CompletionConfig, OpenAiClient, ProviderError};

/// Why a single record's evaluation failed.
///
/// These are the only failures the batch isolates; anything earlier
/// (malformed input, missing configuration) aborts the run before any
/// model call.
#[derive(Error, Debug)]
pub enum EvaluationFailure {
    #[error("Model call failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("{0}")]
    Interpret(#[from] InterpretError),
}

/// Sequential batch evaluator over validated ticket records.
pub struct TicketEvaluator {
    client: Arc<dyn CompletionClient>,
    completion: CompletionConfig,
    records: Vec<TicketRecord>,
}

impl TicketEvaluator {
    /// Create an evaluator over already-validated records.
    pub fn new(config: EvaluatorConfig, records: Vec<TicketRecord>) -> Self {
        let completion = config.completion_config();
        let client = OpenAiClient::with_credential(config.credential);
        Self {
            client: Arc::new(client),
            completion,
            records,
        }
    }

    /// Load and validate an input table, then build the evaluator.
    ///
    /// Every row passes record validation here; a single malformed row fails
    /// construction and no model call is made.
    pub fn from_csv_path(
        config: EvaluatorConfig,
        path: impl AsRef<Path>,
    ) -> Result<Self, ReportError> {
        let records = replyscore_core::read_records(path)?;
        Ok(Self::new(config, records))
    }

    /// Create an evaluator with an injected completion client.
    pub fn with_client(
        client: Arc<dyn CompletionClient>,
        completion: CompletionConfig,
        records: Vec<TicketRecord>,
    ) -> Self {
        Self {
            client,
            completion,
            records,
        }
    }

    /// The validated records, in input order.
    pub fn records(&self) -> &[TicketRecord] {
        &self.records
    }

    /// Evaluate one record through the model boundary.
    async fn evaluate_record(
        &self,
        record: &TicketRecord,
    ) -> Result<ModelEvaluation, EvaluationFailure> {
        let prompt = build_prompt(record);
        let response = self.client.complete(&prompt, &self.completion).await?;
        let evaluation = interpret_response(&response.content)?;
        Ok(evaluation)
    }

    /// Evaluate every record, in input order, isolating per-record failures.
    ///
    /// The returned report always holds one row per record. Failed records
    /// keep their place as sentinel rows and are logged, never propagated.
    pub async fn process_all(&self) -> EvaluationReport {
        tracing::info!(
            records = self.records.len(),
            model = %self.completion.model,
            provider = self.client.name(),
            "Starting batch evaluation"
        );

        let mut report = EvaluationReport::with_capacity(self.records.len());

        for (index, record) in self.records.iter().enumerate() {
            let row = match self.evaluate_record(record).await {
                Ok(evaluation) => TicketEvaluation::scored(record, evaluation),
                Err(failure) => {
                    tracing::warn!(
                        ticket = index + 1,
                        error = %failure,
                        "Ticket evaluation failed"
                    );
                    TicketEvaluation::failed(record, failure)
                }
            };
            report.push(row);
        }

        tracing::info!(
            records = report.len(),
            failures = report.failure_count(),
            "Batch evaluation complete"
        );

        report
    }
}
