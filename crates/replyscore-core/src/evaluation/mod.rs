//! Evaluation types: validated model judgments and final report rows.
//!
//! [`ModelEvaluation`] is the transient, schema-checked scoring object the
//! model returns for one ticket/reply pair. [`TicketEvaluation`] is one row
//! of the final report: either a genuine judgment (scores 1-5) or an error
//! sentinel (score 0 with the diagnostic duplicated into both explanation
//! fields).

pub(crate) mod schema;

use serde::{Deserialize, Serialize};

use crate::record::TicketRecord;

/// Reserved score meaning "evaluation failed" in an output row.
///
/// Genuine model judgments are always 1-5; downstream consumers rely on 0
/// to filter out failures.
pub const SENTINEL_SCORE: u8 = 0;

/// A validated model judgment of one reply.
///
/// Values of this type only come out of [`crate::interpret_response`], so
/// both scores are within 1..=5 and both explanations within 10..=200
/// characters whenever one exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelEvaluation {
    /// Relevance, correctness and completeness of the reply
    pub content_score: u8,

    /// Justification for the content score
    pub content_explanation: String,

    /// Clarity, structure and grammar of the reply
    pub format_score: u8,

    /// Justification for the format score
    pub format_explanation: String,
}

/// One row of the final evaluation report.
///
/// Immutable once built; construct with [`TicketEvaluation::scored`] or
/// [`TicketEvaluation::failed`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketEvaluation {
    /// Original ticket text
    pub ticket: String,

    /// The reply that was evaluated
    pub reply: String,

    /// 1-5 judgment, or [`SENTINEL_SCORE`] if evaluation failed
    pub content_score: u8,

    pub content_explanation: String,

    /// 1-5 judgment, or [`SENTINEL_SCORE`] if evaluation failed
    pub format_score: u8,

    pub format_explanation: String,
}

impl TicketEvaluation {
    /// Build a row from a successful model judgment.
    pub fn scored(record: &TicketRecord, evaluation: ModelEvaluation) -> Self {
        Self {
            ticket: record.ticket().to_string(),
            reply: record.reply().to_string(),
            content_score: evaluation.content_score,
            content_explanation: evaluation.content_explanation,
            format_score: evaluation.format_score,
            format_explanation: evaluation.format_explanation,
        }
    }

    /// Build a sentinel row for a record whose evaluation failed.
    ///
    /// Both scores become [`SENTINEL_SCORE`] and both explanation fields
    /// carry the same "Error: ..." diagnostic, so the failure is visible in
    /// the report no matter which column a consumer reads.
    pub fn failed(record: &TicketRecord, diagnostic: impl std::fmt::Display) -> Self {
        let message = format!("Error: {}", diagnostic);
        Self {
            ticket: record.ticket().to_string(),
            reply: record.reply().to_string(),
            content_score: SENTINEL_SCORE,
            content_explanation: message.clone(),
            format_score: SENTINEL_SCORE,
            format_explanation: message,
        }
    }

    /// Whether this row is an error sentinel rather than a genuine judgment.
    pub fn is_failure(&self) -> bool {
        self.content_score == SENTINEL_SCORE
    }
}
