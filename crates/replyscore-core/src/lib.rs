//! # replyscore-core
//!
//! Deterministic evaluation pipeline for customer-service ticket replies.
//!
//! This crate owns every stage that does not require a model call:
//! - validating input ticket/reply records,
//! - rendering the evaluation prompt,
//! - interpreting and schema-checking raw model responses,
//! - assembling the final report and its `;`-delimited CSV form.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: same inputs always produce the same outputs
//! 2. **No model calls**: the completion boundary lives in `replyscore-runtime`
//! 3. **Validated construction**: a [`TicketRecord`] or [`ModelEvaluation`]
//!    cannot exist without satisfying its invariants
//! 4. **Complete reports**: sentinel rows stand in for failures, so a report
//!    always carries one row per input record, in input order
//!
//! ## Example
//!
//! ```rust,ignore
//! use replyscore_core::{build_prompt, interpret_response, TicketRecord, TicketEvaluation};
//!
//! let record = TicketRecord::new("My order is late", "It ships tomorrow")?;
//! let prompt = build_prompt(&record);
//! // ... send prompt across the model boundary ...
//! let row = match interpret_response(&raw_model_output) {
//!     Ok(evaluation) => TicketEvaluation::scored(&record, evaluation),
//!     Err(e) => TicketEvaluation::failed(&record, e),
//! };
//! ```

pub mod evaluation;
pub mod interpret;
pub mod prompt;
pub mod record;
pub mod report;

// Re-export main types at crate root
pub use evaluation::{ModelEvaluation, TicketEvaluation, SENTINEL_SCORE};
pub use interpret::{interpret_response, InterpretError};
pub use prompt::build_prompt;
pub use record::{RecordError, TicketRecord};
pub use report::{read_records, EvaluationReport, ReportError, DELIMITER, OUTPUT_FILENAME};
