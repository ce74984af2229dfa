//! Input record validation.

use thiserror::Error;

/// Errors that can occur when validating an input record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Field '{0}' is empty after trimming whitespace")]
    EmptyField(&'static str),
}

/// One validated customer ticket and the service reply to evaluate.
///
/// Fields are private so a record cannot exist without passing validation.
/// [`TicketRecord::new`] is the single construction point: it trims both
/// fields and rejects anything empty afterwards, so every record downstream
/// is known to be non-blank exactly once, at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    ticket: String,
    reply: String,
}

impl TicketRecord {
    /// Validate and construct a record from raw field text.
    ///
    /// Leading and trailing whitespace is trimmed from both fields. Interior
    /// whitespace, casing, and punctuation are preserved untouched.
    pub fn new(ticket: impl Into<String>, reply: impl Into<String>) -> Result<Self, RecordError> {
        let ticket = ticket.into();
        let reply = reply.into();

        let ticket = ticket.trim();
        if ticket.is_empty() {
            return Err(RecordError::EmptyField("ticket"));
        }

        let reply = reply.trim();
        if reply.is_empty() {
            return Err(RecordError::EmptyField("reply"));
        }

        Ok(Self {
            ticket: ticket.to_owned(),
            reply: reply.to_owned(),
        })
    }

    /// The customer's ticket text.
    pub fn ticket(&self) -> &str {
        &self.ticket
    }

    /// The service reply under evaluation.
    pub fn reply(&self) -> &str {
        &self.reply
    }
}
