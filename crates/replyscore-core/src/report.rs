//! Report assembly and `;`-delimited table I/O.
//!
//! The input table must carry `ticket` and `reply` columns (extra columns
//! are ignored). The output table has the fixed six-column layout of
//! [`TicketEvaluation`] and preserves input order, one row per record.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::evaluation::TicketEvaluation;
use crate::record::{RecordError, TicketRecord};

/// Field delimiter for input and output tables.
pub const DELIMITER: u8 = b';';

/// Fixed name of the output report file.
pub const OUTPUT_FILENAME: &str = "tickets_evaluated.csv";

/// Output column order, written even when the report is empty.
const HEADER: [&str; 6] = [
    "ticket",
    "reply",
    "content_score",
    "content_explanation",
    "format_score",
    "format_explanation",
];

/// Errors from reading input tables or writing reports.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to access table file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input table is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Row {row}: {source}")]
    InvalidRecord { row: usize, source: RecordError },
}

/// Raw input row before validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    ticket: String,
    reply: String,
}

/// Load and validate every record of a `;`-delimited input table.
///
/// Validation is eager: the first row that fails record validation aborts
/// the whole load, so a malformed table is rejected before any model call
/// is made. Row numbers in errors are 1-based and count data rows, not the
/// header line.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<TicketRecord>, ReportError> {
    let file = File::open(path)?;
    read_records_from(file)
}

fn read_records_from<R: Read>(reader: R) -> Result<Vec<TicketRecord>, ReportError> {
    let mut table = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_reader(reader);

    let headers = table.headers()?.clone();
    for column in ["ticket", "reply"] {
        if !headers.iter().any(|h| h == column) {
            return Err(ReportError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for (index, row) in table.deserialize::<RawRow>().enumerate() {
        let row = row?;
        let record = TicketRecord::new(row.ticket, row.reply)
            .map_err(|source| ReportError::InvalidRecord {
                row: index + 1,
                source,
            })?;
        records.push(record);
    }

    Ok(records)
}

/// Ordered collection of evaluation rows, one per input record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationReport {
    rows: Vec<TicketEvaluation>,
}

impl EvaluationReport {
    /// Create an empty report with room for `capacity` rows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    /// Append a finished row. Rows must arrive in input order.
    pub fn push(&mut self, row: TicketEvaluation) {
        self.rows.push(row);
    }

    /// All rows, in input order.
    pub fn rows(&self) -> &[TicketEvaluation] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of sentinel (failed) rows.
    pub fn failure_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_failure()).count()
    }

    /// Serialize the report as `;`-delimited CSV text.
    pub fn to_csv_string(&self) -> Result<String, ReportError> {
        let mut buffer = Vec::new();
        self.write_rows(&mut buffer)?;
        // Rows are plain UTF-8 already.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Write the report to `path` as `;`-delimited CSV.
    pub fn write_csv_file(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let file = File::create(path)?;
        self.write_rows(file)?;
        tracing::debug!(rows = self.rows.len(), "Wrote evaluation report");
        Ok(())
    }

    fn write_rows<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .from_writer(writer);

        writer.write_record(&HEADER)?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Human-readable preview of the first `limit` rows.
    ///
    /// One line per row: position, both scores (or the diagnostic for
    /// sentinel rows), and a shortened ticket excerpt.
    pub fn preview(&self, limit: usize) -> String {
        let mut out = String::new();
        for (index, row) in self.rows.iter().take(limit).enumerate() {
            if row.is_failure() {
                out.push_str(&format!(
                    "{:>3}. [failed] {} ({})\n",
                    index + 1,
                    excerpt(&row.ticket, 48),
                    excerpt(&row.content_explanation, 60),
                ));
            } else {
                out.push_str(&format!(
                    "{:>3}. [content {}/5, format {}/5] {}\n",
                    index + 1,
                    row.content_score,
                    row.format_score,
                    excerpt(&row.ticket, 48),
                ));
            }
        }
        out
    }
}

/// Shorten text to at most `max` characters, marking the cut.
fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::ModelEvaluation;

    const INPUT: &str = "ticket;reply\n\
        My order hasn't arrived;We apologize, tracking info attached\n\
        App crashes on login;Please update to version 2.1\n";

    fn sample_row() -> TicketEvaluation {
        let record =
            TicketRecord::new("My order hasn't arrived", "We apologize, tracking info attached")
                .unwrap();
        let evaluation = ModelEvaluation {
            content_score: 4,
            content_explanation: "Addresses issue, could be faster".to_string(),
            format_score: 5,
            format_explanation: "Clear and professional".to_string(),
        };
        TicketEvaluation::scored(&record, evaluation)
    }

    #[test]
    fn test_read_records_preserves_order() {
        let records = read_records_from(INPUT.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ticket(), "My order hasn't arrived");
        assert_eq!(records[0].reply(), "We apologize, tracking info attached");
        assert_eq!(records[1].ticket(), "App crashes on login");
    }

    #[test]
    fn test_read_records_trims_fields() {
        let input = "ticket;reply\n  padded ticket  ;  padded reply  \n";
        let records = read_records_from(input.as_bytes()).unwrap();
        assert_eq!(records[0].ticket(), "padded ticket");
        assert_eq!(records[0].reply(), "padded reply");
    }

    #[test]
    fn test_read_records_ignores_extra_columns() {
        let input = "id;ticket;priority;reply\n7;Slow shipping;high;We have expedited it for you\n";
        let records = read_records_from(input.as_bytes()).unwrap();
        assert_eq!(records[0].ticket(), "Slow shipping");
        assert_eq!(records[0].reply(), "We have expedited it for you");
    }

    #[test]
    fn test_missing_column_rejected() {
        let input = "ticket;note\nSomething happened;just a note\n";
        let result = read_records_from(input.as_bytes());
        assert!(matches!(result, Err(ReportError::MissingColumn("reply"))));
    }

    #[test]
    fn test_blank_field_aborts_load_with_row_number() {
        let input = "ticket;reply\nFirst ticket;First reply\n   ;Second reply\n";
        match read_records_from(input.as_bytes()) {
            Err(ReportError::InvalidRecord { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_csv_output_header_and_row() {
        let mut report = EvaluationReport::with_capacity(1);
        report.push(sample_row());

        let text = report.to_csv_string().unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ticket;reply;content_score;content_explanation;format_score;format_explanation"
        );
        assert_eq!(
            lines.next().unwrap(),
            "My order hasn't arrived;We apologize, tracking info attached;\
             4;Addresses issue, could be faster;5;Clear and professional"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_field_containing_delimiter_is_quoted() {
        let record = TicketRecord::new("Billing; urgent", "Refund issued to your card").unwrap();
        let mut report = EvaluationReport::default();
        report.push(TicketEvaluation::failed(&record, "timeout"));

        let text = report.to_csv_string().unwrap();
        assert!(text.contains("\"Billing; urgent\""));
    }

    #[test]
    fn test_empty_report_still_writes_header() {
        let report = EvaluationReport::default();
        let text = report.to_csv_string().unwrap();
        assert_eq!(
            text.trim_end(),
            "ticket;reply;content_score;content_explanation;format_score;format_explanation"
        );
    }

    #[test]
    fn test_failure_count() {
        let record = TicketRecord::new("Ticket text here", "Reply text here").unwrap();
        let mut report = EvaluationReport::default();
        report.push(sample_row());
        report.push(TicketEvaluation::failed(&record, "boom"));

        assert_eq!(report.len(), 2);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_preview_shows_scores_and_failures() {
        let record = TicketRecord::new("Very unhappy customer", "Sorry about that").unwrap();
        let mut report = EvaluationReport::default();
        report.push(sample_row());
        report.push(TicketEvaluation::failed(&record, "connection reset"));

        let preview = report.preview(5);
        assert!(preview.contains("[content 4/5, format 5/5]"));
        assert!(preview.contains("[failed]"));
        assert!(preview.contains("connection reset"));

        // Limit is honored
        assert_eq!(report.preview(1).lines().count(), 1);
    }

    #[test]
    fn test_excerpt_marks_long_text() {
        let long = "x".repeat(60);
        let shortened = excerpt(&long, 48);
        assert!(shortened.ends_with("..."));
        assert_eq!(shortened.chars().count(), 51);
        assert_eq!(excerpt("short", 48), "short");
    }
}
