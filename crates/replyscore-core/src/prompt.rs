//! Prompt construction for reply evaluation.

use crate::record::TicketRecord;

/// Render the evaluation prompt for one ticket/reply pair.
///
/// Pure and deterministic: the same record always produces the same prompt,
/// with the ticket and reply embedded verbatim. The wording is an interface
/// contract with the model; it names both scoring dimensions and demands a
/// single JSON object matching the evaluation schema, so changes here must
/// stay in step with spec/evaluation.schema.json.
pub fn build_prompt(record: &TicketRecord) -> String {
    format!(
        r#"Evaluate the following customer service response:

Customer ticket: {ticket}
Response: {reply}

Please evaluate two aspects:
1. Content (relevance, correctness, completeness) - Rate from 1 to 5
2. Format (clarity, structure, grammar) - Rate from 1 to 5

Respond in JSON format with exactly these fields:
{{
    "content_score": <number from 1-5>,
    "content_explanation": "<explanation between 10 and 200 characters>",
    "format_score": <number from 1-5>,
    "format_explanation": "<explanation between 10 and 200 characters>"
}}

Explanations should be concise but informative."#,
        ticket = record.ticket(),
        reply = record.reply(),
    )
}
