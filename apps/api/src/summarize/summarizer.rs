//! Ticket summarizer — single-ticket pipeline and concurrent batch map.

use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm_client::{LlmError, ModelInvoker, SUMMARY_MAX_TOKENS};
use crate::summarize::normalizer::{normalize_summary, TicketSummary};
use crate::summarize::prompts::{build_summary_prompt, SUMMARY_SYSTEM};

/// A support ticket as submitted by the form.
///
/// Every field defaults to empty so "absent" and "empty string" validate the
/// same way in the handler. Immutable once received; lives for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "customerEmail")]
    pub customer_email: String,
}

/// Runs the full pipeline for one ticket: prompt → model → normalize.
///
/// The only failure mode is the model call itself; normalization is total.
pub async fn summarize_ticket(
    invoker: &dyn ModelInvoker,
    ticket: &TicketRequest,
) -> Result<TicketSummary, LlmError> {
    let prompt = build_summary_prompt(ticket);
    let response = invoker
        .invoke(&prompt, Some(SUMMARY_SYSTEM), SUMMARY_MAX_TOKENS)
        .await?;

    // Missing text block reads as empty; normalizer handles it from there.
    let text = response.text().unwrap_or("").trim().to_string();
    debug!("Ticket '{}' summarized ({} reply chars)", ticket.title, text.len());

    Ok(normalize_summary(&text))
}

/// Summarizes every ticket concurrently — unbounded fan-out, one in-flight
/// model call per element. Results come back in input order; the first
/// failure rejects the whole batch.
pub async fn summarize_batch(
    invoker: &dyn ModelInvoker,
    tickets: &[TicketRequest],
) -> Result<Vec<TicketSummary>, LlmError> {
    try_join_all(tickets.iter().map(|t| summarize_ticket(invoker, t))).await
}
