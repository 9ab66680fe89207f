//! Axum route handlers for the ticket summarization API.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::errors::{AppError, AppJson};
use crate::summarize::normalizer::TicketSummary;
use crate::summarize::summarizer::{summarize_batch, summarize_ticket, TicketRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub success: bool,
    pub data: TicketSummary,
}

#[derive(Debug, Serialize)]
pub struct SummarizeBatchResponse {
    pub success: bool,
    pub data: Vec<TicketSummary>,
}

/// POST /api/summarize
///
/// Validates the three required fields, then runs the single-ticket pipeline.
pub async fn handle_summarize(
    State(state): State<AppState>,
    AppJson(ticket): AppJson<TicketRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    validate_ticket(&ticket)?;

    let data = summarize_ticket(state.invoker.as_ref(), &ticket)
        .await
        .map_err(|e| AppError::upstream("Failed to process ticket", e))?;

    Ok(Json(SummarizeResponse {
        success: true,
        data,
    }))
}

/// POST /api/summarize-batch
///
/// Body: `{"tickets": [...]}`. The whole batch fans out concurrently and
/// fails together; per-element results come back in input order.
pub async fn handle_summarize_batch(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> Result<Json<SummarizeBatchResponse>, AppError> {
    let invalid = || {
        AppError::Validation("Invalid request: tickets must be a non-empty array".to_string())
    };

    let tickets = body
        .get("tickets")
        .and_then(Value::as_array)
        .filter(|a| !a.is_empty())
        .ok_or_else(invalid)?;

    let tickets: Vec<TicketRequest> =
        serde_json::from_value(Value::Array(tickets.clone())).map_err(|_| invalid())?;

    let data = summarize_batch(state.invoker.as_ref(), &tickets)
        .await
        .map_err(|e| AppError::upstream("Failed to process tickets", e))?;

    Ok(Json(SummarizeBatchResponse {
        success: true,
        data,
    }))
}

/// Rejects a ticket whose required fields are missing or empty, listing the
/// offending field names in their wire spelling.
fn validate_ticket(ticket: &TicketRequest) -> Result<(), AppError> {
    let mut missing = Vec::new();
    if ticket.title.is_empty() {
        missing.push("title");
    }
    if ticket.description.is_empty() {
        missing.push("description");
    }
    if ticket.customer_email.is_empty() {
        missing.push("customerEmail");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}
