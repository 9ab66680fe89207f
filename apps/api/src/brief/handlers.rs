//! Axum route handler for the redesign brief API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::brief::generator::{generate_brief, RedesignInput};
use crate::errors::{AppError, AppJson};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BriefResponse {
    pub success: bool,
    pub brief: String,
}

/// POST /api/brief
///
/// Requires `businessDescription` and `mainGoal`; everything else is
/// optional and placeholder-filled at prompt-build time.
pub async fn handle_generate_brief(
    State(state): State<AppState>,
    AppJson(input): AppJson<RedesignInput>,
) -> Result<Json<BriefResponse>, AppError> {
    validate_input(&input)?;

    let brief = generate_brief(state.invoker.as_ref(), &input)
        .await
        .map_err(|e| AppError::upstream("Failed to generate brief", e))?;

    Ok(Json(BriefResponse {
        success: true,
        brief,
    }))
}

fn validate_input(input: &RedesignInput) -> Result<(), AppError> {
    let mut missing = Vec::new();
    if input.business_description.is_empty() {
        missing.push("businessDescription");
    }
    if input.main_goal.is_empty() {
        missing.push("mainGoal");
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
