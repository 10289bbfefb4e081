//! Axum route handlers for the stateless scoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::samples::{samples, Samples};
use crate::scoring::matcher::{match_job, MatchResult};
use crate::scoring::scorer::{score_cv, ScoreResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TextPairRequest {
    #[serde(default)]
    pub cv_text: String,
    #[serde(default)]
    pub job_text: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub job_match: Option<MatchResult>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/samples
pub async fn handle_samples() -> Json<Samples> {
    Json(samples())
}

/// POST /api/v1/score
///
/// Scores a CV. The job text counts too: its presence lifts the overall score.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<TextPairRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    let result = score_cv(
        &request.cv_text,
        &request.job_text,
        state.issue_source.as_ref(),
    );
    tracing::debug!(overall = result.overall, "scored CV");
    Ok(Json(result))
}

/// POST /api/v1/match
///
/// `job_match` is null when no job text was sent.
pub async fn handle_match(
    Json(request): Json<TextPairRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let job_match = match_job(&request.cv_text, &request.job_text);
    Ok(Json(MatchResponse { job_match }))
}
