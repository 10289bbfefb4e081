//! Axum route handlers for the job tracker.
//!
//! Rows live inside the session; every handler goes through its lock.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::tracker::{JobStatus, NewJob, TrackedJob};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusChange {
    pub status: JobStatus,
}

/// GET /api/v1/tracker
pub async fn handle_list(State(state): State<AppState>) -> Json<Vec<TrackedJob>> {
    let session = state.session.read().await;
    Json(session.tracker.rows().to_vec())
}

/// POST /api/v1/tracker
///
/// Adds a row with the current session score as its snapshot.
pub async fn handle_add(
    State(state): State<AppState>,
    Json(job): Json<NewJob>,
) -> Result<(StatusCode, Json<TrackedJob>), AppError> {
    for (field, value) in [("title", &job.title), ("company", &job.company)] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(AppError::Validation(format!("{field} cannot be blank")));
        }
    }

    let mut session = state.session.write().await;
    let row = session.add_to_tracker(job, state.issue_source.as_ref());
    Ok((StatusCode::CREATED, Json(row)))
}

/// POST /api/v1/tracker/from-match
///
/// Saves the matched role. Fails when the session has no job description.
pub async fn handle_save_from_match(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<TrackedJob>), AppError> {
    let mut session = state.session.write().await;
    let row = session
        .save_match_to_tracker(state.issue_source.as_ref())
        .ok_or_else(|| {
            AppError::UnprocessableEntity(
                "No job match to save: paste a job description first".to_string(),
            )
        })?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PATCH /api/v1/tracker/:id/status
pub async fn handle_set_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(change): Json<StatusChange>,
) -> Result<Json<TrackedJob>, AppError> {
    let mut session = state.session.write().await;
    if !session.tracker.set_status(id, change.status) {
        return Err(AppError::NotFound(format!("Tracked job {id} not found")));
    }
    session
        .tracker
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Tracked job {id} not found")))
}

/// DELETE /api/v1/tracker/:id
pub async fn handle_remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut session = state.session.write().await;
    if !session.tracker.remove(id) {
        return Err(AppError::NotFound(format!("Tracked job {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
