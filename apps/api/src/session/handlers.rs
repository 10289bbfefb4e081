use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::letter::tone::Tone;
use crate::session::store::{Dashboard, Session, SessionUpdate};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub cv_text: String,
    pub job_text: String,
    pub tone: Tone,
    pub dashboard: Dashboard,
}

#[derive(Debug, Default, Deserialize)]
pub struct DemoRequest {
    #[serde(default)]
    pub with_job: bool,
}

#[derive(Debug, Serialize)]
pub struct QuickFixResponse {
    pub applied: bool,
    pub session: SessionView,
}

fn view(state: &AppState, session: &Session) -> SessionView {
    SessionView {
        cv_text: session.cv_text.clone(),
        job_text: session.job_text.clone(),
        tone: session.tone,
        dashboard: session.dashboard(state.issue_source.as_ref()),
    }
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session.read().await;
    Json(view(&state, &session))
}

/// PATCH /api/v1/session
pub async fn handle_update_session(
    State(state): State<AppState>,
    Json(update): Json<SessionUpdate>,
) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.write().await;
    session.update(update);
    Ok(Json(view(&state, &session)))
}

/// POST /api/v1/session/demo
///
/// The body is optional; without one only the sample CV is loaded.
pub async fn handle_load_demo(
    State(state): State<AppState>,
    request: Option<Json<DemoRequest>>,
) -> Result<Json<SessionView>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let mut session = state.session.write().await;
    session.load_demo(request.with_job);
    tracing::info!(with_job = request.with_job, "demo inputs loaded");
    Ok(Json(view(&state, &session)))
}

/// POST /api/v1/session/sample-cv
pub async fn handle_load_sample_cv(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.write().await;
    session.load_sample_cv();
    Json(view(&state, &session))
}

/// POST /api/v1/session/sample-job
pub async fn handle_load_sample_job(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.write().await;
    session.load_sample_job();
    Json(view(&state, &session))
}

/// POST /api/v1/session/quick-fix
///
/// Appends the role keyword block to the CV unless it is already there.
pub async fn handle_quick_fix(State(state): State<AppState>) -> Json<QuickFixResponse> {
    let mut session = state.session.write().await;
    let applied = session.apply_quick_fix();
    Json(QuickFixResponse {
        applied,
        session: view(&state, &session),
    })
}

/// POST /api/v1/session/clear
pub async fn handle_clear(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.write().await;
    session.clear();
    Json(view(&state, &session))
}
