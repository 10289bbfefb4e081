pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::letter::handlers as letter;
use crate::scoring::handlers as scoring;
use crate::session::handlers as session;
use crate::state::AppState;
use crate::tracker::handlers as tracker;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless derivations
        .route("/api/v1/samples", get(scoring::handle_samples))
        .route("/api/v1/score", post(scoring::handle_score))
        .route("/api/v1/match", post(scoring::handle_match))
        .route("/api/v1/cover-letter", post(letter::handle_cover_letter))
        // Session
        .route(
            "/api/v1/session",
            get(session::handle_get_session).patch(session::handle_update_session),
        )
        .route("/api/v1/session/demo", post(session::handle_load_demo))
        .route(
            "/api/v1/session/sample-cv",
            post(session::handle_load_sample_cv),
        )
        .route(
            "/api/v1/session/sample-job",
            post(session::handle_load_sample_job),
        )
        .route("/api/v1/session/quick-fix", post(session::handle_quick_fix))
        .route("/api/v1/session/clear", post(session::handle_clear))
        // Tracker
        .route(
            "/api/v1/tracker",
            get(tracker::handle_list).post(tracker::handle_add),
        )
        .route(
            "/api/v1/tracker/from-match",
            post(tracker::handle_save_from_match),
        )
        .route(
            "/api/v1/tracker/:id/status",
            patch(tracker::handle_set_status),
        )
        .route("/api/v1/tracker/:id", delete(tracker::handle_remove))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::scoring::issues::CannedIssues;

    fn test_state() -> AppState {
        AppState::new(&Config::default(), Arc::new(CannedIssues))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_score_empty_inputs() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::POST, "/api/v1/score", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overall"], 72);
        assert_eq!(body["band"], "Good");
        assert_eq!(body["subs"].as_array().unwrap().len(), 5);
        assert_eq!(body["issues"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_match_without_job_is_null() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/match",
            Some(json!({ "cv_text": "commissioning" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["job_match"].is_null());
    }

    #[tokio::test]
    async fn test_match_with_job() {
        let app = build_router(test_state());
        let (_, body) = send(
            &app,
            Method::POST,
            "/api/v1/match",
            Some(json!({ "cv_text": "Led MEP commissioning", "job_text": "Senior PM" })),
        )
        .await;
        assert_eq!(body["job_match"]["pct"], 60);
        assert_eq!(body["job_match"]["found"], json!(["commissioning", "MEP"]));
        assert_eq!(body["job_match"]["missing"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_cover_letter_unknown_tone_is_professional() {
        let app = build_router(test_state());
        let (_, odd) = send(
            &app,
            Method::POST,
            "/api/v1/cover-letter",
            Some(json!({ "job_text": "Senior PM", "tone": "Sarcastic" })),
        )
        .await;
        let (_, professional) = send(
            &app,
            Method::POST,
            "/api/v1/cover-letter",
            Some(json!({ "job_text": "Senior PM", "tone": "Professional" })),
        )
        .await;
        assert_eq!(odd, professional);
        assert_eq!(odd["kind"], "draft");
    }

    #[tokio::test]
    async fn test_cover_letter_null_tone_is_professional() {
        let app = build_router(test_state());
        let (status, null_tone) = send(
            &app,
            Method::POST,
            "/api/v1/cover-letter",
            Some(json!({ "job_text": "Senior PM", "tone": null })),
        )
        .await;
        let (_, professional) = send(
            &app,
            Method::POST,
            "/api/v1/cover-letter",
            Some(json!({ "job_text": "Senior PM", "tone": "Professional" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(null_tone, professional);
    }

    #[tokio::test]
    async fn test_load_demo_without_body() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::POST, "/api/v1/session/demo", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cv_text"], crate::samples::SAMPLE_CV);
        assert_eq!(body["job_text"], "");
        assert!(body["dashboard"]["job_match"].is_null());
    }

    #[tokio::test]
    async fn test_samples_endpoint_lists_tones() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/api/v1/samples", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tones"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_session_flow() {
        let app = build_router(test_state());
        let (_, body) = send(&app, Method::GET, "/api/v1/session", None).await;
        assert!(body["dashboard"]["job_match"].is_null());
        assert_eq!(body["dashboard"]["cover_letter"]["kind"], "placeholder");

        let (_, body) = send(
            &app,
            Method::POST,
            "/api/v1/session/demo",
            Some(json!({ "with_job": true })),
        )
        .await;
        assert_eq!(body["dashboard"]["job_match"]["pct"], 40);

        let (_, body) = send(&app, Method::POST, "/api/v1/session/quick-fix", None).await;
        assert_eq!(body["applied"], true);
        assert_eq!(body["session"]["dashboard"]["job_match"]["pct"], 92);

        let (_, body) = send(&app, Method::POST, "/api/v1/session/quick-fix", None).await;
        assert_eq!(body["applied"], false);

        let (_, body) = send(
            &app,
            Method::PATCH,
            "/api/v1/session",
            Some(json!({ "tone": "Concise" })),
        )
        .await;
        assert_eq!(body["tone"], "Concise");
        assert_eq!(body["dashboard"]["cover_letter"]["tone"], "Concise");

        let (_, body) = send(&app, Method::POST, "/api/v1/session/clear", None).await;
        assert_eq!(body["cv_text"], "");
        assert_eq!(body["dashboard"]["score"]["overall"], 72);
    }

    #[tokio::test]
    async fn test_tracker_lifecycle() {
        let app = build_router(test_state());
        let (_, rows) = send(&app, Method::GET, "/api/v1/tracker", None).await;
        assert_eq!(rows.as_array().unwrap().len(), 2);

        let (status, row) = send(
            &app,
            Method::POST,
            "/api/v1/tracker",
            Some(json!({ "title": "Commissioning Lead" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(row["company"], "Company");
        assert_eq!(row["status"], "Saved");
        assert_eq!(row["score_snapshot"], 72);
        let id = row["id"].as_str().unwrap().to_string();

        let (status, row) = send(
            &app,
            Method::PATCH,
            &format!("/api/v1/tracker/{id}/status"),
            Some(json!({ "status": "Interview" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(row["status"], "Interview");
        assert_eq!(row["updated"], "Today");

        let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/tracker/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, rows) = send(&app, Method::GET, "/api/v1/tracker", None).await;
        assert_eq!(rows.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unseeded_tracker_starts_empty() {
        let config = Config {
            seed_tracker: false,
            ..Config::default()
        };
        let app = build_router(AppState::new(&config, Arc::new(CannedIssues)));
        let (status, rows) = send(&app, Method::GET, "/api/v1/tracker", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(rows, json!([]));
    }

    #[tokio::test]
    async fn test_tracker_unknown_id_is_404() {
        let app = build_router(test_state());
        let stranger = Uuid::new_v4();
        let (status, body) = send(
            &app,
            Method::PATCH,
            &format!("/api/v1/tracker/{stranger}/status"),
            Some(json!({ "status": "Offer" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/tracker/{stranger}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_blank_title_rejected() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/tracker",
            Some(json!({ "title": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_save_from_match_requires_job() {
        let app = build_router(test_state());
        let (status, _) = send(&app, Method::POST, "/api/v1/tracker/from-match", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        send(&app, Method::POST, "/api/v1/session/sample-job", None).await;
        let (status, row) = send(&app, Method::POST, "/api/v1/tracker/from-match", None).await;
        assert_eq!(status, StatusCode::CREATED);
        // Empty CV with a job description: 72 + 6.
        assert_eq!(row["score_snapshot"], 78);
        assert_eq!(row["company"], "[Company]");
    }
}
