use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::letter::composer::{compose_letter, CoverLetter};
use crate::letter::tone::Tone;

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    #[serde(default)]
    pub job_text: String,
    /// Missing, null, or unknown tone names are treated as Professional.
    #[serde(default)]
    pub tone: Option<Tone>,
}

/// POST /api/v1/cover-letter
pub async fn handle_cover_letter(
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetter>, AppError> {
    let tone = request.tone.unwrap_or_default();
    let letter = compose_letter(&request.job_text, tone);
    tracing::debug!(
        tone = %tone,
        draft = letter.is_draft(),
        len = letter.text().len(),
        "composed cover letter"
    );
    Ok(Json(letter))
}
