//! Cover letter composer: fills a tone-specific template.
//!
//! The job description only decides whether a draft exists; its content is not
//! read. Role and company are fixed placeholders.

use serde::{Deserialize, Serialize};

use crate::letter::templates::{
    COMPANY_PLACEHOLDER, CONCISE_BODY, CONCISE_INTRO, CONFIDENT_BODY, CONFIDENT_INTRO, GREETING,
    PLACEHOLDER, PROFESSIONAL_BODY, PROFESSIONAL_INTRO, ROLE_TITLE, SIGN_OFF,
};
use crate::letter::tone::Tone;

/// Either a drafted letter or the instruction shown before a job is supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoverLetter {
    Placeholder { text: String },
    Draft { tone: Tone, text: String },
}

impl CoverLetter {
    pub fn text(&self) -> &str {
        match self {
            CoverLetter::Placeholder { text } | CoverLetter::Draft { text, .. } => text,
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, CoverLetter::Draft { .. })
    }
}

pub fn compose_letter(job_text: &str, tone: Tone) -> CoverLetter {
    if job_text.is_empty() {
        return CoverLetter::Placeholder {
            text: PLACEHOLDER.to_string(),
        };
    }

    let (intro, body) = match tone {
        Tone::Concise => (CONCISE_INTRO, CONCISE_BODY),
        Tone::Confident => (CONFIDENT_INTRO, CONFIDENT_BODY),
        Tone::Professional => (PROFESSIONAL_INTRO, PROFESSIONAL_BODY),
    };
    let intro = intro
        .replace("{role}", ROLE_TITLE)
        .replace("{company}", COMPANY_PLACEHOLDER);

    CoverLetter::Draft {
        tone,
        text: format!("{GREETING}\n\n{intro}\n\n{body}\n\n{SIGN_OFF}"),
    }
}
