//! Job matcher: naive keyword coverage of a fixed vocabulary.
//!
//! The job description only gates whether a match exists; the vocabulary is
//! fixed. An empty job description yields `None`, never a 0% match.

use serde::{Deserialize, Serialize};

use crate::samples::SAMPLE_CV;

/// Role keywords checked against the CV, in reporting order.
pub const KEYWORD_VOCABULARY: [&str; 8] = [
    "commissioning",
    "MEP",
    "NEC",
    "JCT",
    "change control",
    "budget",
    "H&S",
    "procurement",
];

const PCT_OFFSET: f64 = 35.0;
const PCT_MIN: f64 = 40.0;
const PCT_MAX: f64 = 92.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub pct: u8,
    /// Vocabulary terms present in the CV.
    pub found: Vec<String>,
    /// Vocabulary terms absent from the CV; disjoint from `found`.
    pub missing: Vec<String>,
    pub advice: String,
}

/// Matches CV text against the keyword vocabulary.
///
/// Returns `None` when `job_text` is empty. An empty CV is replaced by the
/// built-in sample CV before matching.
pub fn match_job(cv_text: &str, job_text: &str) -> Option<MatchResult> {
    if job_text.is_empty() {
        return None;
    }

    let cv = if cv_text.is_empty() { SAMPLE_CV } else { cv_text };
    let cv_lower = cv.to_lowercase();

    let (found, missing): (Vec<&str>, Vec<&str>) = KEYWORD_VOCABULARY
        .into_iter()
        .partition(|kw| cv_lower.contains(&kw.to_lowercase()));

    let pct = match_pct(found.len());

    Some(MatchResult {
        pct,
        found: found.into_iter().map(str::to_string).collect(),
        missing: missing.into_iter().map(str::to_string).collect(),
        advice: match_advice(pct).to_string(),
    })
}

fn match_pct(found: usize) -> u8 {
    let raw = found as f64 / KEYWORD_VOCABULARY.len() as f64 * 100.0 + PCT_OFFSET;
    raw.clamp(PCT_MIN, PCT_MAX).round() as u8
}

fn match_advice(pct: u8) -> &'static str {
    if pct >= 80 {
        "Strong match. Tailor the summary and apply."
    } else if pct >= 65 {
        "Good match. Add missing keywords and strengthen impact bullets."
    } else {
        "Medium match. Prioritise keyword alignment and role-specific language."
    }
}
