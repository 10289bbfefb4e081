//! CV Scorer: ATS-style heuristic score derived from CV length and job presence.
//!
//! The score depends on BOTH texts: a pasted job description lifts the overall
//! score and narrows the keyword penalty. Every step is clamped, so no field can
//! leave its declared range.

use serde::{Deserialize, Serialize};

use crate::scoring::issues::{Issue, IssueSource};

const EMPTY_CV_BASE: i32 = 72;
const CV_BASE: i32 = 62;
const LENGTH_BONUS_CAP: i32 = 18;
const CHARS_PER_BONUS_POINT: usize = 140;
const JOB_BOOST: i32 = 6;

pub const OVERALL_MIN: u8 = 30;
pub const OVERALL_MAX: u8 = 92;

/// The five sub-score dimensions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubScoreKind {
    KeywordRelevance,
    SkillsAlignment,
    ExperienceRelevance,
    AtsReadability,
    StructureClarity,
}

impl SubScoreKind {
    pub const ALL: [SubScoreKind; 5] = [
        SubScoreKind::KeywordRelevance,
        SubScoreKind::SkillsAlignment,
        SubScoreKind::ExperienceRelevance,
        SubScoreKind::AtsReadability,
        SubScoreKind::StructureClarity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SubScoreKind::KeywordRelevance => "Keyword relevance",
            SubScoreKind::SkillsAlignment => "Skills alignment",
            SubScoreKind::ExperienceRelevance => "Experience relevance",
            SubScoreKind::AtsReadability => "ATS readability",
            SubScoreKind::StructureClarity => "Structure & clarity",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SubScoreKind::KeywordRelevance => "How well your language matches target roles.",
            SubScoreKind::SkillsAlignment => "Coverage of role-relevant skills and tools.",
            SubScoreKind::ExperienceRelevance => {
                "Clarity of relevant outcomes and responsibilities."
            }
            SubScoreKind::AtsReadability => "Formatting likely to parse cleanly.",
            SubScoreKind::StructureClarity => "Scanability, headings and logical structure.",
        }
    }

    /// Inclusive clamp range for this dimension.
    pub fn bounds(self) -> (u8, u8) {
        match self {
            SubScoreKind::AtsReadability | SubScoreKind::StructureClarity => (35, 98),
            _ => (35, 95),
        }
    }

    /// Offset applied to the overall score before clamping.
    fn offset(self, has_job: bool) -> i32 {
        match self {
            SubScoreKind::KeywordRelevance if has_job => -6,
            SubScoreKind::KeywordRelevance => -14,
            SubScoreKind::SkillsAlignment => -8,
            SubScoreKind::ExperienceRelevance => -2,
            SubScoreKind::AtsReadability => 10,
            SubScoreKind::StructureClarity => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScore {
    pub kind: SubScoreKind,
    pub label: String,
    pub description: String,
    pub score: u8,
}

/// Coarse reading of the overall score, used for the dashboard headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Strong,
    Good,
    AtRisk,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Strong
        } else if score >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::AtRisk
        }
    }

    pub fn interpretation(self) -> &'static str {
        match self {
            ScoreBand::Strong => "Strong CV. Minor tailoring will improve consistency.",
            ScoreBand::Good => "Good base. Targeted keyword and impact edits recommended.",
            ScoreBand::AtRisk => {
                "High risk of ATS drop-off. Prioritise structure and keyword alignment."
            }
        }
    }
}

/// Full score report for one (CV, job description) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall: u8,
    pub band: ScoreBand,
    pub interpretation: String,
    pub subs: Vec<SubScore>,
    pub issues: Vec<Issue>,
}

/// Scores a CV against an optional job description.
///
/// Algorithm:
/// 1. base = 72 for an empty CV, else 62 + min(18, len / 140)
/// 2. +6 when a job description is present
/// 3. overall = clamp(base + boost, 30, 92)
/// 4. each sub-score = clamp(overall + offset, bounds)
pub fn score_cv(cv_text: &str, job_text: &str, issue_source: &dyn IssueSource) -> ScoreResult {
    let has_job = !job_text.is_empty();
    let overall = overall_score(cv_text, has_job);
    let band = ScoreBand::from_score(overall);

    let subs = SubScoreKind::ALL
        .iter()
        .map(|&kind| {
            let (lo, hi) = kind.bounds();
            SubScore {
                kind,
                label: kind.label().to_string(),
                description: kind.description().to_string(),
                score: clamp_score(i32::from(overall) + kind.offset(has_job), lo, hi),
            }
        })
        .collect();

    ScoreResult {
        overall,
        band,
        interpretation: band.interpretation().to_string(),
        subs,
        issues: issue_source.issues(cv_text, job_text),
    }
}

fn overall_score(cv_text: &str, has_job: bool) -> u8 {
    let base = if cv_text.is_empty() {
        EMPTY_CV_BASE
    } else {
        let bonus = (text_length(cv_text) / CHARS_PER_BONUS_POINT).min(LENGTH_BONUS_CAP as usize);
        CV_BASE + bonus as i32
    };
    let boost = if has_job { JOB_BOOST } else { 0 };
    clamp_score(base + boost, OVERALL_MIN, OVERALL_MAX)
}

/// Length in UTF-16 code units, which is how browser text fields measure input.
fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

fn clamp_score(value: i32, min: u8, max: u8) -> u8 {
    value.clamp(i32::from(min), i32::from(max)) as u8
}
