//! Demo session: the current inputs plus the tracker that owns saved rows.
//!
//! Every derived view is recomputed from the inputs on read; nothing derived
//! is cached, so a dashboard can never disagree with the text it came from.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::letter::composer::{compose_letter, CoverLetter};
use crate::letter::tone::Tone;
use crate::models::tracker::{NewJob, TrackedJob};
use crate::samples::{SAMPLE_CV, SAMPLE_JOB_DESCRIPTION};
use crate::scoring::issues::IssueSource;
use crate::scoring::matcher::{match_job, MatchResult};
use crate::scoring::scorer::{score_cv, ScoreResult};
use crate::tracker::store::Tracker;

const QUICK_FIX_MARKER: &str = "KEYWORDS";
const QUICK_FIX_BLOCK: &str = "\n\nKEYWORDS\nCommissioning, change control, procurement, NEC/JCT, H&S reporting, MEP coordination";

/// Everything derived from the current inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub score: ScoreResult,
    /// `None` until a job description is supplied.
    pub job_match: Option<MatchResult>,
    pub cover_letter: CoverLetter,
}

/// Partial update of the session inputs. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionUpdate {
    pub cv_text: Option<String>,
    pub job_text: Option<String>,
    pub tone: Option<Tone>,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub cv_text: String,
    pub job_text: String,
    pub tone: Tone,
    pub tracker: Tracker,
}

impl Session {
    pub fn new(tracker: Tracker) -> Self {
        Session {
            tracker,
            ..Session::default()
        }
    }

    pub fn score(&self, issue_source: &dyn IssueSource) -> ScoreResult {
        score_cv(&self.cv_text, &self.job_text, issue_source)
    }

    pub fn job_match(&self) -> Option<MatchResult> {
        match_job(&self.cv_text, &self.job_text)
    }

    pub fn cover_letter(&self) -> CoverLetter {
        compose_letter(&self.job_text, self.tone)
    }

    pub fn dashboard(&self, issue_source: &dyn IssueSource) -> Dashboard {
        Dashboard {
            score: self.score(issue_source),
            job_match: self.job_match(),
            cover_letter: self.cover_letter(),
        }
    }

    pub fn update(&mut self, update: SessionUpdate) {
        if let Some(cv_text) = update.cv_text {
            self.cv_text = cv_text;
        }
        if let Some(job_text) = update.job_text {
            self.job_text = job_text;
        }
        if let Some(tone) = update.tone {
            self.tone = tone;
        }
        debug!(
            cv_len = self.cv_text.len(),
            job_len = self.job_text.len(),
            tone = %self.tone,
            "session inputs updated"
        );
    }

    /// Loads the sample CV, with or without the sample job description.
    pub fn load_demo(&mut self, with_job: bool) {
        self.cv_text = SAMPLE_CV.to_string();
        self.job_text = if with_job {
            SAMPLE_JOB_DESCRIPTION.to_string()
        } else {
            String::new()
        };
    }

    pub fn load_sample_cv(&mut self) {
        self.cv_text = SAMPLE_CV.to_string();
    }

    pub fn load_sample_job(&mut self) {
        self.job_text = SAMPLE_JOB_DESCRIPTION.to_string();
    }

    /// Empties both text inputs. Tone and tracker are kept.
    pub fn clear(&mut self) {
        self.cv_text.clear();
        self.job_text.clear();
    }

    /// Appends the role keyword block to the CV once. Returns true if the CV changed.
    pub fn apply_quick_fix(&mut self) -> bool {
        if self.cv_text.contains(QUICK_FIX_MARKER) {
            return false;
        }
        self.cv_text.push_str(QUICK_FIX_BLOCK);
        true
    }

    /// Adds a row by hand, snapshotting the current overall score.
    pub fn add_to_tracker(&mut self, job: NewJob, issue_source: &dyn IssueSource) -> TrackedJob {
        let snapshot = self.score(issue_source).overall;
        self.tracker.add(job, snapshot)
    }

    /// Saves the matched role, snapshotting the current overall score.
    /// Returns `None` when there is no match because no job description is set.
    pub fn save_match_to_tracker(&mut self, issue_source: &dyn IssueSource) -> Option<TrackedJob> {
        self.job_match()?;
        let snapshot = self.score(issue_source).overall;
        Some(self.tracker.save_from_match(snapshot))
    }
}
