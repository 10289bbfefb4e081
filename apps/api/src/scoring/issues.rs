//! Improvement issues attached to a CV score.
//!
//! The demo ships a fixed list; `IssueSource` is the seam where a real
//! analysis engine would plug in without changing `ScoreResult`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    pub detail: String,
}

/// Produces the ordered issue list for a CV.
///
/// Carried in `AppState` as `Arc<dyn IssueSource>`.
pub trait IssueSource: Send + Sync {
    fn issues(&self, cv_text: &str, job_text: &str) -> Vec<Issue>;
}

/// Input-independent issue list used by the demo.
pub struct CannedIssues;

const CANNED: &[(&str, &str)] = &[
    (
        "Missing role-specific keywords",
        "Add commissioning, change control, NEC/JCT, and stakeholder reporting terms where truthful.",
    ),
    (
        "Bullets lack measurable outcomes",
        "Rewrite 6\u{2013}10 bullets to include metrics (time saved, revenue, cost, delivery speed).",
    ),
    (
        "Skills section not aligned to target roles",
        "Group skills into Delivery, Contracts, Technical (MEP), and Leadership for scanability.",
    ),
    (
        "CV reads as generalist",
        "Tailor the Summary to the job title and reflect 3\u{2013}5 relevant competencies.",
    ),
];

impl IssueSource for CannedIssues {
    fn issues(&self, _cv_text: &str, _job_text: &str) -> Vec<Issue> {
        CANNED
            .iter()
            .map(|(title, detail)| Issue {
                title: title.to_string(),
                detail: detail.to_string(),
            })
            .collect()
    }
}
