//! In-memory job tracker.
//!
//! The `Tracker` owns every row. Callers get read-only views or copies; nothing
//! outside holds a reference into the list. Newest rows come first.

use chrono::{Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::tracker::{JobStatus, NewJob, TrackedJob};

pub const TODAY: &str = "Today";
const YESTERDAY: &str = "Yesterday";

const DEFAULT_TITLE: &str = "New role (demo)";
const DEFAULT_COMPANY: &str = "Company";
const MATCH_TITLE: &str = "Senior Project Manager (Data Centres)";
const MATCH_COMPANY: &str = "[Company]";

#[derive(Debug, Clone, Default)]
pub struct Tracker {
    rows: Vec<TrackedJob>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker pre-populated with the two demo rows.
    pub fn seeded() -> Self {
        let now = Utc::now();
        Tracker {
            rows: vec![
                TrackedJob {
                    id: Uuid::new_v4(),
                    title: "Senior Project Manager (Data Centres)".to_string(),
                    company: "Example Colo Provider".to_string(),
                    status: JobStatus::Saved,
                    score_snapshot: 72,
                    updated: TODAY.to_string(),
                    updated_at: now,
                },
                TrackedJob {
                    id: Uuid::new_v4(),
                    title: "M&E Project Manager".to_string(),
                    company: "Design & Build Contractor".to_string(),
                    status: JobStatus::Applied,
                    score_snapshot: 78,
                    updated: YESTERDAY.to_string(),
                    updated_at: now - Duration::days(1),
                },
            ],
        }
    }

    pub fn rows(&self) -> &[TrackedJob] {
        &self.rows
    }

    pub fn get(&self, id: Uuid) -> Option<&TrackedJob> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Prepends a new `Saved` row. Missing title/company fall back to demo defaults.
    pub fn add(&mut self, job: NewJob, score_snapshot: u8) -> TrackedJob {
        let title = job.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let company = job.company.unwrap_or_else(|| DEFAULT_COMPANY.to_string());
        self.prepend(title, company, score_snapshot)
    }

    /// Prepends the matched role with the score captured at call time.
    pub fn save_from_match(&mut self, score_snapshot: u8) -> TrackedJob {
        self.prepend(
            MATCH_TITLE.to_string(),
            MATCH_COMPANY.to_string(),
            score_snapshot,
        )
    }

    /// Sets the status and resets the updated label. Returns false if `id` is unknown.
    pub fn set_status(&mut self, id: Uuid, status: JobStatus) -> bool {
        match self.rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.status = status;
                row.updated = TODAY.to_string();
                row.updated_at = Utc::now();
                info!(%id, ?status, "tracker row status changed");
                true
            }
            None => {
                debug!(%id, "set_status on unknown tracker row");
                false
            }
        }
    }

    /// Deletes the row. Returns false if `id` is unknown.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        let removed = self.rows.len() != before;
        if removed {
            info!(%id, "tracker row removed");
        } else {
            debug!(%id, "remove on unknown tracker row");
        }
        removed
    }

    fn prepend(&mut self, title: String, company: String, score_snapshot: u8) -> TrackedJob {
        let row = TrackedJob {
            id: Uuid::new_v4(),
            title,
            company,
            status: JobStatus::Saved,
            score_snapshot: score_snapshot.min(100),
            updated: TODAY.to_string(),
            updated_at: Utc::now(),
        };
        info!(id = %row.id, title = %row.title, "tracker row added");
        self.rows.insert(0, row.clone());
        row
    }
}
