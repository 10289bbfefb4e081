use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Application pipeline stage of a tracked job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Saved,
    Applied,
    Interview,
    Offer,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedJob {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub status: JobStatus,
    /// CV score captured when the row was created. Never recomputed.
    pub score_snapshot: u8,
    /// Human label such as "Today" or "Yesterday".
    pub updated: String,
    pub updated_at: DateTime<Utc>,
}

/// Fields a caller supplies when adding a row by hand.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewJob {
    pub title: Option<String>,
    pub company: Option<String>,
}
