use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::scoring::issues::IssueSource;
use crate::session::store::Session;
use crate::tracker::store::Tracker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable issue list. Default: CannedIssues.
    pub issue_source: Arc<dyn IssueSource>,
    /// The single demo session. Readers derive under a read lock; mutations take the write lock.
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    pub fn new(config: &Config, issue_source: Arc<dyn IssueSource>) -> Self {
        let tracker = if config.seed_tracker {
            Tracker::seeded()
        } else {
            Tracker::new()
        };
        AppState {
            issue_source,
            session: Arc::new(RwLock::new(Session::new(tracker))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::issues::CannedIssues;

    #[tokio::test]
    async fn test_seed_flag_controls_initial_tracker() {
        let seeded = AppState::new(&Config::default(), Arc::new(CannedIssues));
        assert_eq!(seeded.session.read().await.tracker.len(), 2);

        let config = Config {
            seed_tracker: false,
            ..Config::default()
        };
        let empty = AppState::new(&config, Arc::new(CannedIssues));
        assert!(empty.session.read().await.tracker.is_empty());
    }
}
