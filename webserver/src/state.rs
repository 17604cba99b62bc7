//! Shared handler state

use std::sync::Arc;
use std::time::Instant;

use planner::DynPlanner;

/// State cloned into every request handler
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<DynPlanner>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(planner: DynPlanner) -> Self {
        Self {
            planner: Arc::new(planner),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
