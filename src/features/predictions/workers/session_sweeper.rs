use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;

use crate::features::predictions::services::SessionService;

/// Background worker that drops idle form sessions
pub struct SessionSweeper {
    session_service: Arc<SessionService>,
    sweep_interval: Duration,
}

impl SessionSweeper {
    pub fn new(session_service: Arc<SessionService>, sweep_interval: Duration) -> Self {
        Self {
            session_service,
            sweep_interval,
        }
    }

    /// Run the sweeper in a background loop
    pub async fn run(&self) {
        tracing::info!(
            "Starting session sweeper worker (interval: {:?})",
            self.sweep_interval
        );

        let mut interval = interval(self.sweep_interval);

        loop {
            interval.tick().await;
            self.sweep().await;
        }
    }

    /// Purge expired sessions once, returning how many were dropped
    pub async fn sweep(&self) -> usize {
        let purged = self.session_service.purge_expired().await;

        if purged > 0 {
            tracing::info!(
                "Purged {} expired form sessions ({} remaining)",
                purged,
                self.session_service.session_count().await
            );
        }

        purged
    }
}
