//! Scoped ownership of an orchestrator.
//!
//! A [`Session`] is opened right before a report build and releases its
//! orchestrator when dropped, so every exit path (success, error, a panic
//! unwinding through the caller, or the caller's future being dropped)
//! returns the worker budget. Work submitted after release fails with
//! [`Error::SessionClosed`](crate::error::Error::SessionClosed).

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use super::orchestrator::{ExecutionMode, Orchestrator};

#[derive(Debug)]
pub struct Session {
    id: Uuid,
    orchestrator: Arc<Orchestrator>,
}

impl Session {
    #[must_use]
    pub fn open(mode: ExecutionMode, workers: usize) -> Self {
        let orchestrator = Arc::new(Orchestrator::new(mode, workers));
        let id = Uuid::new_v4();
        info!(
            session_id = %id,
            mode = %mode,
            workers = orchestrator.budget(),
            "Orchestration session opened"
        );
        Self { id, orchestrator }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Shared handle for components that submit work to this session.
    #[must_use]
    pub fn orchestrator(&self) -> &Arc<Orchestrator> {
        &self.orchestrator
    }

    /// Release the worker budget. Idempotent.
    pub fn close(&self) {
        if self.orchestrator.close() {
            debug!(
                session_id = %self.id,
                peak_in_flight = self.orchestrator.peak_in_flight(),
                "Orchestration session released"
            );
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.orchestrator.is_closed()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}
