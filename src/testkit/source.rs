//! Scripted in-memory [`DataSource`].
//!
//! Serves a fixed catalog snapshot with optional per-call latency and
//! injected failures, and records how many calls were in flight at once so
//! tests can check the orchestrator's budget from the outside.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::sleep;

use crate::domain::{Event, EventDetail, EventId, LeagueId, Sport};
use crate::error::{Error, Result};
use crate::port::DataSource;

/// Catalog snapshot served by [`MockDataSource`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub sports: Vec<Sport>,
    pub events: HashMap<LeagueId, Vec<Event>>,
    pub details: HashMap<EventId, EventDetail>,
}

/// One recorded call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Sports,
    Events(LeagueId),
    Detail(EventId),
}

#[derive(Debug, Default)]
pub struct MockDataSource {
    catalog: Catalog,
    latency: Duration,
    league_latency: HashMap<LeagueId, Duration>,
    event_latency: HashMap<EventId, Duration>,
    failing_leagues: HashSet<LeagueId>,
    failing_events: HashSet<EventId>,
    malformed_events: HashSet<EventId>,
    active: AtomicUsize,
    peak: AtomicUsize,
    completed: AtomicUsize,
    calls: Mutex<Vec<Call>>,
}

impl MockDataSource {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Latency applied to every call without a more specific override.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub fn with_league_latency(mut self, league_id: u64, latency: Duration) -> Self {
        self.league_latency.insert(LeagueId::new(league_id), latency);
        self
    }

    #[must_use]
    pub fn with_event_latency(mut self, event_id: u64, latency: Duration) -> Self {
        self.event_latency.insert(EventId::new(event_id), latency);
        self
    }

    /// Event listing of `league_id` fails with a transient error.
    #[must_use]
    pub fn fail_events(mut self, league_id: u64) -> Self {
        self.failing_leagues.insert(LeagueId::new(league_id));
        self
    }

    /// Detail fetch of `event_id` fails with a transient error.
    #[must_use]
    pub fn fail_event_detail(mut self, event_id: u64) -> Self {
        self.failing_events.insert(EventId::new(event_id));
        self
    }

    /// Detail fetch of `event_id` fails with a decode error.
    #[must_use]
    pub fn malformed_event_detail(mut self, event_id: u64) -> Self {
        self.malformed_events.insert(EventId::new(event_id));
        self
    }

    /// Highest number of calls in flight at the same time.
    #[must_use]
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    /// Calls that ran to completion (successfully or not).
    #[must_use]
    pub fn completed_calls(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    async fn enter(&self, call: Call, latency: Duration) -> CallGuard<'_> {
        self.calls.lock().push(call);
        let current = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(current, Ordering::SeqCst);
        let guard = CallGuard { source: self };
        if !latency.is_zero() {
            sleep(latency).await;
        }
        guard
    }

    fn transient(url: String) -> Error {
        Error::TransientFetch {
            url,
            reason: "HTTP status 503 Service Unavailable".into(),
        }
    }
}

/// Decrements the active counter when a call finishes or is dropped.
struct CallGuard<'a> {
    source: &'a MockDataSource,
}

impl Drop for CallGuard<'_> {
    fn drop(&mut self) {
        self.source.active.fetch_sub(1, Ordering::SeqCst);
    }
}

impl CallGuard<'_> {
    fn finish(self) {
        self.source.completed.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn list_sports(&self) -> Result<Vec<Sport>> {
        let guard = self.enter(Call::Sports, self.latency).await;
        guard.finish();
        Ok(self.catalog.sports.clone())
    }

    async fn list_events(&self, league_id: LeagueId) -> Result<Vec<Event>> {
        let latency = self
            .league_latency
            .get(&league_id)
            .copied()
            .unwrap_or(self.latency);
        let guard = self.enter(Call::Events(league_id), latency).await;
        guard.finish();

        if self.failing_leagues.contains(&league_id) {
            return Err(Self::transient(format!("mock://events/{league_id}")));
        }
        Ok(self
            .catalog
            .events
            .get(&league_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn event_detail(&self, event_id: EventId) -> Result<EventDetail> {
        let latency = self
            .event_latency
            .get(&event_id)
            .copied()
            .unwrap_or(self.latency);
        let guard = self.enter(Call::Detail(event_id), latency).await;
        guard.finish();

        let url = format!("mock://event/{event_id}");
        if self.failing_events.contains(&event_id) {
            return Err(Self::transient(url));
        }
        if self.malformed_events.contains(&event_id) {
            return Err(Error::Decode {
                url,
                reason: "expected value at line 1 column 1".into(),
            });
        }
        self.catalog
            .details
            .get(&event_id)
            .cloned()
            .ok_or_else(|| Error::TransientFetch {
                url,
                reason: "HTTP status 404 Not Found".into(),
            })
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}
