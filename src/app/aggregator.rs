//! Recursive report tree construction.
//!
//! One method per tree level, all sharing one [`Orchestrator`]. Each level
//! fetches through [`Orchestrator::run`], applies the
//! [`selector`](crate::domain::selector) rules, fans out the next level and
//! only builds its own node once every child node is complete.

use std::sync::Arc;

use tracing::debug;

use super::orchestrator::Orchestrator;
use crate::domain::selector::{self, DEFAULT_EVENTS_PER_LEAGUE};
use crate::domain::{
    Event, EventId, EventNode, League, LeagueNode, Market, Report, Sport, SportNode,
};
use crate::error::Result;
use crate::port::DataSource;

/// Cheap to clone: every field is shared.
#[derive(Clone)]
pub struct Aggregator {
    source: Arc<dyn DataSource>,
    orchestrator: Arc<Orchestrator>,
    events_per_league: usize,
}

impl Aggregator {
    #[must_use]
    pub fn new(source: Arc<dyn DataSource>, orchestrator: Arc<Orchestrator>) -> Self {
        Self {
            source,
            orchestrator,
            events_per_league: DEFAULT_EVENTS_PER_LEAGUE,
        }
    }

    #[must_use]
    pub fn with_events_per_league(mut self, limit: usize) -> Self {
        self.events_per_league = limit;
        self
    }

    /// Build the full tree for the named sports (empty selection: all sports).
    ///
    /// Each call runs in its own cancellation scope, so a failed build does
    /// not poison later builds on the same session.
    pub async fn build_report(&self, selected_sports: &[String]) -> Result<Report> {
        let this = Self {
            orchestrator: Arc::new(self.orchestrator.scope()),
            ..self.clone()
        };
        this.build_tree(selected_sports).await
    }

    async fn build_tree(&self, selected_sports: &[String]) -> Result<Report> {
        let sports = self.orchestrator.run(self.source.list_sports()).await?;
        let sports = selector::select_sports(sports, selected_sports);
        debug!(
            source = self.source.source_name(),
            sports = sports.len(),
            "Building sports"
        );

        let this = self.clone();
        let nodes = self
            .orchestrator
            .fan_out(sports, move |sport| {
                let this = this.clone();
                async move { this.build_sport(sport).await }
            })
            .await?;

        Ok(Report::new(nodes))
    }

    pub async fn build_sport(&self, sport: Sport) -> Result<SportNode> {
        let leagues = selector::top_leagues(&sport);
        debug!(sport = %sport.name, leagues = leagues.len(), "Building top leagues");

        let this = self.clone();
        let nodes = self
            .orchestrator
            .fan_out(leagues, move |league| {
                let this = this.clone();
                async move { this.build_league(league).await }
            })
            .await?;

        Ok(SportNode::new(sport.name, nodes))
    }

    pub async fn build_league(&self, league: League) -> Result<LeagueNode> {
        let events = self
            .orchestrator
            .run(self.source.list_events(league.id))
            .await?;
        let events = selector::top_events(events, self.events_per_league);
        debug!(league = %league.name, events = events.len(), "Building top events");

        let this = self.clone();
        let nodes = self
            .orchestrator
            .fan_out(events, move |event| {
                let this = this.clone();
                async move { this.build_event(event).await }
            })
            .await?;

        Ok(LeagueNode::new(league.name, nodes))
    }

    /// Leaf level: no further fan-out.
    pub async fn build_event(&self, event: Event) -> Result<EventNode> {
        let detail = self
            .orchestrator
            .run(self.source.event_detail(event.id))
            .await?;
        Ok(EventNode::from_detail(&event, detail.markets))
    }

    /// Fetch one event's detail and return the market with the given name.
    pub async fn find_market(&self, event_id: EventId, name: &str) -> Result<Market> {
        let detail = self
            .orchestrator
            .run(self.source.event_detail(event_id))
            .await?;
        selector::find_market_by_name(&detail, name).cloned()
    }
}

impl std::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregator")
            .field("source", &self.source.source_name())
            .field("orchestrator", &self.orchestrator)
            .field("events_per_league", &self.events_per_league)
            .finish()
    }
}
