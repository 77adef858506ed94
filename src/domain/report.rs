//! The report tree: Sport → League → Event → Market → Runner.
//!
//! Nodes are built bottom-up by the aggregator and are never mutated after
//! the top-level join returns. Children are only attached once fully built,
//! so every constructor takes the finished child list.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::catalog::{Event, Market, Runner};
use super::id::{EventId, RunnerId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Report {
    pub sports: Vec<SportNode>,
}

impl Report {
    #[must_use]
    pub fn new(sports: Vec<SportNode>) -> Self {
        Self { sports }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sports.is_empty()
    }

    /// Number of event nodes across the whole tree.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.sports
            .iter()
            .flat_map(|sport| &sport.leagues)
            .map(|league| league.events.len())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportNode {
    pub name: String,
    pub leagues: Vec<LeagueNode>,
}

impl SportNode {
    #[must_use]
    pub fn new(name: impl Into<String>, leagues: Vec<LeagueNode>) -> Self {
        Self {
            name: name.into(),
            leagues,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueNode {
    pub name: String,
    pub events: Vec<EventNode>,
}

impl LeagueNode {
    #[must_use]
    pub fn new(name: impl Into<String>, events: Vec<EventNode>) -> Self {
        Self {
            name: name.into(),
            events,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventNode {
    pub id: EventId,
    pub name: String,
    pub kickoff: DateTime<Utc>,
    pub markets: Vec<MarketNode>,
}

impl EventNode {
    /// Leaf-level assembly: map an event and its markets into report nodes.
    #[must_use]
    pub fn from_detail(event: &Event, markets: Vec<Market>) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            kickoff: event.kickoff,
            markets: markets.into_iter().map(MarketNode::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketNode {
    pub name: String,
    pub runners: Vec<RunnerNode>,
}

impl From<Market> for MarketNode {
    fn from(market: Market) -> Self {
        Self {
            name: market.name,
            runners: market.runners.into_iter().map(RunnerNode::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunnerNode {
    pub id: RunnerId,
    pub name: String,
    pub price: Decimal,
}

impl From<Runner> for RunnerNode {
    fn from(runner: Runner) -> Self {
        Self {
            id: runner.id,
            name: runner.name,
            price: runner.price,
        }
    }
}
