//! Catalog data as served by a [`DataSource`](crate::port::DataSource).
//!
//! These types are the already-decoded view of the remote betline: sports
//! with their regions and leagues, per-league event listings, and per-event
//! market detail. They carry no wire concerns; see
//! [`adapter::outbound::http::dto`](crate::adapter::outbound::http::dto) for
//! the JSON shapes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::id::{EventId, LeagueId, RunnerId};

/// Status tag of events that have not kicked off yet.
pub const PREMATCH: &str = "prematch";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sport {
    pub name: String,
    pub regions: Vec<Region>,
}

impl Sport {
    /// All leagues of the sport, across regions, in catalog order.
    pub fn leagues(&self) -> impl Iterator<Item = &League> {
        self.regions.iter().flat_map(|region| region.leagues.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Region {
    pub name: Option<String>,
    pub leagues: Vec<League>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    /// Flagged as a top league by the bookmaker.
    pub is_top: bool,
    /// Rank among top leagues, lower first.
    pub top_order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub kickoff: DateTime<Utc>,
    /// Betline status tag, e.g. `prematch` or `inplay`.
    pub status: String,
}

impl Event {
    #[must_use]
    pub fn is_prematch(&self) -> bool {
        self.status.eq_ignore_ascii_case(PREMATCH)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventDetail {
    pub markets: Vec<Market>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    pub name: String,
    pub runners: Vec<Runner>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runner {
    pub id: RunnerId,
    pub name: String,
    pub price: Decimal,
}
