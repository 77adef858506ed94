//! Betline data source port.
//!
//! This is the only place the core performs I/O. Implementations classify
//! their failures into [`Error::TransientFetch`](crate::error::Error) or
//! [`Error::Decode`](crate::error::Error) and never return partially
//! populated values.

use async_trait::async_trait;

use crate::domain::{Event, EventDetail, EventId, LeagueId, Sport};
use crate::error::Result;

/// Remote catalog of sports, leagues, events and markets.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// List every sport with its regions and leagues.
    async fn list_sports(&self) -> Result<Vec<Sport>>;

    /// List the events of one league, in no particular order.
    async fn list_events(&self, league_id: LeagueId) -> Result<Vec<Event>>;

    /// Fetch markets and runners of one event.
    async fn event_detail(&self, event_id: EventId) -> Result<EventDetail>;

    /// Short name used in logs.
    fn source_name(&self) -> &'static str;
}
