//! Betline JSON payloads.
//!
//! The API is camelCase and sparse: collections may be absent and most
//! descriptive fields are optional. Absent collections decode as empty.
//!
//! Example event listing:
//! ```json
//! {"data":[{"id":1,"name":"Arsenal - Chelsea","kickoff":1723305600000,"betline":"prematch"}]}
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{
    Event, EventDetail, EventId, League, LeagueId, Market, Region, Runner, RunnerId, Sport,
};

#[derive(Debug, Deserialize)]
pub struct SportDto {
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub regions: Vec<RegionDto>,
}

#[derive(Debug, Deserialize)]
pub struct RegionDto {
    pub id: Option<u64>,
    pub name: Option<String>,
    #[serde(default)]
    pub leagues: Vec<LeagueDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub top: bool,
    #[serde(default)]
    pub top_order: i64,
}

#[derive(Debug, Deserialize)]
pub struct EventsResponse {
    #[serde(default, alias = "events")]
    pub data: Vec<EventDto>,
}

#[derive(Debug, Deserialize)]
pub struct EventDto {
    pub id: u64,
    pub name: String,
    /// Epoch milliseconds.
    pub kickoff: i64,
    /// Status tag, e.g. `prematch` or `inplay`.
    #[serde(default)]
    pub betline: String,
}

#[derive(Debug, Deserialize)]
pub struct EventDetailDto {
    pub id: Option<u64>,
    pub name: Option<String>,
    #[serde(default)]
    pub markets: Vec<MarketDto>,
}

#[derive(Debug, Deserialize)]
pub struct MarketDto {
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub runners: Vec<RunnerDto>,
}

#[derive(Debug, Deserialize)]
pub struct RunnerDto {
    pub id: u64,
    pub name: String,
    pub price: Decimal,
}

// ---------------------------------------------------------------------------
// Domain conversions
// ---------------------------------------------------------------------------

impl From<SportDto> for Sport {
    fn from(dto: SportDto) -> Self {
        Self {
            name: dto.name,
            regions: dto.regions.into_iter().map(Region::from).collect(),
        }
    }
}

impl From<RegionDto> for Region {
    fn from(dto: RegionDto) -> Self {
        Self {
            name: dto.name,
            leagues: dto.leagues.into_iter().map(League::from).collect(),
        }
    }
}

impl From<LeagueDto> for League {
    fn from(dto: LeagueDto) -> Self {
        Self {
            id: LeagueId::new(dto.id),
            name: dto.name,
            is_top: dto.top,
            top_order: dto.top_order,
        }
    }
}

impl EventDto {
    /// Map to a domain event. Fails with the offending value when the
    /// kickoff is outside the representable range.
    pub fn into_event(self) -> Result<Event, String> {
        let kickoff = DateTime::<Utc>::from_timestamp_millis(self.kickoff)
            .ok_or_else(|| format!("event {}: kickoff {} out of range", self.id, self.kickoff))?;
        Ok(Event {
            id: EventId::new(self.id),
            name: self.name,
            kickoff,
            status: self.betline,
        })
    }
}

impl From<EventDetailDto> for EventDetail {
    fn from(dto: EventDetailDto) -> Self {
        Self {
            markets: dto.markets.into_iter().map(Market::from).collect(),
        }
    }
}

impl From<MarketDto> for Market {
    fn from(dto: MarketDto) -> Self {
        Self {
            name: dto.name,
            runners: dto.runners.into_iter().map(Runner::from).collect(),
        }
    }
}

impl From<RunnerDto> for Runner {
    fn from(dto: RunnerDto) -> Self {
        Self {
            id: RunnerId::new(dto.id),
            name: dto.name,
            price: dto.price,
        }
    }
}
