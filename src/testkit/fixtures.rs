//! Builders for catalog primitives used across tests.
//!
//! [`catalog`] is a small but complete snapshot: two sports, top and
//! non-top leagues spread over regions, pre-match and in-play events, and
//! market detail for every event that can make the report.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use super::source::Catalog;
use crate::domain::{
    Event, EventDetail, EventId, League, LeagueId, Market, Region, Runner, RunnerId, Sport,
};

pub const PREMIER_LEAGUE: u64 = 1_001;
pub const LA_LIGA: u64 = 1_002;
pub const CHAMPIONSHIP: u64 = 1_003;
pub const ATP_TOUR: u64 = 2_001;

/// Kickoff `offset_secs` after a fixed reference instant.
#[must_use]
pub fn kickoff(offset_secs: i64) -> DateTime<Utc> {
    let base = Utc
        .with_ymd_and_hms(2024, 8, 10, 12, 0, 0)
        .single()
        .unwrap_or_default();
    base + chrono::Duration::seconds(offset_secs)
}

#[must_use]
pub fn league(id: u64, name: &str, top_order: i64) -> League {
    League {
        id: LeagueId::new(id),
        name: name.into(),
        is_top: true,
        top_order,
    }
}

#[must_use]
pub fn minor_league(id: u64, name: &str) -> League {
    League {
        id: LeagueId::new(id),
        name: name.into(),
        is_top: false,
        top_order: 0,
    }
}

#[must_use]
pub fn event(id: u64, offset_secs: i64, status: &str) -> Event {
    Event {
        id: EventId::new(id),
        name: format!("Event {id}"),
        kickoff: kickoff(offset_secs),
        status: status.into(),
    }
}

#[must_use]
pub fn runner(id: u64, name: &str, price: Decimal) -> Runner {
    Runner {
        id: RunnerId::new(id),
        name: name.into(),
        price,
    }
}

/// Two markets per event: a three-way match odds and an over/under.
#[must_use]
pub fn detail(event_id: u64) -> EventDetail {
    let base = event_id * 10;
    EventDetail {
        markets: vec![
            Market {
                name: "Match Odds".into(),
                runners: vec![
                    runner(base + 1, "Home", Decimal::new(150, 2)),
                    runner(base + 2, "Draw", Decimal::new(380, 2)),
                    runner(base + 3, "Away", Decimal::new(260, 2)),
                ],
            },
            Market {
                name: "Over/Under 2.5 Goals".into(),
                runners: vec![
                    runner(base + 4, "Over 2.5 Goals", Decimal::new(190, 2)),
                    runner(base + 5, "Under 2.5 Goals", Decimal::new(195, 2)),
                ],
            },
        ],
    }
}

#[must_use]
pub fn sport(name: &str, regions: Vec<Vec<League>>) -> Sport {
    Sport {
        name: name.into(),
        regions: regions
            .into_iter()
            .map(|leagues| Region {
                name: None,
                leagues,
            })
            .collect(),
    }
}

/// Catalog snapshot with Football and Tennis.
///
/// Football top leagues in rank order: Premier League, La Liga. The
/// Premier League lists its events out of kickoff order and includes an
/// in-play event that must never be selected.
#[must_use]
pub fn catalog() -> Catalog {
    let sports = vec![
        sport(
            "Football",
            vec![
                vec![
                    league(LA_LIGA, "La Liga", 2),
                    minor_league(CHAMPIONSHIP, "Championship"),
                ],
                vec![league(PREMIER_LEAGUE, "Premier League", 1)],
            ],
        ),
        sport("Tennis", vec![vec![league(ATP_TOUR, "ATP Tour", 1)]]),
    ];

    let mut events = HashMap::new();
    events.insert(
        LeagueId::new(PREMIER_LEAGUE),
        vec![
            event(103, 3_600 * 3, "prematch"),
            event(100, 0, "inplay"),
            event(101, 3_600, "prematch"),
            event(102, 3_600 * 2, "prematch"),
        ],
    );
    events.insert(
        LeagueId::new(LA_LIGA),
        vec![event(201, 7_200, "prematch"), event(202, 9_000, "prematch")],
    );
    events.insert(
        LeagueId::new(CHAMPIONSHIP),
        vec![event(301, 1_800, "prematch")],
    );
    events.insert(
        LeagueId::new(ATP_TOUR),
        vec![event(401, 600, "prematch")],
    );

    let details = [100, 101, 102, 103, 201, 202, 301, 401]
        .into_iter()
        .map(|id| (EventId::new(id), detail(id)))
        .collect();

    Catalog {
        sports,
        events,
        details,
    }
}
