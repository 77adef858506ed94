//! Pure selection rules applied between fetches.
//!
//! Each rule is a filter, then a stable sort, then an optional limit. The
//! output order of these functions is the child order of the report tree,
//! so the tree shape never depends on fetch completion order.

use super::catalog::{Event, EventDetail, League, Market, Sport};
use crate::error::{Error, Result};

/// Default number of nearest pre-match events kept per league.
pub const DEFAULT_EVENTS_PER_LEAGUE: usize = 2;

/// Keep sports whose name is in `selected`. An empty selection keeps all.
#[must_use]
pub fn select_sports(sports: Vec<Sport>, selected: &[String]) -> Vec<Sport> {
    if selected.is_empty() {
        return sports;
    }
    sports
        .into_iter()
        .filter(|sport| selected.iter().any(|name| name == &sport.name))
        .collect()
}

/// Top leagues of a sport, ordered by rank ascending.
#[must_use]
pub fn top_leagues(sport: &Sport) -> Vec<League> {
    let mut leagues: Vec<League> = sport.leagues().filter(|l| l.is_top).cloned().collect();
    leagues.sort_by_key(|league| league.top_order);
    leagues
}

/// The `limit` nearest pre-match events, ordered by kickoff ascending.
#[must_use]
pub fn top_events(events: Vec<Event>, limit: usize) -> Vec<Event> {
    let mut events: Vec<Event> = events.into_iter().filter(Event::is_prematch).collect();
    events.sort_by_key(|event| event.kickoff);
    events.truncate(limit);
    events
}

/// Look up a market by exact, case-insensitive name.
pub fn find_market_by_name<'a>(detail: &'a EventDetail, name: &str) -> Result<&'a Market> {
    let wanted = name.to_lowercase();
    detail
        .markets
        .iter()
        .find(|market| market.name.to_lowercase() == wanted)
        .ok_or_else(|| Error::market_not_found(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Region, Runner};
    use crate::domain::id::{EventId, LeagueId, RunnerId};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn sport(name: &str) -> Sport {
        Sport {
            name: name.into(),
            regions: vec![],
        }
    }

    fn league(id: u64, is_top: bool, top_order: i64) -> League {
        League {
            id: LeagueId::new(id),
            name: format!("League {id}"),
            is_top,
            top_order,
        }
    }

    fn event(id: u64, kickoff_secs: i64, status: &str) -> Event {
        Event {
            id: EventId::new(id),
            name: format!("Event {id}"),
            kickoff: Utc.timestamp_opt(kickoff_secs, 0).unwrap(),
            status: status.into(),
        }
    }

    #[test]
    fn select_sports_filters_by_exact_name() {
        let sports = vec![sport("Football"), sport("Tennis")];
        let selected = select_sports(sports, &["Football".to_string()]);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Football");
    }

    #[test]
    fn select_sports_with_empty_selection_keeps_all() {
        let sports = vec![sport("Football"), sport("Tennis")];
        assert_eq!(select_sports(sports, &[]).len(), 2);
    }

    #[test]
    fn select_sports_keeps_catalog_order() {
        let sports = vec![sport("Tennis"), sport("Football")];
        let selected = select_sports(sports, &["Football".to_string(), "Tennis".to_string()]);
        let names: Vec<_> = selected.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Tennis", "Football"]);
    }

    #[test]
    fn top_leagues_filters_flag_and_orders_by_rank() {
        let sport = Sport {
            name: "Football".into(),
            regions: vec![
                Region {
                    name: None,
                    leagues: vec![league(10, true, 3), league(11, false, 0)],
                },
                Region {
                    name: None,
                    leagues: vec![league(12, true, 1), league(13, true, 2)],
                },
            ],
        };

        let ids: Vec<u64> = top_leagues(&sport).iter().map(|l| l.id.get()).collect();
        assert_eq!(ids, vec![12, 13, 10]);
    }

    #[test]
    fn top_leagues_of_sport_without_regions_is_empty() {
        assert!(top_leagues(&sport("Darts")).is_empty());
    }

    #[test]
    fn top_events_keeps_nearest_prematch() {
        let events = vec![
            event(5, 500, "prematch"),
            event(3, 300, "prematch"),
            event(1, 100, "prematch"),
            event(4, 400, "prematch"),
            event(2, 200, "prematch"),
        ];

        let ids: Vec<u64> = top_events(events, 2).iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn top_events_skips_non_prematch() {
        let events = vec![
            event(1, 100, "inplay"),
            event(2, 200, "PREMATCH"),
            event(3, 300, "prematch"),
        ];

        let ids: Vec<u64> = top_events(events, 2).iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn top_events_with_fewer_than_limit_returns_all() {
        let events = vec![event(1, 100, "prematch")];
        assert_eq!(top_events(events, 2).len(), 1);
    }

    #[test]
    fn find_market_by_name_is_case_insensitive() {
        let detail = EventDetail {
            markets: vec![
                Market {
                    name: "Total".into(),
                    runners: vec![],
                },
                Market {
                    name: "Match Odds".into(),
                    runners: vec![Runner {
                        id: RunnerId::new(1),
                        name: "Home".into(),
                        price: dec!(1.9),
                    }],
                },
            ],
        };

        let market = find_market_by_name(&detail, "match odds").unwrap();
        assert_eq!(market.name, "Match Odds");
        assert_eq!(market.runners.len(), 1);
    }

    #[test]
    fn find_market_by_name_reports_missing_market() {
        let detail = EventDetail::default();
        let err = find_market_by_name(&detail, "Nonexistent").unwrap_err();

        assert!(matches!(err, Error::NotFound { kind: "market", .. }));
        assert_eq!(err.to_string(), "market not found: Nonexistent");
    }
}
