use std::collections::HashMap;
use std::sync::Arc;

use betline_report::app::{Aggregator, Orchestrator};
use betline_report::domain::{EventId, League, LeagueId};
use betline_report::testkit::fixtures;
use betline_report::testkit::source::{Catalog, MockDataSource};

/// One football sport whose leagues are all top leagues with the given
/// `(id, name, rank)` and `events_per_league` pre-match events each.
///
/// Event ids are `league_id * 100 + n` with kickoffs `n` hours out.
pub fn football(leagues: &[(u64, &str, i64)], events_per_league: u64) -> Catalog {
    let leagues: Vec<League> = leagues
        .iter()
        .map(|&(id, name, rank)| fixtures::league(id, name, rank))
        .collect();

    let mut events = HashMap::new();
    let mut details = HashMap::new();
    for league in &leagues {
        let league_id = league.id.get();
        let listed = (1..=events_per_league)
            .map(|n| {
                let id = league_id * 100 + n;
                details.insert(EventId::new(id), fixtures::detail(id));
                fixtures::event(id, 3_600 * n as i64, "prematch")
            })
            .collect();
        events.insert(LeagueId::new(league_id), listed);
    }

    Catalog {
        sports: vec![fixtures::sport("Football", vec![leagues])],
        events,
        details,
    }
}

pub fn aggregator(source: &Arc<MockDataSource>, orchestrator: Orchestrator) -> Aggregator {
    Aggregator::new(source.clone(), Arc::new(orchestrator))
}
