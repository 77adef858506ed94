//! Betline domain: catalog data, the report tree, and selection rules.

pub mod catalog;
pub mod id;
pub mod report;
pub mod selector;

pub use catalog::{Event, EventDetail, League, Market, Region, Runner, Sport, PREMATCH};
pub use id::{EventId, LeagueId, RunnerId};
pub use report::{EventNode, LeagueNode, MarketNode, Report, RunnerNode, SportNode};
