//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                  ┌─────────────────────────┐
//!                  │       Application       │
//!                  │  Orchestrator/Aggregator│
//!     ┌────────────┤     Domain + Port       ├────────────┐
//!     │            └─────────────────────────┘            │
//!     ▼                                                   ▼
//! ┌──────────┐                                      ┌───────────┐
//! │DataSource│                                      │ Presenter │
//! │ Adapter  │                                      │  Adapter  │
//! └──────────┘                                      └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`DataSource`] - Remote betline catalog (sports, events, event detail)
//! - [`Presenter`] - Rendering of a finished [`Report`](crate::domain::Report)

mod presenter;
mod source;

pub use presenter::Presenter;
pub use source::DataSource;
