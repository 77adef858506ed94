//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] — [`MockDataSource`](source::MockDataSource), a scripted
//!   [`DataSource`](crate::port::DataSource) with latency, failure
//!   injection and concurrency instrumentation.
//! - [`fixtures`] — Builders for leagues, events, markets and a canonical
//!   catalog snapshot.

pub mod fixtures;
pub mod source;
