//! Betline HTTP data source.

mod client;
pub mod dto;

pub use client::HttpDataSource;
