//! CLI library components for `flight-rank`.

pub mod config;
pub mod logging;
