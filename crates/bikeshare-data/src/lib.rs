//! Data layer for the bikeshare explorer.
//!
//! Responsible for reading the per-city CSV exports, filtering the loaded
//! trips by month and weekday, and computing the descriptive statistics shown
//! by the reporters.

pub mod aggregator;
pub mod analysis;
pub mod analyzer;
pub mod reader;
