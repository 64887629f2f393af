//! Domain types and shared helpers for the bikeshare explorer.
//!
//! Holds the city / filter vocabulary, the trip record model, the error
//! taxonomy, calendar and duration formatting helpers, and CLI settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{BikeshareError, Result};
