//! serp-signals - Google result harvesting with brand and signal scoring
//!
//! Fetches a result page with TLS fingerprint emulation, extracts each
//! result through ordered selector ladders, and scores it for brand,
//! engagement, and sentiment. Falls back to a fixture batch when live
//! results are unavailable.

pub mod commands;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod google;
pub mod models;
pub mod report;
pub mod signals;

pub use config::Config;
pub use error::FallbackReason;
pub use models::{Harvest, Platform, ResultRecord};
