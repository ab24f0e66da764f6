//! Data models for extracted results and harvest outcomes.

use crate::error::FallbackReason;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum snippet length in characters.
pub const SNIPPET_MAX_CHARS: usize = 200;

/// One search result with its brand and derived scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    /// Source engine tag
    pub platform: String,
    /// Keyword the batch was harvested for
    pub keyword: String,
    /// Result heading, or a positional placeholder
    pub title: String,
    /// Link target, or "No URL"
    pub url: String,
    /// Descriptive text, at most 200 characters
    pub snippet: String,
    /// Detected brand label or "Other"
    pub brand: String,
    /// Rank decay plus content-length bonus
    pub engagement_score: f64,
    /// Normalized polarity in [0, 1]
    pub sentiment_score: f64,
    /// 1-based rank within the batch
    pub position: usize,
}

/// Truncates text to the snippet limit on a character boundary.
pub fn truncate_snippet(text: &str) -> String {
    text.chars().take(SNIPPET_MAX_CHARS).collect()
}

/// Outcome of a harvest: live data, or the fixture batch plus the reason.
#[derive(Debug, Clone)]
pub enum Harvest {
    Live(Vec<ResultRecord>),
    Fallback { reason: FallbackReason, records: Vec<ResultRecord> },
}

impl Harvest {
    /// Returns the records regardless of origin.
    pub fn records(&self) -> &[ResultRecord] {
        match self {
            Harvest::Live(records) => records,
            Harvest::Fallback { records, .. } => records,
        }
    }

    /// Consumes the harvest and returns its records.
    pub fn into_records(self) -> Vec<ResultRecord> {
        match self {
            Harvest::Live(records) => records,
            Harvest::Fallback { records, .. } => records,
        }
    }

    /// Returns the fallback reason, if the fixture batch was used.
    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Harvest::Live(_) => None,
            Harvest::Fallback { reason, .. } => Some(reason),
        }
    }

    /// Returns true if the records came from the fixture batch.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Harvest::Fallback { .. })
    }
}

/// Search engines the harvester knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Google,
}

impl Platform {
    /// Returns all supported platforms.
    pub fn all() -> &'static [Platform] {
        &[Platform::Google]
    }

    /// Returns the tag written into each record.
    pub fn tag(&self) -> &'static str {
        match self {
            Platform::Google => "google",
        }
    }

    /// Picks out the platforms named anywhere in a free-form list.
    ///
    /// Matching is a case-insensitive substring test, so `"Google,bing"` and
    /// `"googlenews"` both select Google. Unknown names are ignored.
    pub fn detect(platforms: &str) -> Vec<Platform> {
        let lower = platforms.to_lowercase();
        Self::all().iter().copied().filter(|p| lower.contains(p.tag())).collect()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
