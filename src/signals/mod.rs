//! Per-result signals: brand, engagement, and sentiment.

pub mod brand;
pub mod engagement;
pub mod sentiment;

pub use brand::detect_brand;
pub use engagement::engagement_score;
pub use sentiment::{sentiment_score, LexiconEstimator, PolarityEstimator};

/// Rounds to 2 decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
