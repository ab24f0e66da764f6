//! Sentiment score from text polarity.
//!
//! Polarity comes from a [`PolarityEstimator`] and is mapped from [-1, 1]
//! onto [0, 1]. Anything that goes wrong during estimation yields the neutral
//! score instead of an error.

use super::round2;
use crate::error::SentimentError;
use tracing::debug;

/// Score assigned when polarity cannot be estimated.
pub const NEUTRAL: f64 = 0.5;

/// Anything that can rate the polarity of a piece of text.
pub trait PolarityEstimator: Send + Sync {
    /// Returns a polarity in [-1, 1], negative meaning negative sentiment.
    fn polarity(&self, text: &str) -> Result<f64, SentimentError>;
}

/// Computes the normalized sentiment score, rounded to 2 decimals.
pub fn sentiment_score(estimator: &dyn PolarityEstimator, text: &str) -> f64 {
    match estimator.polarity(text).and_then(validate) {
        Ok(polarity) => round2((polarity + 1.0) / 2.0),
        Err(e) => {
            debug!("Sentiment analysis failed, using neutral score: {}", e);
            NEUTRAL
        }
    }
}

fn validate(polarity: f64) -> Result<f64, SentimentError> {
    if !polarity.is_finite() {
        return Err(SentimentError::NonFinite);
    }
    if !(-1.0..=1.0).contains(&polarity) {
        return Err(SentimentError::OutOfRange(polarity));
    }
    Ok(polarity)
}

/// Word polarities, roughly on the scale of common pattern-based lexicons.
static LEXICON: &[(&str, f64)] = &[
    ("affordable", 0.4),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("brilliant", 0.9),
    ("comfortable", 0.4),
    ("comprehensive", 0.3),
    ("durable", 0.3),
    ("easy", 0.43),
    ("efficient", 0.3),
    ("elegant", 0.5),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("impressive", 1.0),
    ("innovative", 0.5),
    ("latest", 0.5),
    ("leading", 0.3),
    ("love", 0.5),
    ("loved", 0.7),
    ("new", 0.14),
    ("nice", 0.6),
    ("outstanding", 0.5),
    ("perfect", 1.0),
    ("popular", 0.6),
    ("powerful", 0.3),
    ("premium", 0.3),
    ("quiet", 0.3),
    ("real", 0.2),
    ("recommended", 0.4),
    ("reliable", 0.4),
    ("savings", 0.2),
    ("smart", 0.21),
    ("smartest", 0.5),
    ("stylish", 0.5),
    ("superb", 1.0),
    ("top", 0.5),
    ("wonderful", 1.0),
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("broken", -0.4),
    ("complaint", -0.3),
    ("complaints", -0.3),
    ("defective", -0.6),
    ("difficult", -0.5),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("expensive", -0.5),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.3),
    ("faulty", -0.5),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("issue", -0.2),
    ("issues", -0.2),
    ("noisy", -0.4),
    ("overpriced", -0.6),
    ("poor", -0.4),
    ("problem", -0.3),
    ("problems", -0.3),
    ("slow", -0.3),
    ("terrible", -1.0),
    ("useless", -0.5),
    ("waste", -0.2),
    ("weak", -0.375),
    ("worse", -0.4),
    ("worst", -1.0),
];

static INTENSIFIERS: &[(&str, f64)] = &[
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("really", 1.3),
    ("super", 1.3),
    ("truly", 1.3),
    ("very", 1.3),
];

static NEGATIONS: &[&str] = &[
    "aren't", "can't", "didn't", "doesn't", "don't", "isn't", "never", "no", "not", "wasn't",
    "won't",
];

/// Words that do not break a pending modifier ("not a good fan").
static PASS_THROUGH: &[&str] = &["a", "an", "the", "so", "that", "too", "quite"];

/// Multiplier applied to a polar word under negation.
const NEGATION_FACTOR: f64 = -0.5;

/// Lexicon-based polarity: the mean polarity of the sentiment-bearing words.
///
/// An intensifier scales the next polar word and a negation flips and damps
/// it. Text without sentiment-bearing words is neutral (0.0).
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconEstimator;

impl LexiconEstimator {
    pub fn new() -> Self {
        Self
    }

    fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
        table.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
    }
}

impl PolarityEstimator for LexiconEstimator {
    fn polarity(&self, text: &str) -> Result<f64, SentimentError> {
        let lower = text.to_lowercase();
        let tokens = lower
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty());

        let mut scores = Vec::new();
        let mut intensity = 1.0;
        let mut negated = false;

        for token in tokens {
            if let Some(polarity) = Self::lookup(LEXICON, token) {
                let mut value = polarity * intensity;
                if negated {
                    value *= NEGATION_FACTOR;
                }
                scores.push(value);
                intensity = 1.0;
                negated = false;
            } else if let Some(factor) = Self::lookup(INTENSIFIERS, token) {
                intensity *= factor;
            } else if NEGATIONS.contains(&token) {
                negated = !negated;
            } else if !PASS_THROUGH.contains(&token) {
                intensity = 1.0;
                negated = false;
            }
        }

        if scores.is_empty() {
            return Ok(0.0);
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        Ok(mean.clamp(-1.0, 1.0))
    }
}
