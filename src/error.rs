//! Error taxonomy for the harvesting pipeline.
//!
//! None of these are fatal to an invocation. Fallback reasons are absorbed by
//! the coordinator; the other two only affect a single result.

/// Why live extraction was abandoned in favour of the fixture batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FallbackReason {
    /// Connection failure, timeout, or unreadable body.
    #[error("network failure: {0}")]
    Network(String),

    /// The search page answered with something other than 200.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// Every container strategy matched zero result blocks.
    #[error("no result blocks matched any container strategy")]
    ZeroMatch,

    /// Blocks were found but none of them could be extracted.
    #[error("all {0} result blocks failed extraction")]
    NoUsableResults(usize),
}

/// Failure to turn one raw result block into a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    /// Positions are 1-based; 0 has no rank to score.
    #[error("result position must be at least 1")]
    InvalidPosition,
}

/// Failure of a polarity estimator on a piece of text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SentimentError {
    /// The estimator produced NaN or infinity.
    #[error("polarity is not a finite number")]
    NonFinite,

    /// The estimator produced a value outside [-1, 1].
    #[error("polarity {0} outside [-1, 1]")]
    OutOfRange(f64),

    /// The estimator itself gave up.
    #[error("polarity estimation failed: {0}")]
    Estimator(String),
}
