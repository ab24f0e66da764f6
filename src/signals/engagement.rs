//! Engagement score from rank and content length.

use super::round2;

/// Points lost per rank step.
const RANK_STEP: usize = 10;

/// Rank component for the top result.
const RANK_CEILING: usize = 100;

/// Cap on the content-length bonus.
const CONTENT_BONUS_CAP: f64 = 50.0;

/// Computes `max(0, 100 - rank*10) + min(len/10, 50)`, rounded to 2 decimals.
///
/// `rank` is the zero-based offset of the result in the batch, so the first
/// result earns the full 100 rank points. Length is counted in characters.
pub fn engagement_score(rank: usize, text: &str) -> f64 {
    let rank_score = RANK_CEILING.saturating_sub(rank.saturating_mul(RANK_STEP)) as f64;
    let content_score = (text.chars().count() as f64 / 10.0).min(CONTENT_BONUS_CAP);

    round2(rank_score + content_score)
}
