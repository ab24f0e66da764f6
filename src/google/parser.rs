//! Result extraction from Google HTML.
//!
//! Container selection and every field use a strategy ladder: an ordered
//! slice of pure functions tried in sequence, first success wins.

use crate::error::{ExtractionError, FallbackReason};
use crate::google::selectors::{errors, search};
use crate::models::{truncate_snippet, Platform, ResultRecord};
use crate::signals::{detect_brand, engagement_score, sentiment_score};
use crate::signals::{LexiconEstimator, PolarityEstimator};
use scraper::{ElementRef, Html};
use tracing::{debug, info, trace, warn};

/// Sentinel used when a block has no link.
pub const NO_URL: &str = "No URL";

/// Selects candidate result blocks from a whole page.
pub type ContainerStrategy = for<'a> fn(&'a Html) -> Vec<ElementRef<'a>>;

/// Pulls one field out of a result block.
pub type FieldStrategy = fn(ElementRef<'_>) -> Option<String>;

/// Container strategies, primary first.
pub static CONTAINER_LADDER: &[(&str, ContainerStrategy)] = &[
    ("div.g", primary_blocks as ContainerStrategy),
    ("div.Gx5Zad", alternative_blocks as ContainerStrategy),
];

/// Title strategies; the positional placeholder is applied after the ladder.
pub static TITLE_LADDER: &[FieldStrategy] = &[heading_title, role_heading_title];

/// Link strategies.
pub static LINK_LADDER: &[FieldStrategy] = &[first_anchor_href];

/// Snippet strategies; empty string when none match.
pub static SNIPPET_LADDER: &[FieldStrategy] = &[known_class_snippet, first_span_snippet];

/// Runs a field ladder and returns the first value found.
pub fn first_match(ladder: &[FieldStrategy], block: ElementRef<'_>) -> Option<String> {
    ladder.iter().find_map(|strategy| strategy(block))
}

fn primary_blocks(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&search::RESULT_BLOCK).collect()
}

fn alternative_blocks(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&search::RESULT_BLOCK_ALT).collect()
}

/// Collected, trimmed text of an element.
fn present_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Like [`present_text`], but `None` when blank.
fn element_text(element: ElementRef<'_>) -> Option<String> {
    Some(present_text(element)).filter(|text| !text.is_empty())
}

// A heading that is present wins even when its text is blank.
fn heading_title(block: ElementRef<'_>) -> Option<String> {
    block.select(&search::TITLE).next().map(present_text)
}

fn role_heading_title(block: ElementRef<'_>) -> Option<String> {
    block.select(&search::TITLE_ROLE).next().map(present_text)
}

fn first_anchor_href(block: ElementRef<'_>) -> Option<String> {
    // Only the first anchor counts; a later one is usually a "Cached" or sitelink.
    block
        .select(&search::LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(String::from)
}

fn known_class_snippet(block: ElementRef<'_>) -> Option<String> {
    search::SNIPPET_BY_CLASS
        .iter()
        .find_map(|selector| block.select(selector).next())
        .and_then(element_text)
}

fn first_span_snippet(block: ElementRef<'_>) -> Option<String> {
    block.select(&search::SNIPPET_SPAN).next().and_then(element_text)
}

/// Runs `extract` over the first `num_results` blocks, skipping failures.
///
/// Positions are assigned to successfully extracted records only, so they
/// stay contiguous when a block is skipped.
fn collect_records<'a, F>(
    blocks: Vec<ElementRef<'a>>,
    num_results: usize,
    mut extract: F,
) -> Result<Vec<ResultRecord>, FallbackReason>
where
    F: FnMut(ElementRef<'a>, usize) -> Result<ResultRecord, ExtractionError>,
{
    let attempted = blocks.len().min(num_results);
    let mut records = Vec::with_capacity(attempted);

    for block in blocks.into_iter().take(num_results) {
        let position = records.len() + 1;
        match extract(block, position) {
            Ok(record) => {
                trace!("Parsed result {}: {}", record.position, record.title);
                records.push(record);
            }
            Err(e) => {
                warn!("Error parsing result: {}", e);
            }
        }
    }

    if records.is_empty() {
        return Err(FallbackReason::NoUsableResults(attempted));
    }

    debug!("Extracted {} of {} result blocks", records.len(), attempted);
    Ok(records)
}

/// Parser for Google result pages.
pub struct Parser {
    platform: Platform,
    estimator: Box<dyn PolarityEstimator>,
}

impl Parser {
    /// Creates a parser using the lexicon sentiment estimator.
    pub fn new(platform: Platform) -> Self {
        Self::with_estimator(platform, Box::new(LexiconEstimator::new()))
    }

    /// Creates a parser with a custom sentiment estimator.
    pub fn with_estimator(platform: Platform, estimator: Box<dyn PolarityEstimator>) -> Self {
        Self { platform, estimator }
    }

    /// Parses a result page into at most `num_results` records.
    ///
    /// Every selected block becomes a record; a block with nothing usable in
    /// it gets the placeholder title and the "No URL" sentinel.
    pub fn parse_results(
        &self,
        html: &str,
        keyword: &str,
        num_results: usize,
    ) -> Result<Vec<ResultRecord>, FallbackReason> {
        let document = Html::parse_document(html);

        let Some(blocks) = self.select_blocks(&document) else {
            self.log_interstitial(&document);
            return Err(FallbackReason::ZeroMatch);
        };

        collect_records(blocks, num_results, |block, position| {
            self.extract_record(block, keyword, position)
        })
    }

    /// Walks the container ladder and returns the first non-empty selection.
    pub fn select_blocks<'a>(&self, document: &'a Html) -> Option<Vec<ElementRef<'a>>> {
        for (name, strategy) in CONTAINER_LADDER {
            let blocks = strategy(document);
            info!("Found {} results with {}", blocks.len(), name);
            if !blocks.is_empty() {
                return Some(blocks);
            }
        }
        None
    }

    /// Builds one record from a result block at the given 1-based position.
    ///
    /// Fails only for position 0, which has no rank.
    pub fn extract_record(
        &self,
        block: ElementRef<'_>,
        keyword: &str,
        position: usize,
    ) -> Result<ResultRecord, ExtractionError> {
        if position == 0 {
            return Err(ExtractionError::InvalidPosition);
        }

        let title =
            first_match(TITLE_LADDER, block).unwrap_or_else(|| format!("Result {}", position));
        let url = first_match(LINK_LADDER, block).unwrap_or_else(|| NO_URL.to_string());
        let snippet = first_match(SNIPPET_LADDER, block).unwrap_or_default();

        // Scores see the full snippet; only the stored copy is truncated.
        let text = format!("{} {}", title, snippet);

        Ok(ResultRecord {
            platform: self.platform.tag().to_string(),
            keyword: keyword.to_string(),
            brand: detect_brand(&text).to_string(),
            engagement_score: engagement_score(position - 1, &text),
            sentiment_score: sentiment_score(self.estimator.as_ref(), &text),
            snippet: truncate_snippet(&snippet),
            title,
            url,
            position,
        })
    }

    /// Logs why a page without results probably has none.
    fn log_interstitial(&self, document: &Html) {
        if document.select(&errors::CAPTCHA).next().is_some() {
            warn!("CAPTCHA page detected; Google is blocking automated requests");
        } else if document.select(&errors::CONSENT).next().is_some() {
            warn!("Cookie consent page detected instead of results");
        } else {
            info!("No results found with any container strategy");
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(Platform::Google)
    }
}
