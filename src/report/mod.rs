//! Share-of-voice aggregation over a single batch.

use crate::models::ResultRecord;
use crate::signals::round2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentiment above which a mention counts as positive voice.
pub const POSITIVE_THRESHOLD: f64 = 0.6;

/// Per-brand metrics within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandMetrics {
    pub mentions: usize,
    pub mention_percentage: f64,
    pub avg_engagement: f64,
    pub total_engagement: f64,
    pub avg_sentiment: f64,
    pub avg_position: f64,
    pub positive_voice: usize,
    pub share_of_positive_voice: f64,
}

/// Highlights for the focus brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusInsights {
    pub brand: String,
    pub dominance: String,
    pub sentiment: f64,
    pub ranking: String,
}

/// Share-of-voice summary for one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareOfVoice {
    pub keyword: String,
    pub total_results: usize,
    pub unique_brands: usize,
    pub brand_metrics: BTreeMap<String, BrandMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_insights: Option<FocusInsights>,
}

impl ShareOfVoice {
    /// Aggregates a batch, highlighting `focus_brand` when it is present.
    pub fn from_records(records: &[ResultRecord], focus_brand: &str) -> Self {
        let total = records.len();

        let mut by_brand: BTreeMap<&str, Vec<&ResultRecord>> = BTreeMap::new();
        for record in records {
            by_brand.entry(record.brand.as_str()).or_default().push(record);
        }

        let brand_metrics: BTreeMap<String, BrandMetrics> = by_brand
            .into_iter()
            .map(|(brand, group)| (brand.to_string(), BrandMetrics::from_group(&group, total)))
            .collect();

        let focus_insights = brand_metrics.get(focus_brand).map(|m| FocusInsights {
            brand: focus_brand.to_string(),
            dominance: format!(
                "{} appears in {} out of {} results",
                focus_brand, m.mentions, total
            ),
            sentiment: m.avg_sentiment,
            ranking: format!("Average position: {}", m.avg_position),
        });

        Self {
            keyword: records.first().map(|r| r.keyword.clone()).unwrap_or_default(),
            total_results: total,
            unique_brands: brand_metrics.len(),
            brand_metrics,
            focus_insights,
        }
    }
}

impl BrandMetrics {
    fn from_group(group: &[&ResultRecord], total: usize) -> Self {
        let mentions = group.len();
        let n = mentions as f64;

        let total_engagement: f64 = group.iter().map(|r| r.engagement_score).sum();
        let total_sentiment: f64 = group.iter().map(|r| r.sentiment_score).sum();
        let total_position: usize = group.iter().map(|r| r.position).sum();
        let positive_voice =
            group.iter().filter(|r| r.sentiment_score > POSITIVE_THRESHOLD).count();

        Self {
            mentions,
            mention_percentage: round2(n * 100.0 / total as f64),
            avg_engagement: round2(total_engagement / n),
            total_engagement: round2(total_engagement),
            avg_sentiment: round2(total_sentiment / n),
            avg_position: round2(total_position as f64 / n),
            positive_voice,
            share_of_positive_voice: round2(positive_voice as f64 * 100.0 / n),
        }
    }
}
