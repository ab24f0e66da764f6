//! Output formatting for result batches and reports (JSON, table, markdown, CSV).

use crate::config::OutputFormat;
use crate::models::ResultRecord;
use crate::report::ShareOfVoice;

/// Formats batches and reports for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a result batch.
    ///
    /// JSON output is a single compact line so that line-oriented consumers
    /// can pick the array out of stdout.
    pub fn format_records(&self, records: &[ResultRecord]) -> String {
        if records.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No results found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_records(records),
            OutputFormat::Table => self.table_records(records),
            OutputFormat::Markdown => self.markdown_records(records),
            OutputFormat::Csv => self.csv_records(records),
        }
    }

    /// Formats a share-of-voice summary.
    pub fn format_share_of_voice(&self, sov: &ShareOfVoice) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string(sov).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Table => self.table_share_of_voice(sov),
            OutputFormat::Markdown => self.markdown_share_of_voice(sov),
            OutputFormat::Csv => self.csv_share_of_voice(sov),
        }
    }

    // JSON formatting

    fn json_records(&self, records: &[ResultRecord]) -> String {
        serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_records(&self, records: &[ResultRecord]) -> String {
        let pos_width = 3;
        let brand_width = 10;
        let score_width = 8;
        let title_width = 60;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<pos_width$}  {:<brand_width$}  {:>score_width$}  {:>score_width$}  {}",
            "#", "Brand", "Engage", "Sent", "Title"
        ));
        lines.push(format!(
            "{:-<pos_width$}  {:-<brand_width$}  {:-<score_width$}  {:-<score_width$}  {:-<title_width$}",
            "", "", "", "", ""
        ));

        for record in records {
            lines.push(format!(
                "{:<pos_width$}  {:<brand_width$}  {:>score_width$.2}  {:>score_width$.2}  {}",
                record.position,
                record.brand,
                record.engagement_score,
                record.sentiment_score,
                Self::shorten(&record.title, title_width)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} results for \"{}\"", records.len(), records[0].keyword));

        lines.join("\n")
    }

    fn table_share_of_voice(&self, sov: &ShareOfVoice) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{:<10}  {:>8}  {:>8}  {:>10}  {:>9}  {:>8}  {:>10}",
            "Brand", "Mentions", "Share %", "Avg Engage", "Avg Sent", "Avg Pos", "Positive %"
        ));
        lines.push(format!(
            "{:-<10}  {:-<8}  {:-<8}  {:-<10}  {:-<9}  {:-<8}  {:-<10}",
            "", "", "", "", "", "", ""
        ));

        for (brand, m) in &sov.brand_metrics {
            lines.push(format!(
                "{:<10}  {:>8}  {:>8.2}  {:>10.2}  {:>9.2}  {:>8.2}  {:>10.2}",
                brand,
                m.mentions,
                m.mention_percentage,
                m.avg_engagement,
                m.avg_sentiment,
                m.avg_position,
                m.share_of_positive_voice
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "Total: {} results, {} brands",
            sov.total_results, sov.unique_brands
        ));

        if let Some(insights) = &sov.focus_insights {
            lines.push(insights.dominance.clone());
            lines.push(insights.ranking.clone());
        }

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_records(&self, records: &[ResultRecord]) -> String {
        let mut lines = Vec::new();

        lines.push("| # | Brand | Engagement | Sentiment | Title |".to_string());
        lines.push("|---|-------|------------|-----------|-------|".to_string());

        for record in records {
            let title = Self::shorten(&record.title, 50);
            let title = if record.url.starts_with("http") {
                format!("[{}]({})", title, record.url)
            } else {
                title
            };

            lines.push(format!(
                "| {} | {} | {:.2} | {:.2} | {} |",
                record.position, record.brand, record.engagement_score, record.sentiment_score, title
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} results found*", records.len()));

        lines.join("\n")
    }

    fn markdown_share_of_voice(&self, sov: &ShareOfVoice) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## Share of voice: {}", sov.keyword));
        lines.push(String::new());
        lines.push("| Brand | Mentions | Share % | Avg Engagement | Avg Sentiment | Avg Position |".to_string());
        lines.push("|-------|----------|---------|----------------|---------------|--------------|".to_string());

        for (brand, m) in &sov.brand_metrics {
            lines.push(format!(
                "| {} | {} | {:.2} | {:.2} | {:.2} | {:.2} |",
                brand,
                m.mentions,
                m.mention_percentage,
                m.avg_engagement,
                m.avg_sentiment,
                m.avg_position
            ));
        }

        if let Some(insights) = &sov.focus_insights {
            lines.push(String::new());
            lines.push(format!("- **{}:** {}", insights.brand, insights.dominance));
            lines.push(format!("- **Sentiment:** {:.2}", insights.sentiment));
            lines.push(format!("- **Ranking:** {}", insights.ranking));
        }

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "position,platform,keyword,brand,engagement_score,sentiment_score,title,url,snippet"
            .to_string()
    }

    fn csv_records(&self, records: &[ResultRecord]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for record in records {
            lines.push(format!(
                "{},{},{},{},{},{},{},{},{}",
                record.position,
                record.platform,
                Self::csv_escape(&record.keyword),
                record.brand,
                record.engagement_score,
                record.sentiment_score,
                Self::csv_escape(&record.title),
                Self::csv_escape(&record.url),
                Self::csv_escape(&record.snippet)
            ));
        }

        lines.join("\n")
    }

    fn csv_share_of_voice(&self, sov: &ShareOfVoice) -> String {
        let mut lines = Vec::new();
        lines.push(
            "brand,mentions,mention_percentage,avg_engagement,total_engagement,avg_sentiment,avg_position,positive_voice,share_of_positive_voice"
                .to_string(),
        );

        for (brand, m) in &sov.brand_metrics {
            lines.push(format!(
                "{},{},{},{},{},{},{},{},{}",
                Self::csv_escape(brand),
                m.mentions,
                m.mention_percentage,
                m.avg_engagement,
                m.total_engagement,
                m.avg_sentiment,
                m.avg_position,
                m.positive_voice,
                m.share_of_positive_voice
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }

    /// Shortens text to `max` characters for display.
    fn shorten(text: &str, max: usize) -> String {
        if text.chars().count() > max {
            let head: String = text.chars().take(max - 3).collect();
            format!("{}...", head)
        } else {
            text.to_string()
        }
    }
}
