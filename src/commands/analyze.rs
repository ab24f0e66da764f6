//! Analyze command: fetch, extract, score, and fall back to fixtures.

use crate::config::Config;
use crate::error::FallbackReason;
use crate::fixtures::FixtureGenerator;
use crate::format::Formatter;
use crate::google::{GoogleClient, Parser, SerpSource};
use crate::models::{Harvest, Platform, ResultRecord};
use crate::report::ShareOfVoice;
use tracing::{info, warn};

/// Harvests one keyword and renders the batch.
pub struct AnalyzeCommand {
    config: Config,
    parser: Parser,
}

impl AnalyzeCommand {
    /// Creates a new analyze command.
    pub fn new(config: Config) -> Self {
        Self::with_parser(config, Parser::default())
    }

    /// Creates an analyze command with a custom parser (for testing).
    pub fn with_parser(config: Config, parser: Parser) -> Self {
        Self { config, parser }
    }

    /// Harvests every recognized platform and returns formatted output.
    ///
    /// Never fails on fetch or parse problems; those degrade to fixtures.
    pub async fn execute(&self, keyword: &str, platforms: &str) -> String {
        let detected = Platform::detect(platforms);
        if detected.is_empty() {
            warn!("No recognized platform in \"{}\"", platforms);
        }

        let mut records = Vec::new();
        for platform in detected {
            let harvest = match platform {
                Platform::Google => match GoogleClient::new(&self.config) {
                    Ok(client) => self.harvest(&client, keyword).await,
                    Err(e) => self.fallback(
                        platform,
                        keyword,
                        FallbackReason::Network(format!("{:#}", e)),
                    ),
                },
            };
            records.extend(harvest.into_records());
        }

        self.render(&records)
    }

    /// Executes against a provided source (for testing).
    pub async fn execute_with_client(&self, source: &impl SerpSource, keyword: &str) -> String {
        let harvest = self.harvest(source, keyword).await;
        self.render(harvest.records())
    }

    /// Harvests one keyword from a source, substituting fixtures on failure.
    pub async fn harvest(&self, source: &impl SerpSource, keyword: &str) -> Harvest {
        match self.harvest_live(source, keyword).await {
            Ok(records) => {
                info!("Extracted {} live results for \"{}\"", records.len(), keyword);
                Harvest::Live(records)
            }
            Err(reason) => self.fallback(source.platform(), keyword, reason),
        }
    }

    async fn harvest_live(
        &self,
        source: &impl SerpSource,
        keyword: &str,
    ) -> Result<Vec<ResultRecord>, FallbackReason> {
        let num_results = self.config.num_results;

        let page = source
            .fetch(keyword, num_results)
            .await
            .map_err(|e| FallbackReason::Network(format!("{:#}", e)))?;

        if !page.is_ok() {
            return Err(FallbackReason::HttpStatus(page.status));
        }

        self.parser.parse_results(&page.body, keyword, num_results)
    }

    fn fallback(&self, platform: Platform, keyword: &str, reason: FallbackReason) -> Harvest {
        warn!("Live {} results unavailable ({}), using fixture data", platform, reason);
        let records =
            FixtureGenerator::for_platform(platform).generate(keyword, self.config.num_results);
        Harvest::Fallback { reason, records }
    }

    fn render(&self, records: &[ResultRecord]) -> String {
        let formatter = Formatter::new(self.config.format);

        if self.config.share_of_voice {
            let sov = ShareOfVoice::from_records(records, &self.config.focus_brand);
            formatter.format_share_of_voice(&sov)
        } else {
            formatter.format_records(records)
        }
    }
}
