//! Deterministic substitute batch used when live extraction is unavailable.
//!
//! The table is embedded configuration data. Scores and brands are
//! precomputed; only the keyword is filled in at generation time.

use crate::models::{Platform, ResultRecord};

/// One precomputed fixture row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixtureEntry {
    pub title: &'static str,
    pub url: &'static str,
    pub snippet: &'static str,
    pub brand: &'static str,
    pub engagement_score: f64,
    pub sentiment_score: f64,
}

/// Ten realistic Google results for the smart-fan market.
pub static GOOGLE_FIXTURES: &[FixtureEntry] = &[
    FixtureEntry {
        title: "Atomberg Efficio+ 1200mm BLDC Motor Smart Fan Review",
        url: "https://www.atomberg.com/efficio-plus",
        snippet: "Atomberg Efficio+ is India's smartest energy-efficient BLDC fan with remote control and 5-year warranty",
        brand: "Atomberg",
        engagement_score: 95.5,
        sentiment_score: 0.85,
    },
    FixtureEntry {
        title: "Best Smart Fans in India 2024 - Atomberg vs Havells",
        url: "https://example.com/comparison",
        snippet: "Comparing top smart BLDC fans: Atomberg leads with energy savings and IoT features",
        brand: "Atomberg",
        engagement_score: 88.3,
        sentiment_score: 0.78,
    },
    FixtureEntry {
        title: "Orient Electric Smart Fan with IoT - Latest Models",
        url: "https://www.orientelectric.com/smart-fans",
        snippet: "Orient Electric launches new range of smart fans with app control",
        brand: "Orient",
        engagement_score: 82.1,
        sentiment_score: 0.72,
    },
    FixtureEntry {
        title: "Havells Smart BLDC Fans - Energy Efficient Technology",
        url: "https://www.havells.com/fans",
        snippet: "Havells introduces BLDC motor fans with smart features and remote control",
        brand: "Havells",
        engagement_score: 79.4,
        sentiment_score: 0.68,
    },
    FixtureEntry {
        title: "Why Atomberg Fans Are Best for Energy Saving - User Reviews",
        url: "https://example.com/atomberg-review",
        snippet: "Real users share their experience with Atomberg BLDC fans and electricity savings",
        brand: "Atomberg",
        engagement_score: 91.2,
        sentiment_score: 0.88,
    },
    FixtureEntry {
        title: "Crompton Smart Fan Range - Features and Pricing",
        url: "https://www.crompton.co.in/fans",
        snippet: "Crompton unveils new smart fan lineup with competitive pricing",
        brand: "Crompton",
        engagement_score: 75.6,
        sentiment_score: 0.65,
    },
    FixtureEntry {
        title: "Smart Fan Buying Guide 2024 - Atomberg Tops the List",
        url: "https://example.com/buying-guide",
        snippet: "Comprehensive guide comparing all smart fan brands. Atomberg ranked #1 for efficiency",
        brand: "Atomberg",
        engagement_score: 87.9,
        sentiment_score: 0.82,
    },
    FixtureEntry {
        title: "Usha Smart Fans with Remote - New Launch",
        url: "https://www.usha.com/fans",
        snippet: "Usha enters smart fan market with BLDC technology",
        brand: "Usha",
        engagement_score: 71.3,
        sentiment_score: 0.62,
    },
    FixtureEntry {
        title: "Atomberg vs Competition: Which Smart Fan Saves More Power?",
        url: "https://example.com/power-comparison",
        snippet: "Data-driven analysis shows Atomberg fans consume 65% less electricity than traditional fans",
        brand: "Atomberg",
        engagement_score: 93.7,
        sentiment_score: 0.86,
    },
    FixtureEntry {
        title: "Bajaj Smart Fan Collection - Technology Meets Design",
        url: "https://www.bajajelectricals.com/fans",
        snippet: "Bajaj launches designer smart fans with app integration",
        brand: "Bajaj",
        engagement_score: 68.5,
        sentiment_score: 0.58,
    },
];

/// Produces fixture batches from a static table.
#[derive(Debug, Clone, Copy)]
pub struct FixtureGenerator {
    platform: Platform,
    entries: &'static [FixtureEntry],
}

impl FixtureGenerator {
    /// Creates a generator over a custom table.
    pub fn new(platform: Platform, entries: &'static [FixtureEntry]) -> Self {
        Self { platform, entries }
    }

    /// Returns the built-in generator for a platform.
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Google => Self::new(platform, GOOGLE_FIXTURES),
        }
    }

    /// Number of rows available.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first `num_results` rows as records for `keyword`.
    pub fn generate(&self, keyword: &str, num_results: usize) -> Vec<ResultRecord> {
        self.entries
            .iter()
            .take(num_results)
            .enumerate()
            .map(|(i, entry)| ResultRecord {
                platform: self.platform.tag().to_string(),
                keyword: keyword.to_string(),
                title: entry.title.to_string(),
                url: entry.url.to_string(),
                snippet: entry.snippet.to_string(),
                brand: entry.brand.to_string(),
                engagement_score: entry.engagement_score,
                sentiment_score: entry.sentiment_score,
                position: i + 1,
            })
            .collect()
    }
}

impl Default for FixtureGenerator {
    fn default() -> Self {
        Self::for_platform(Platform::Google)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SNIPPET_MAX_CHARS;
    use crate::signals::brand;

    #[test]
    fn test_generate_counts_and_positions() {
        let generator = FixtureGenerator::default();
        for n in 1..=10 {
            let records = generator.generate("smart fan", n);
            assert_eq!(records.len(), n);
            for (i, record) in records.iter().enumerate() {
                assert_eq!(record.position, i + 1);
                assert_eq!(record.keyword, "smart fan");
                assert_eq!(record.platform, "google");
            }
        }
    }

    #[test]
    fn test_generate_caps_at_table_size() {
        let generator = FixtureGenerator::default();
        assert_eq!(generator.len(), 10);
        assert_eq!(generator.generate("fan", 25).len(), 10);
        assert!(generator.generate("fan", 0).is_empty());
    }

    #[test]
    fn test_generate_substitutes_keyword() {
        let records = FixtureGenerator::default().generate("bldc ceiling fan", 3);
        assert!(records.iter().all(|r| r.keyword == "bldc ceiling fan"));
        assert_eq!(records[0].brand, "Atomberg");
        assert_eq!(records[2].brand, "Orient");
        assert_eq!(records[0].engagement_score, 95.5);
    }

    #[test]
    fn test_fixture_table_respects_record_invariants() {
        for entry in GOOGLE_FIXTURES {
            assert!(entry.snippet.chars().count() <= SNIPPET_MAX_CHARS);
            assert!((0.0..=1.0).contains(&entry.sentiment_score));
            assert!(brand::is_known_label(entry.brand), "{}", entry.brand);
        }
    }

    #[test]
    fn test_custom_table() {
        static ONE: &[FixtureEntry] = &[FixtureEntry {
            title: "Only row",
            url: "No URL",
            snippet: "",
            brand: "Other",
            engagement_score: 100.0,
            sentiment_score: 0.5,
        }];

        let generator = FixtureGenerator::new(Platform::Google, ONE);
        let records = generator.generate("k", 10);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Only row");
    }
}
