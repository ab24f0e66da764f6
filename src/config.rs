//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent pool; one is picked at random per request
    #[serde(default = "default_user_agents")]
    pub user_agents: Vec<String>,

    /// Accept-Language header value
    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    /// Number of results to harvest
    #[serde(default = "default_num_results")]
    pub num_results: usize,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Emit a share-of-voice summary instead of the raw batch
    #[serde(default)]
    pub share_of_voice: bool,

    /// Brand highlighted in the share-of-voice summary
    #[serde(default = "default_focus_brand")]
    pub focus_brand: String,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agents() -> Vec<String> {
    [
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.5".to_string()
}

fn default_num_results() -> usize {
    10
}

fn default_focus_brand() -> String {
    "Atomberg".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proxy: None,
            timeout_secs: default_timeout_secs(),
            user_agents: default_user_agents(),
            accept_language: default_accept_language(),
            num_results: default_num_results(),
            format: OutputFormat::Json,
            share_of_voice: false,
            focus_brand: default_focus_brand(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        anyhow::ensure!(
            config.num_results >= 1,
            "Invalid config file {}: num_results must be at least 1",
            path.display()
        );

        Ok(config)
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("serp-signals.toml");
        if local_config.exists() {
            debug!("Found serp-signals.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("serp-signals").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(proxy) = std::env::var("SERP_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(timeout) = std::env::var("SERP_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }

        if let Ok(format) = std::env::var("SERP_FORMAT") {
            if let Ok(f) = format.parse() {
                self.format = f;
            }
        }

        self
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: json, table, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.proxy.is_none());
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.user_agents.len(), 3);
        assert!(config.user_agents.iter().all(|ua| ua.starts_with("Mozilla/5.0")));
        assert_eq!(config.accept_language, "en-US,en;q=0.5");
        assert_eq!(config.num_results, 10);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.share_of_voice);
        assert_eq!(config.focus_brand, "Atomberg");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);

        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("Unknown format"));
        assert!(err.contains("json, table, markdown, csv"));
    }

    #[test]
    fn test_output_format_display_and_default() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn test_config_from_toml_partial() {
        let toml = r#"
            timeout_secs = 5
            num_results = 3
            share_of_voice = true
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.num_results, 3);
        assert!(config.share_of_voice);
        // Unset fields keep their defaults
        assert_eq!(config.user_agents.len(), 3);
        assert_eq!(config.focus_brand, "Atomberg");
    }

    #[test]
    fn test_config_from_toml_all_fields() {
        let toml = r#"
            proxy = "socks5://localhost:1080"
            timeout_secs = 20
            user_agents = ["agent-a", "agent-b"]
            accept_language = "en-IN,en;q=0.8"
            num_results = 7
            format = "csv"
            share_of_voice = true
            focus_brand = "Havells"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.proxy, Some("socks5://localhost:1080".to_string()));
        assert_eq!(config.timeout_secs, 20);
        assert_eq!(config.user_agents, vec!["agent-a", "agent-b"]);
        assert_eq!(config.accept_language, "en-IN,en;q=0.8");
        assert_eq!(config.num_results, 7);
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(config.share_of_voice);
        assert_eq!(config.focus_brand, "Havells");
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            timeout_secs = 4
            format = "table"
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 4);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_config_from_file_not_found() {
        let result = Config::from_file("/nonexistent/path/config.toml");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();

        let result = Config::from_file(file.path());
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_from_file_rejects_zero_results() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "num_results = 0").unwrap();

        let err = Config::from_file(file.path()).unwrap_err().to_string();
        assert!(err.contains("num_results must be at least 1"));
        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_config_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "num_results = 4").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.num_results, 4);
    }

    #[test]
    fn test_config_with_env() {
        let orig_proxy = std::env::var("SERP_PROXY").ok();
        let orig_timeout = std::env::var("SERP_TIMEOUT").ok();
        let orig_format = std::env::var("SERP_FORMAT").ok();

        std::env::set_var("SERP_PROXY", "http://proxy:8080");
        std::env::set_var("SERP_TIMEOUT", "3");
        std::env::set_var("SERP_FORMAT", "markdown");

        let config = Config::new().with_env();
        assert_eq!(config.proxy, Some("http://proxy:8080".to_string()));
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.format, OutputFormat::Markdown);

        // Invalid values are ignored
        std::env::set_var("SERP_TIMEOUT", "soon");
        std::env::set_var("SERP_FORMAT", "xml");
        let config = Config::new().with_env();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.format, OutputFormat::Json);

        for (key, value) in [
            ("SERP_PROXY", orig_proxy),
            ("SERP_TIMEOUT", orig_timeout),
            ("SERP_FORMAT", orig_format),
        ] {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}
