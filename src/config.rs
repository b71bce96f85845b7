use crate::engine::PredictionStrategy;
use crate::feed::http::DEFAULT_MAX_RETRIES;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the statistics snapshot comes from. `url` wins over `path`.
#[derive(Debug, Deserialize, Clone)]
pub struct StatsConfig {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Extra attempts for transport errors and 5xx responses.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            path: None,
            url: None,
            request_timeout_ms: default_request_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

impl StatsConfig {
    /// Configured stats location, if any.
    pub fn location(&self) -> Option<&str> {
        non_blank(self.url.as_deref()).or_else(|| non_blank(self.path.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ModelConfig {
    #[serde(default)]
    pub strategy: PredictionStrategy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log to this file instead of stderr.
    #[serde(default)]
    pub file: Option<String>,
}

impl LoggingConfig {
    /// Create the configured log file, if any.
    pub fn open_log_file(&self) -> Result<Option<File>> {
        let Some(path) = self.file.as_deref() else {
            return Ok(None);
        };
        let file = File::create(path).with_context(|| format!("Failed to create log file: {path}"))?;
        Ok(Some(file))
    }
}

fn default_log_filter() -> String {
    "cfb_predictor=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| "Failed to parse config TOML")?;
        Ok(config)
    }

    /// Load `path` if it exists; a missing file means all defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parses() {
        let config = Config::load(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml"))).unwrap();
        assert_eq!(config.model.strategy, PredictionStrategy::Statistics);
        assert_eq!(config.stats.location(), Some("data/teams.sample.json"));
        assert_eq!(config.stats.request_timeout_ms, 10_000);
        assert_eq!(config.stats.max_retries, 2);
        assert_eq!(config.logging.filter, "cfb_predictor=info");
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.model.strategy, PredictionStrategy::Statistics);
        assert!(config.stats.location().is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_url_wins_over_path() {
        let config: Config = toml::from_str(
            r#"
            [stats]
            path = "teams.json"
            url = "https://example.com/teams.json"
            [model]
            strategy = "simple"
            "#,
        )
        .unwrap();
        assert_eq!(config.stats.location(), Some("https://example.com/teams.json"));
        assert_eq!(config.model.strategy, PredictionStrategy::Simple);
    }

    #[test]
    fn test_blank_url_falls_back_to_path() {
        let config: Config = toml::from_str(
            r#"
            [stats]
            url = ""
            path = "teams.json"
            max_retries = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.stats.location(), Some("teams.json"));
        assert_eq!(config.stats.max_retries, 0);

        let blank: Config = toml::from_str("[stats]\nurl = \"  \"\npath = \" \"\n").unwrap();
        assert!(blank.stats.location().is_none());
    }

    #[test]
    fn test_log_file_error_names_path() {
        let logging = LoggingConfig {
            file: Some("no/such/dir/cfb.log".to_string()),
            ..LoggingConfig::default()
        };
        let err = logging.open_log_file().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to create log file: no/such/dir/cfb.log"), "got {err:#}");
        assert!(LoggingConfig::default().open_log_file().unwrap().is_none());
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(toml::from_str::<Config>("[model]\nstrategy = \"elo\"\n").is_err());
    }

    #[test]
    fn test_missing_file_defaults() {
        let config = Config::load_or_default(Path::new("no-such-config.toml")).unwrap();
        assert_eq!(config.stats.request_timeout_ms, 10_000);
    }
}
