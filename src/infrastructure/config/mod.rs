//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::application::errors::ConfigError;
use crate::application::messaging::AddressMode;
use crate::application::services::docs_service::DEFAULT_DOCS_URL;
use crate::application::services::versions_service::DEFAULT_REPOSITORY;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub analyzers: Vec<AnalyzerConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    #[serde(default)]
    pub mode: AddressMode,
    #[serde(default)]
    pub maintainers: Vec<String>,
    /// Run analyzers on messages that are not addressed to the bot
    #[serde(default = "default_listen_all")]
    pub listen_all: bool,
}

fn default_listen_all() -> bool {
    true
}

/// Where command data comes from
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourcesConfig {
    pub docs: Option<PathBuf>,
    pub versions: Option<PathBuf>,
    pub events: Option<PathBuf>,
    /// Refresh docs and versions over HTTP at startup
    #[serde(default)]
    pub fetch_remote: bool,
    pub repository: String,
    pub docs_base_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            docs: None,
            versions: None,
            events: None,
            fetch_remote: false,
            repository: DEFAULT_REPOSITORY.to_string(),
            docs_base_url: DEFAULT_DOCS_URL.to_string(),
        }
    }
}

/// Keyword analyzer: reply with `reply` when `pattern` occurs in a message
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AnalyzerConfig {
    pub name: String,
    pub pattern: String,
    pub reply: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "Angie".to_string(),
                mode: AddressMode::Mention,
                maintainers: vec!["Toxicable".to_string(), "lazarljubenovic".to_string()],
                listen_all: true,
            },
            sources: SourcesConfig::default(),
            analyzers: vec![AnalyzerConfig {
                name: "angular3".to_string(),
                pattern: r"\bangular\s*3\b".to_string(),
                reply: "There is no Angular 3, the release after 2.x is Angular 4 :wink:".to_string(),
            }],
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    /// Checks that are cheaper to do here than to fail on at startup
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.name.trim().is_empty() {
            return Err(ConfigError::MissingField("bot.name".to_string()));
        }
        if self.sources.repository.split('/').filter(|p| !p.is_empty()).count() != 2 {
            return Err(ConfigError::InvalidValue(format!(
                "sources.repository must be owner/name, got '{}'",
                self.sources.repository
            )));
        }
        for analyzer in &self.analyzers {
            regex_lite::Regex::new(&analyzer.pattern).map_err(|e| {
                ConfigError::InvalidValue(format!("analyzers.{}.pattern: {}", analyzer.name, e))
            })?;
        }
        Ok(())
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Environment variables override file values
    pub fn apply_env(&mut self) {
        if let Ok(name) = std::env::var("BOT_NAME") {
            if !name.trim().is_empty() {
                self.bot.name = name;
            }
        }

        if let Ok(mode) = std::env::var("BOT_MODE") {
            match mode.to_lowercase().as_str() {
                "direct" => self.bot.mode = AddressMode::Direct,
                "mention" => self.bot.mode = AddressMode::Mention,
                other => tracing::warn!("Ignoring unknown BOT_MODE '{}'", other),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_round_trips_through_yaml() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.bot.name, "Angie");
        assert_eq!(parsed.bot.mode, AddressMode::Mention);
        assert_eq!(parsed.analyzers, config.analyzers);
        assert_eq!(parsed.sources.repository, "angular/angular");
    }

    #[test]
    fn test_load_minimal_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bot:\n  name: Bob\n  mode: direct").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.bot.name, "Bob");
        assert_eq!(config.bot.mode, AddressMode::Direct);
        assert!(config.bot.listen_all);
        assert!(config.analyzers.is_empty());
        assert!(!config.sources.fetch_remote);
    }

    #[test]
    fn test_invalid_analyzer_pattern_is_rejected() {
        let mut config = Config::default();
        config.analyzers.push(AnalyzerConfig {
            name: "broken".to_string(),
            pattern: "(".to_string(),
            reply: "x".to_string(),
        });
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_bad_repository_is_rejected() {
        let mut config = Config::default();
        config.sources.repository = "angular".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let err = Config::load("/nonexistent/angie.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
