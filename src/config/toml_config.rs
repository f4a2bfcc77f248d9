use crate::adapters::ergast::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::{PickemError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const MAX_TIMEOUT_SECONDS: u64 = 120;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub ergast: Option<ErgastConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErgastConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for ErgastConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl TomlConfig {
    /// Loads and validates a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PickemError::ConfigError {
            message: format!("Unable to read config file {}: {}", path.display(), e),
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn ergast(&self) -> Result<&ErgastConfig> {
        crate::utils::validation::validate_required_field("ergast", &self.ergast)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ConfigProvider for ErgastConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Option<Duration> {
        Some(Duration::from_secs(self.timeout_seconds))
    }
}

impl Validate for ErgastConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("ergast.base_url", &self.base_url)?;
        validate_range(
            "ergast.timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        self.ergast()?.validate()?;

        if let Some(level) = self.log_level() {
            validate_non_empty_string("logging.level", level)?;
            if !["trace", "debug", "info", "warn", "error"].contains(&level) {
                return Err(PickemError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: "Expected one of trace, debug, info, warn, error".to_string(),
                });
            }
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::parse(
            r#"
[ergast]
base_url = "http://localhost:8000"
timeout_seconds = 5

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let ergast = config.ergast().unwrap();
        assert_eq!(ergast.base_url(), "http://localhost:8000");
        assert_eq!(ergast.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.log_level(), Some("debug"));
    }

    #[test]
    fn test_ergast_defaults() {
        let config = TomlConfig::parse("[ergast]\n").unwrap();
        let ergast = config.ergast().unwrap();
        assert_eq!(ergast.base_url, DEFAULT_BASE_URL);
        assert_eq!(ergast.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_missing_section_and_bad_values() {
        assert!(matches!(
            TomlConfig::parse("[logging]\nlevel = \"info\"\n"),
            Err(PickemError::MissingConfigError { .. })
        ));
        assert!(matches!(
            TomlConfig::parse("[ergast]\ntimeout_seconds = 0\n"),
            Err(PickemError::InvalidConfigValueError { .. })
        ));
        assert!(matches!(
            TomlConfig::parse("[ergast]\nbase_url = \"ftp://ergast.com\"\n"),
            Err(PickemError::InvalidConfigValueError { .. })
        ));
        assert!(matches!(
            TomlConfig::parse("[ergast]\n[logging]\nlevel = \"loud\"\n"),
            Err(PickemError::InvalidConfigValueError { .. })
        ));
        assert!(matches!(
            TomlConfig::parse("[ergast\n"),
            Err(PickemError::Toml(_))
        ));
    }
}
