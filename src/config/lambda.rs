use crate::adapters::ergast::DEFAULT_BASE_URL;
use crate::config::toml_config::{DEFAULT_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::{PickemError, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub log_level: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_seconds = match lookup("ERGAST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| PickemError::InvalidConfigValueError {
                    field: "ERGAST_TIMEOUT_SECONDS".to_string(),
                    value: raw.clone(),
                    reason: "Expected a whole number of seconds".to_string(),
                })?,
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        Ok(Self {
            base_url: lookup("ERGAST_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_seconds,
            log_level: lookup("LOG_LEVEL"),
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Option<Duration> {
        Some(Duration::from_secs(self.timeout_seconds))
    }
}

impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("ERGAST_BASE_URL", &self.base_url)?;
        validate_range(
            "ERGAST_TIMEOUT_SECONDS",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;

        tracing::info!("Lambda configuration validation passed");
        Ok(())
    }
}
