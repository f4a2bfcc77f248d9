pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use crate::adapters::ergast::DEFAULT_BASE_URL;
    use crate::config::toml_config::{TomlConfig, MAX_TIMEOUT_SECONDS};
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::{Parser, Subcommand};
    use std::time::Duration;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "f1-pickem")]
    #[command(about = "Fetch Formula 1 schedules and results from the Ergast API")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        pub base_url: String,

        #[arg(long, default_value = "10")]
        pub timeout_seconds: u64,

        #[arg(long, help = "TOML file overriding --base-url and --timeout-seconds")]
        pub config: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// List the race schedule of a season
        Races { season: String },
        /// Show the finishing order of one race
        Results { season: String, race_number: String },
    }

    impl CliConfig {
        /// Applies the `[ergast]` section of `--config`, if given.
        pub fn resolve(mut self) -> Result<Self> {
            if let Some(path) = &self.config {
                let file = TomlConfig::from_file(path)?;
                let ergast = file.ergast()?;
                self.base_url = ergast.base_url.clone();
                self.timeout_seconds = ergast.timeout_seconds;
            }
            Ok(self)
        }
    }

    impl ConfigProvider for CliConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn request_timeout(&self) -> Option<Duration> {
            Some(Duration::from_secs(self.timeout_seconds))
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            use crate::utils::validation::*;

            validate_url("base_url", &self.base_url)?;
            validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
            match &self.command {
                Command::Races { season } => validate_identifier("season", season)?,
                Command::Results {
                    season,
                    race_number,
                } => {
                    validate_identifier("season", season)?;
                    validate_identifier("race_number", race_number)?;
                }
            }
            Ok(())
        }
    }

}
