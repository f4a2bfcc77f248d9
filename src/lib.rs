pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ergast::ErgastClient, fixture::FixtureRaceDataClient};
pub use config::{lambda::LambdaConfig, toml_config::TomlConfig};
pub use crate::core::{CancelHandle, FetchContext, RaceDataClient};
pub use domain::model::{Race, RaceId, RaceResults, Races};
pub use utils::error::{PickemError, Result};
