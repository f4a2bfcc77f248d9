use crate::core::context::FetchContext;
use crate::domain::model::{RaceResults, Races};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}

/// Source of race schedules and results.
///
/// An empty schedule or `None` results mean "not published yet" and are
/// never reported as errors.
#[async_trait]
pub trait RaceDataClient: Send + Sync {
    async fn get_races(&self, ctx: &FetchContext, season: &str) -> Result<Races>;

    async fn get_race_results(
        &self,
        ctx: &FetchContext,
        season: &str,
        race_number: &str,
    ) -> Result<Option<RaceResults>>;
}
