use crate::core::{FetchContext, RaceDataClient};
use crate::domain::model::{RaceResults, Races};
use crate::utils::error::{PickemError, Result};
use async_trait::async_trait;
use std::collections::HashMap;

type Failure = Box<dyn Fn() -> PickemError + Send + Sync>;

/// In-memory [`RaceDataClient`] serving canned data without network access.
#[derive(Default)]
pub struct FixtureRaceDataClient {
    schedules: HashMap<String, Races>,
    results: HashMap<(String, String), RaceResults>,
    failures: HashMap<(String, Option<String>), Failure>,
}

impl FixtureRaceDataClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_races(mut self, season: &str, races: Races) -> Self {
        self.schedules.insert(season.to_string(), races);
        self
    }

    pub fn with_results(mut self, results: RaceResults) -> Self {
        self.results.insert(
            (results.season.clone(), results.race_number.clone()),
            results,
        );
        self
    }

    /// `race_number: None` makes the schedule lookup for `season` fail.
    pub fn with_failure<F>(mut self, season: &str, race_number: Option<&str>, failure: F) -> Self
    where
        F: Fn() -> PickemError + Send + Sync + 'static,
    {
        self.failures.insert(
            (season.to_string(), race_number.map(str::to_string)),
            Box::new(failure),
        );
        self
    }

    fn check_failure(&self, season: &str, race_number: Option<&str>) -> Result<()> {
        let key = (season.to_string(), race_number.map(str::to_string));
        match self.failures.get(&key) {
            Some(failure) => Err(failure()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RaceDataClient for FixtureRaceDataClient {
    async fn get_races(&self, ctx: &FetchContext, season: &str) -> Result<Races> {
        ctx.run(async {
            self.check_failure(season, None)?;
            Ok::<_, PickemError>(self.schedules.get(season).cloned().unwrap_or_default())
        })
        .await
    }

    async fn get_race_results(
        &self,
        ctx: &FetchContext,
        season: &str,
        race_number: &str,
    ) -> Result<Option<RaceResults>> {
        ctx.run(async {
            self.check_failure(season, Some(race_number))?;
            Ok::<_, PickemError>(self
                .results
                .get(&(season.to_string(), race_number.to_string()))
                .cloned())
        })
        .await
    }
}
