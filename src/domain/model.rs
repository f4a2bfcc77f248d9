use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of classified finishers a results set must carry.
pub const RESULTS_PER_RACE: usize = 20;

/// Composite key of a race, derived from `(season, race_number)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RaceId(String);

impl RaceId {
    pub fn new(season: &str, race_number: &str) -> Self {
        Self(format!("{}-{}", season, race_number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub race_id: RaceId,
    pub season: String,
    pub race_number: String,
    pub race_name: String,
    pub race_date: NaiveDate,
    pub start_time: DateTime<FixedOffset>,
}

impl Race {
    pub fn new(
        season: String,
        race_number: String,
        race_name: String,
        race_date: NaiveDate,
        start_time: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            race_id: RaceId::new(&season, &race_number),
            season,
            race_number,
            race_name,
            race_date,
            start_time,
        }
    }
}

pub type Races = Vec<Race>;

/// Finishing order of a race; `results[p - 1]` is the driver classified `p`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResults {
    pub season: String,
    pub race_number: String,
    pub race_date: NaiveDate,
    pub results: Vec<String>,
}

impl RaceResults {
    pub fn race_id(&self) -> RaceId {
        RaceId::new(&self.season, &self.race_number)
    }

    pub fn driver_at(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.results.get(index))
            .map(String::as_str)
    }
}
