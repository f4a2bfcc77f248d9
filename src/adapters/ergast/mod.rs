//! HTTP-backed [`RaceDataClient`] talking to the Ergast API.

pub(crate) mod wire;

use crate::core::{ConfigProvider, FetchContext, RaceDataClient};
use crate::domain::model::{Race, RaceResults, Races, RESULTS_PER_RACE};
use crate::utils::error::{PickemError, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;
use wire::{ResultsResponse, ScheduleResponse};

pub const DEFAULT_BASE_URL: &str = "https://ergast.com";

#[derive(Debug, Clone)]
pub struct ErgastClient {
    base_url: Url,
    default_timeout: Option<Duration>,
    client: Client,
}

impl ErgastClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| PickemError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(PickemError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }

        let client = Client::builder()
            .user_agent(concat!("f1-pickem/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PickemError::ConfigError {
                message: format!("Unable to build HTTP client: {}", e),
            })?;

        Ok(Self {
            base_url,
            default_timeout: None,
            client,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(config.base_url())?.with_default_timeout(config.request_timeout()))
    }

    /// Applied to calls whose context carries no deadline of its own.
    pub fn with_default_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn default_timeout(&self) -> Option<Duration> {
        self.default_timeout
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").push("f1").extend(segments);
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, ctx: &FetchContext, url: Url) -> Result<T> {
        let ctx = match ctx.timeout() {
            Some(_) => ctx.clone(),
            None => ctx.clone().with_optional_timeout(self.default_timeout),
        };

        let body = ctx
            .run(async {
                tracing::debug!("Making API request to: {}", url);
                let response = self.client.get(url.clone()).send().await?;
                let status = response.status();
                tracing::debug!("API response status: {}", status);

                if !status.is_success() {
                    return Err(PickemError::Upstream {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                Ok::<_, PickemError>(response.bytes().await?)
            })
            .await
            .inspect_err(|e| tracing::error!("Request to {} failed: {}", url, e))?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Unable to parse response body from {}: {}", url, e);
            PickemError::Decode(e)
        })
    }
}

#[async_trait]
impl RaceDataClient for ErgastClient {
    async fn get_races(&self, ctx: &FetchContext, season: &str) -> Result<Races> {
        tracing::info!(season, "fetching races");

        let url = self.endpoint(&[&format!("{}.json", season)]);
        let schedule: ScheduleResponse = self.fetch(ctx, url).await?;

        races_from_schedule(schedule)
            .inspect(|races| tracing::debug!(season, count = races.len(), "parsed race schedule"))
            .inspect_err(|e| tracing::error!(season, "invalid race schedule: {}", e))
    }

    async fn get_race_results(
        &self,
        ctx: &FetchContext,
        season: &str,
        race_number: &str,
    ) -> Result<Option<RaceResults>> {
        tracing::info!(season, race_number, "fetching race results");

        let url = self.endpoint(&[season, race_number, "results.json"]);
        let response: ResultsResponse = self.fetch(ctx, url).await?;

        results_from_response(season, race_number, response).inspect_err(|e| {
            tracing::error!(season, race_number, "invalid race results: {}", e)
        })
    }
}

pub(crate) fn races_from_schedule(schedule: ScheduleResponse) -> Result<Races> {
    let data = schedule.mr_data;
    if data.race_table.races.is_empty() {
        // schedule not published yet
        return Ok(Vec::new());
    }

    let total = parse_count("total", &data.total)?;
    let limit = parse_count("limit", &data.limit)?;
    if total >= limit {
        tracing::warn!(total, limit, "unhandled paginated race schedule");
        return Err(PickemError::UnsupportedPagination { total, limit });
    }

    data.race_table
        .races
        .into_iter()
        .map(|race| -> Result<Race> {
            race.round.parse::<i64>().map_err(|e| {
                PickemError::validation(format!(
                    "failed to parse race round '{}': {}",
                    race.round, e
                ))
            })?;

            let race_date = parse_date(&race.date)?;
            let datetime = format!("{}T{}", race.date, race.time);
            let start_time = DateTime::parse_from_rfc3339(&datetime).map_err(|e| {
                PickemError::validation(format!(
                    "failed to parse start time '{}' of round {}: {}",
                    datetime, race.round, e
                ))
            })?;

            Ok(Race::new(
                race.season,
                race.round,
                race.race_name,
                race_date,
                start_time,
            ))
        })
        .collect()
}

pub(crate) fn results_from_response(
    season: &str,
    race_number: &str,
    response: ResultsResponse,
) -> Result<Option<RaceResults>> {
    let mut races = response.mr_data.race_table.races;
    if races.is_empty() {
        // race hasn't happened yet
        return Ok(None);
    }
    if races.len() != 1 {
        return Err(PickemError::validation(format!(
            "unexpected number of races: {}",
            races.len()
        )));
    }

    let race = races.remove(0);
    if race.results.is_empty() {
        return Ok(None);
    }
    if race.results.len() != RESULTS_PER_RACE {
        return Err(PickemError::validation(format!(
            "unexpected number of race results: {}",
            race.results.len()
        )));
    }

    let mut slots: Vec<Option<String>> = vec![None; RESULTS_PER_RACE];
    for result in race.results {
        let position = result.position.parse::<usize>().map_err(|e| {
            PickemError::validation(format!(
                "failed to parse position '{}': {}",
                result.position, e
            ))
        })?;
        if !(1..=RESULTS_PER_RACE).contains(&position) {
            return Err(PickemError::validation(format!(
                "invalid position found: {}",
                position
            )));
        }

        let name = format!("{} {}", result.driver.given_name, result.driver.family_name);
        if slots[position - 1].replace(name).is_some() {
            return Err(PickemError::validation(format!(
                "duplicate position found: {}",
                position
            )));
        }
    }

    // 20 distinct positions in 1..=20 fill every slot
    let results = slots.into_iter().flatten().collect();

    Ok(Some(RaceResults {
        season: season.to_string(),
        race_number: race_number.to_string(),
        race_date: parse_date(&race.date)?,
        results,
    }))
}

fn parse_count(field: &str, value: &str) -> Result<u32> {
    value.trim().parse().map_err(|e| {
        PickemError::validation(format!("failed to parse {} '{}': {}", field, value, e))
    })
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        PickemError::validation(format!("failed to parse race date '{}': {}", value, e))
    })
}
