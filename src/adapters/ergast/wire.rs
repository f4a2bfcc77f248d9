// Ergast API response shapes. Every leaf is text, even when it holds a number;
// interpretation happens in the client.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ScheduleResponse {
    #[serde(rename = "MRData")]
    pub(crate) mr_data: ScheduleData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScheduleData {
    pub(crate) limit: String,
    pub(crate) total: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) offset: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) series: Option<String>,
    #[serde(rename = "RaceTable")]
    pub(crate) race_table: ScheduleTable,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScheduleTable {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) season: Option<String>,
    #[serde(rename = "Races")]
    pub(crate) races: Vec<ScheduledRace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScheduledRace {
    pub(crate) season: String,
    pub(crate) round: String,
    pub(crate) race_name: String,
    pub(crate) date: String,
    // Older seasons publish no start time.
    #[serde(default)]
    pub(crate) time: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[allow(dead_code)]
    #[serde(rename = "Circuit", default)]
    pub(crate) circuit: Option<Circuit>,
    #[allow(dead_code)]
    #[serde(rename = "FirstPractice", default)]
    pub(crate) first_practice: Option<Session>,
    #[allow(dead_code)]
    #[serde(rename = "SecondPractice", default)]
    pub(crate) second_practice: Option<Session>,
    #[allow(dead_code)]
    #[serde(rename = "ThirdPractice", default)]
    pub(crate) third_practice: Option<Session>,
    #[allow(dead_code)]
    #[serde(rename = "Qualifying", default)]
    pub(crate) qualifying: Option<Session>,
    #[allow(dead_code)]
    #[serde(rename = "Sprint", default)]
    pub(crate) sprint: Option<Session>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Session {
    #[allow(dead_code)]
    pub(crate) date: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) time: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Circuit {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) circuit_id: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) circuit_name: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[allow(dead_code)]
    #[serde(rename = "Location", default)]
    pub(crate) location: Option<Location>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Location {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) lat: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) long: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) locality: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResultsResponse {
    #[serde(rename = "MRData")]
    pub(crate) mr_data: ResultsData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResultsData {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) limit: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) total: Option<String>,
    #[serde(rename = "RaceTable")]
    pub(crate) race_table: ResultsTable,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResultsTable {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) season: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) round: Option<String>,
    #[serde(rename = "Races")]
    pub(crate) races: Vec<ClassifiedRace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClassifiedRace {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) season: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) round: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) race_name: Option<String>,
    pub(crate) date: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) time: Option<String>,
    #[allow(dead_code)]
    #[serde(rename = "Circuit", default)]
    pub(crate) circuit: Option<Circuit>,
    #[serde(rename = "Results", default)]
    pub(crate) results: Vec<RaceResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RaceResult {
    pub(crate) position: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) number: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) position_text: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) points: Option<String>,
    #[serde(rename = "Driver")]
    pub(crate) driver: Driver,
    #[allow(dead_code)]
    #[serde(rename = "Constructor", default)]
    pub(crate) constructor: Option<Constructor>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) grid: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) laps: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) status: Option<String>,
    #[allow(dead_code)]
    #[serde(rename = "Time", default)]
    pub(crate) time: Option<FinishTime>,
    #[allow(dead_code)]
    #[serde(rename = "FastestLap", default)]
    pub(crate) fastest_lap: Option<FastestLap>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Driver {
    pub(crate) given_name: String,
    pub(crate) family_name: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) driver_id: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) permanent_number: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) nationality: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Constructor {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) constructor_id: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) nationality: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FinishTime {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) millis: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) time: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FastestLap {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) rank: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) lap: Option<String>,
    #[allow(dead_code)]
    #[serde(rename = "Time", default)]
    pub(crate) time: Option<LapTime>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LapTime {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) time: Option<String>,
}
