//! Thin request handlers rendering race data as API Gateway proxy responses.

use crate::core::{FetchContext, RaceDataClient};
use crate::domain::model::{RaceResults, Races};
use crate::utils::error::PickemError;
use crate::utils::validation::validate_identifier;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "GET,OPTIONS"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self::with_body(status_code, body),
            Err(e) => {
                tracing::error!("unable to serialize response: {}", e);
                message_response(500, "failed to render response")
            }
        }
    }

    fn with_body(status_code: u16, body: String) -> Self {
        let mut headers: HashMap<String, String> = CORS_HEADERS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code,
            headers,
            body,
        }
    }
}

pub fn message_response(status_code: u16, message: &str) -> ApiResponse {
    let body = serde_json::json!({ "message": message }).to_string();
    ApiResponse::with_body(status_code, body)
}

/// Subset of an API Gateway proxy event the handlers route on.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl ApiRequest {
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }

    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueResponse {
    pub id: String,
    pub name: String,
    pub num_of_members: u32,
    pub season: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaguesResponse {
    pub leagues: Vec<LeagueResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacesResponse {
    pub races: Races,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResultsResponse {
    pub race_results: Option<RaceResults>,
}

/// League storage is not wired up yet; every user sees the same league.
pub fn get_leagues(user_id: Option<&str>) -> ApiResponse {
    tracing::info!(user_id = user_id.unwrap_or("anonymous"), "listing leagues");

    let response = LeaguesResponse {
        leagues: vec![LeagueResponse {
            id: "1".to_string(),
            name: "Fast Boiz".to_string(),
            num_of_members: 11,
            season: "2022".to_string(),
        }],
    };
    ApiResponse::json(200, &response)
}

pub async fn get_races<C: RaceDataClient + ?Sized>(
    client: &C,
    ctx: &FetchContext,
    season: &str,
) -> ApiResponse {
    if let Err(e) = validate_identifier("season", season) {
        return message_response(400, &e.to_string());
    }

    match client.get_races(ctx, season).await {
        Ok(races) => ApiResponse::json(200, &RacesResponse { races }),
        Err(e) => error_response(&e),
    }
}

pub async fn get_race_results<C: RaceDataClient + ?Sized>(
    client: &C,
    ctx: &FetchContext,
    season: &str,
    race_number: &str,
) -> ApiResponse {
    if let Err(e) = validate_identifier("season", season)
        .and_then(|_| validate_identifier("race_number", race_number))
    {
        return message_response(400, &e.to_string());
    }

    match client.get_race_results(ctx, season, race_number).await {
        Ok(race_results) => ApiResponse::json(200, &RaceResultsResponse { race_results }),
        Err(e) => error_response(&e),
    }
}

pub fn error_response(error: &PickemError) -> ApiResponse {
    let status = match error {
        PickemError::TimedOut(_) => 504,
        PickemError::Cancelled
        | PickemError::Transport(_)
        | PickemError::Upstream { .. }
        | PickemError::Decode(_)
        | PickemError::Validation { .. }
        | PickemError::UnsupportedPagination { .. } => 502,
        _ => 500,
    };
    tracing::error!(status, category = ?error.category(), "request failed: {}", error);
    message_response(status, &error.user_friendly_message())
}
