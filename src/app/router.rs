use crate::app::handlers::{self, message_response, ApiRequest, ApiResponse};
use crate::core::{FetchContext, RaceDataClient};

pub const LEAGUES: &str = "/leagues";
pub const RACES: &str = "/seasons/{season}/races";
pub const RACE_RESULTS: &str = "/seasons/{season}/races/{raceNumber}/results";

/// Dispatches an API Gateway proxy request to its handler.
pub async fn route<C: RaceDataClient + ?Sized>(
    client: &C,
    ctx: &FetchContext,
    request: &ApiRequest,
) -> ApiResponse {
    match request.resource.as_str() {
        LEAGUES => handlers::get_leagues(request.query_parameter("userId")),
        RACES => match request.path_parameter("season") {
            Some(season) => handlers::get_races(client, ctx, season).await,
            None => message_response(400, "missing path parameter: season"),
        },
        RACE_RESULTS => {
            match (
                request.path_parameter("season"),
                request.path_parameter("raceNumber"),
            ) {
                (Some(season), Some(race_number)) => {
                    handlers::get_race_results(client, ctx, season, race_number).await
                }
                _ => message_response(400, "missing path parameters: season, raceNumber"),
            }
        }
        other => {
            tracing::warn!(resource = other, "no route for resource");
            message_response(404, "not found")
        }
    }
}
