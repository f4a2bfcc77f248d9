use f1_pickem::app::handlers::{message_response, ApiRequest, ApiResponse};
use f1_pickem::app::router;
use f1_pickem::utils::{logger, validation::Validate};
use f1_pickem::{ErgastClient, FetchContext, LambdaConfig};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

const DEADLINE_HEADROOM: Duration = Duration::from_millis(500);

async fn function_handler(
    client: &ErgastClient,
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error> {
    let request_id = event.context.request_id.clone();

    let request: ApiRequest = match serde_json::from_value(event.payload) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "failed to parse request");
            return Ok(message_response(400, "invalid request"));
        }
    };

    tracing::info!(request_id = %request_id, resource = %request.resource, "handling request");

    // Stop fetching before the invocation deadline.
    let remaining = event
        .context
        .deadline()
        .duration_since(std::time::SystemTime::now())
        .unwrap_or_default();
    let ctx = match FetchContext::within_deadline(
        remaining,
        DEADLINE_HEADROOM,
        client.default_timeout(),
    ) {
        Some(ctx) => ctx,
        None => {
            tracing::warn!(request_id = %request_id, "invocation deadline too close to fetch");
            return Ok(message_response(504, "not enough time left to fetch race data"));
        }
    };

    let response = router::route(client, &ctx, &request).await;
    tracing::info!(request_id = %request_id, status = response.status_code, "request completed");
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = LambdaConfig::from_env()?;
    logger::init_lambda_logger(config.log_level.as_deref());
    config.validate()?;

    let client = Arc::new(ErgastClient::from_config(&config)?);
    tracing::info!(base_url = %client.base_url(), "race data client ready");

    run(service_fn(move |event: LambdaEvent<Value>| {
        let client = Arc::clone(&client);
        async move { function_handler(&client, event).await }
    }))
    .await
}
