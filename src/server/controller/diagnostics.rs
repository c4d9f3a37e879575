use axum::{
    extract::State,
    http::{header::USER_AGENT, HeaderMap},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::Level;

use crate::{model::api::LogTestDto, server::state::AppState};

/// Tag for grouping diagnostics endpoints in OpenAPI documentation
pub static DIAGNOSTICS_TAG: &str = "diagnostics";

const ROUTE: &str = "/test-logging";

/// Emit a test log through both pipelines.
///
/// Writes one event through the subscriber and one record straight to the APM
/// agent, so an operator can check both arrive.
#[utoipa::path(
    get,
    path = "/test-logging",
    tag = DIAGNOSTICS_TAG,
    responses(
        (status = 200, description = "Test log sent", body = LogTestDto)
    ),
)]
pub async fn test_logging(State(state): State<AppState>, headers: HeaderMap) -> Json<LogTestDto> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::info!(
        timestamp = %timestamp,
        route = ROUTE,
        user_agent = %user_agent,
        "Test log message sent to APM"
    );

    let mut metadata = Map::new();
    metadata.insert("route".to_string(), Value::String(ROUTE.to_string()));
    state
        .apm
        .send(Level::INFO, "Direct test log to APM", metadata);

    Json(LogTestDto {
        message: "Test log sent".to_string(),
        timestamp,
    })
}
