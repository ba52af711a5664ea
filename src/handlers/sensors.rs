// handlers/sensors.rs - single-value threshold checks

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::error::ApiError;
use crate::ingest::SensorReport;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::threshold::{self, SensorInfo, SensorKind, ThresholdCheck};

/// GET /api/iot/sensors - known sensor kinds and their accepted ranges
pub async fn list() -> ApiResponse<Vec<SensorInfo>> {
    ApiResponse::success(threshold::sensors())
}

/// GET /api/iot/sensors/:name/:value - classify one value as OK or WARNING
pub async fn check(Path((name, value)): Path<(String, String)>) -> ApiResult<ThresholdCheck> {
    let sensor = SensorKind::from_name(&name)
        .ok_or_else(|| ApiError::not_found(format!("Unknown sensor: {}", name)))?;
    let value = threshold::parse_value(&value)
        .ok_or_else(|| ApiError::bad_request(format!("Sensor value must be a number, got '{}'", value)))?;

    let result = threshold::check(sensor, value);
    if result.reason.is_some() {
        tracing::info!(sensor = sensor.as_str(), value, "sensor value outside threshold");
    }
    Ok(ApiResponse::success(result))
}

/// POST /api/iot/sensors - record a reported `{ name, value }` pair
pub async fn report(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SensorReport>), ApiError> {
    let report = body
        .ok()
        .and_then(|Json(body)| SensorReport::from_body(&body))
        .ok_or_else(|| ApiError::bad_request("invalid_body"))?;

    state.sensor_reports.push(report.clone()).await;
    Ok((StatusCode::CREATED, Json(report)))
}

/// GET /api/iot/sensors/reported - retained reports in arrival order
pub async fn reported(State(state): State<Arc<AppState>>) -> ApiResponse<Vec<SensorReport>> {
    ApiResponse::success(state.sensor_reports.oldest_first().await)
}
