// handlers/ingest.rs - push endpoint and recent-entries buffer

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, RawQuery, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::ingest::{self, IngestEntry, IngestRequest};
use crate::middleware::ApiResponse;
use crate::state::AppState;

/// POST /api/iot/ingest - accept one `{ deviceId, payload }` document
pub async fn ingest(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let request = IngestRequest::from_body(body).map_err(ApiError::bad_request)?;

    tracing::debug!(device_id = %request.device_id, "ingest accepted");
    state.ingested.push(request.stamp(ingest::now_stamp())).await;

    Ok((StatusCode::ACCEPTED, Json(json!({ "accepted": true }))))
}

/// GET /api/iot/recent?limit= - latest ingested documents, newest first
pub async fn recent(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> ApiResponse<Vec<IngestEntry>> {
    let raw_limit = url::form_urlencoded::parse(raw.as_deref().unwrap_or_default().as_bytes())
        .find(|(key, _)| key == "limit")
        .map(|(_, value)| value.into_owned());

    let limit = ingest::recent_limit(raw_limit.as_deref());
    ApiResponse::success(state.ingested.newest(limit).await)
}
