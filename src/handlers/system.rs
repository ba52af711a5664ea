// handlers/system.rs - service descriptor, health and fallback

use std::time::Instant;

use axum::{http::Uri, response::Json};
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::fleet::FLEET_SIZE;

static STARTED_AT: Lazy<Instant> = Lazy::new(Instant::now);

/// Pin the uptime origin; called when the router is built.
pub fn mark_started() {
    Lazy::force(&STARTED_AT);
}

/// GET / - service descriptor
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Telemetry API",
        "version": version,
        "description": "Synthetic IoT telemetry for a virtual fleet of Arduino Uno R4 devices",
        "endpoints": {
            "health": "/health",
            "telemetry": "/api/telemetry?deviceId=&devicePrefix=&packet=&packetFrom=&packetTo=&sort=&limit=",
            "snapshot": "/api/iot/telemetry",
            "device": "/api/iot/telemetry/:deviceNum",
            "sensors": "/api/iot/sensors",
            "sensor_check": "/api/iot/sensors/:name/:value",
            "sensor_report": "POST /api/iot/sensors",
            "sensor_reports": "/api/iot/sensors/reported",
            "ingest": "POST /api/iot/ingest",
            "recent": "/api/iot/recent?limit=",
        }
    }))
}

/// GET /health - liveness check
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "uptime_secs": STARTED_AT.elapsed().as_secs_f64(),
        "fleet_size": FLEET_SIZE,
    }))
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}
