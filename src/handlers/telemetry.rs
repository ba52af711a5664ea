// handlers/telemetry.rs - virtual fleet telemetry endpoints

use axum::extract::{Path, RawQuery};

use crate::config;
use crate::error::ApiError;
use crate::filter::{parse_leading_int, Filter, TelemetryQuery};
use crate::fleet::{self, Reading, FLEET_SIZE};
use crate::middleware::{ApiResponse, ApiResult};

/// GET /api/telemetry - query the fleet snapshot
///
/// Accepts deviceId, devicePrefix, packet, packetFrom, packetTo, sort and
/// limit as optional query parameters. Malformed values switch their stage
/// off; this endpoint always answers 200 with a (possibly empty) list.
pub async fn list(RawQuery(raw): RawQuery) -> ApiResponse<Vec<Reading>> {
    let query = TelemetryQuery::from_query_string(raw.as_deref().unwrap_or_default());
    let settings = &config::config().telemetry;

    let mut filter = Filter::new();
    filter
        .max_limit(settings.max_limit)
        .debug_logging(settings.debug_logging)
        .assign(&query);

    ApiResponse::success(filter.apply(fleet::generate_snapshot()))
}

/// GET /api/iot/telemetry - full unfiltered snapshot
pub async fn snapshot() -> ApiResponse<Vec<Reading>> {
    ApiResponse::success(fleet::generate_snapshot())
}

/// GET /api/iot/telemetry/:deviceNum - one device's current reading
pub async fn device(Path(device_num): Path<String>) -> ApiResult<Reading> {
    let n = parse_leading_int(&device_num)
        .filter(|n| (1..=i64::from(FLEET_SIZE)).contains(n))
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| ApiError::bad_request(format!("deviceNum must be 1-{}", FLEET_SIZE)))?;

    Ok(ApiResponse::success(fleet::generate_reading(n)))
}
