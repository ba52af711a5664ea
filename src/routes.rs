use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{self, AppConfig};
use crate::handlers;
use crate::state::AppState;

/// Build the application router from the global configuration.
pub fn app() -> Router {
    app_with_config(config::config())
}

/// Build the router with fresh, empty push buffers.
pub fn app_with_config(config: &AppConfig) -> Router {
    app_with_state(config, Arc::new(AppState::new()))
}

pub fn app_with_state(config: &AppConfig, state: Arc<AppState>) -> Router {
    handlers::system::mark_started();

    let mut router = Router::new()
        // Public
        .route("/", get(handlers::system::root))
        .route("/health", get(handlers::system::health))
        .merge(telemetry_routes())
        .merge(sensor_routes())
        .merge(ingest_routes())
        .fallback(handlers::system::not_found);

    if config.security.enable_cors {
        router = router.layer(cors_layer(config));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    router.with_state(state)
}

fn telemetry_routes() -> Router<Arc<AppState>> {
    use handlers::telemetry;

    Router::new()
        // Filtered query over a fresh snapshot
        .route("/api/telemetry", get(telemetry::list))
        // Unfiltered snapshot and single-device lookup
        .route("/api/iot/telemetry", get(telemetry::snapshot))
        .route("/api/iot/telemetry/:device_num", get(telemetry::device))
}

fn sensor_routes() -> Router<Arc<AppState>> {
    use handlers::sensors;

    Router::new()
        .route("/api/iot/sensors", get(sensors::list).post(sensors::report))
        .route("/api/iot/sensors/reported", get(sensors::reported))
        .route("/api/iot/sensors/:name/:value", get(sensors::check))
}

fn ingest_routes() -> Router<Arc<AppState>> {
    use handlers::ingest;

    Router::new()
        .route("/api/iot/ingest", post(ingest::ingest))
        .route("/api/iot/recent", get(ingest::recent))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if config.cors_is_permissive() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}
