// handlers/mod.rs - HTTP boundary layer
//
// Handlers parse path and query input, call into the fleet/filter/threshold
// modules and map failures to ApiError. Only the push endpoints (ingest and
// sensor reports) read or write the shared AppState buffers.
pub mod ingest;
pub mod sensors;
pub mod system;
pub mod telemetry;
