// Shared router state: the in-memory buffers behind the push endpoints.
// The telemetry endpoints stay stateless and never touch it.

use crate::ingest::{BoundedLog, IngestEntry, SensorReport, RECENT_CAPACITY};

#[derive(Debug)]
pub struct AppState {
    pub ingested: BoundedLog<IngestEntry>,
    pub sensor_reports: BoundedLog<SensorReport>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            ingested: BoundedLog::new(RECENT_CAPACITY),
            sensor_reports: BoundedLog::new(RECENT_CAPACITY),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
