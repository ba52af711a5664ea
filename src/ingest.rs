//! Bounded in-memory buffers for data pushed by devices.
//!
//! Nothing here is persisted. Each buffer keeps at most `RECENT_CAPACITY`
//! entries and drops the oldest one when a new entry would overflow it.

use std::collections::VecDeque;

use serde::Serialize;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

pub const RECENT_CAPACITY: usize = 100;
pub const DEFAULT_RECENT_LIMIT: usize = 20;

/// One accepted ingest document, stamped on arrival.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestEntry {
    pub device_id: String,
    pub payload: Map<String, Value>,
    /// RFC 3339 UTC with millisecond precision
    pub time: String,
}

/// A validated ingest body that has not been stamped yet.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestRequest {
    pub device_id: String,
    pub payload: Map<String, Value>,
}

impl IngestRequest {
    /// Validate a raw JSON body. The error is a client-facing message naming
    /// the offending field.
    pub fn from_body(body: Value) -> Result<Self, String> {
        let Value::Object(mut fields) = body else {
            return Err("\"value\" must be of type object".to_string());
        };

        let device_id = match fields.remove("deviceId") {
            None => return Err("\"deviceId\" is required".to_string()),
            Some(Value::String(id)) if id.is_empty() => {
                return Err("\"deviceId\" is not allowed to be empty".to_string())
            }
            Some(Value::String(id)) => id,
            Some(_) => return Err("\"deviceId\" must be a string".to_string()),
        };

        let payload = match fields.remove("payload") {
            None => return Err("\"payload\" is required".to_string()),
            Some(Value::Object(payload)) => payload,
            Some(_) => return Err("\"payload\" must be of type object".to_string()),
        };

        if let Some(unknown) = fields.keys().next() {
            return Err(format!("\"{}\" is not allowed", unknown));
        }

        Ok(Self { device_id, payload })
    }

    pub fn stamp(self, time: String) -> IngestEntry {
        IngestEntry { device_id: self.device_id, payload: self.payload, time }
    }
}

/// A sensor value reported by a client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReport {
    pub name: String,
    pub value: f64,
}

impl SensorReport {
    /// Requires a non-empty string `name` and a numeric `value`.
    pub fn from_body(body: &Value) -> Option<Self> {
        let name = body.get("name")?.as_str().filter(|name| !name.is_empty())?;
        let value = body.get("value")?.as_f64()?;
        Some(Self { name: name.to_string(), value })
    }
}

/// Newest-first log that evicts its oldest entry once full.
#[derive(Debug)]
pub struct BoundedLog<T> {
    entries: RwLock<VecDeque<T>>,
    capacity: usize,
}

impl<T: Clone> BoundedLog<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub async fn push(&self, entry: T) {
        let mut entries = self.entries.write().await;
        entries.push_front(entry);
        entries.truncate(self.capacity);
    }

    /// Up to `limit` entries, newest first.
    pub async fn newest(&self, limit: usize) -> Vec<T> {
        self.entries.read().await.iter().take(limit).cloned().collect()
    }

    /// Every retained entry in arrival order.
    pub async fn oldest_first(&self) -> Vec<T> {
        self.entries.read().await.iter().rev().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Resolve the `limit` of a recent-entries request.
///
/// Missing, zero or non-numeric values fall back to `DEFAULT_RECENT_LIMIT`.
/// Everything else is clamped to `[1, RECENT_CAPACITY]`; fractions round down.
pub fn recent_limit(raw: Option<&str>) -> usize {
    let requested = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| !v.is_nan() && *v != 0.0)
        .unwrap_or(DEFAULT_RECENT_LIMIT as f64);

    requested.clamp(1.0, RECENT_CAPACITY as f64) as usize
}

/// Current time as the ingest stamp
pub fn now_stamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
