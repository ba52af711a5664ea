use serde::{Deserialize, Serialize};

/// Number of virtual devices in the fleet
pub const FLEET_SIZE: u32 = 100;

/// Fixed part of every device identifier ("uno-r4-055" for device 55)
pub const DEVICE_ID_PREFIX: &str = "uno-r4-";

/// A single telemetry record for one device at generation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub device_id: String,
    /// Generation time in milliseconds since the Unix epoch
    pub ts: i64,
    pub temperature: f64,
    pub humidity: f64,
    /// Fleet index of the device; doubles as the sort and range key
    pub packet: u32,
    pub label: String,
}

/// Build the identifier for fleet index `n`, zero-padded to three digits.
pub fn device_id(n: u32) -> String {
    format!("{}{:03}", DEVICE_ID_PREFIX, n)
}

/// Recover the fleet index from an identifier produced by [`device_id`].
///
/// Returns `None` for anything that `device_id` could not have produced for
/// an index inside the fleet.
pub fn device_index(id: &str) -> Option<u32> {
    let suffix = id.strip_prefix(DEVICE_ID_PREFIX)?;
    if suffix.len() != 3 || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u32 = suffix.parse().ok()?;
    (1..=FLEET_SIZE).contains(&n).then_some(n)
}

pub(crate) fn label(n: u32, device_id: &str) -> String {
    format!("Paket {} ({})", n, device_id)
}
