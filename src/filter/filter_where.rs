use crate::fleet::Reading;

use super::parse::parse_leading_int;

/// Narrowing conditions of a telemetry query.
///
/// Each field is independently optional; `None` means the stage is skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterWhere {
    pub device_id: Option<String>,
    pub device_prefix: Option<String>,
    pub packet: Option<i64>,
    pub packet_from: Option<i64>,
    pub packet_to: Option<i64>,
}

impl FilterWhere {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty strings count as absent.
    pub fn device_id(&mut self, value: &str) -> &mut Self {
        self.device_id = non_empty(value);
        self
    }

    /// Empty strings count as absent.
    pub fn device_prefix(&mut self, value: &str) -> &mut Self {
        self.device_prefix = non_empty(value);
        self
    }

    pub fn packet(&mut self, value: &str) -> &mut Self {
        self.packet = parse_leading_int(value);
        self
    }

    /// Each bound is parsed on its own; a malformed bound disables only itself.
    pub fn packet_range(&mut self, from: Option<&str>, to: Option<&str>) -> &mut Self {
        self.packet_from = from.and_then(parse_leading_int);
        self.packet_to = to.and_then(parse_leading_int);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Run the stages in their fixed order: device id, device prefix,
    /// packet, packet range.
    pub fn apply(&self, mut readings: Vec<Reading>, debug_logging: bool) -> Vec<Reading> {
        if let Some(ref id) = self.device_id {
            readings.retain(|r| r.device_id == *id);
            trace_stage(debug_logging, "deviceId", readings.len());
        }

        if let Some(ref prefix) = self.device_prefix {
            readings.retain(|r| r.device_id.starts_with(prefix.as_str()));
            trace_stage(debug_logging, "devicePrefix", readings.len());
        }

        if let Some(packet) = self.packet {
            readings.retain(|r| i64::from(r.packet) == packet);
            trace_stage(debug_logging, "packet", readings.len());
        }

        if self.packet_from.is_some() || self.packet_to.is_some() {
            readings.retain(|r| self.in_packet_range(r));
            trace_stage(debug_logging, "packetRange", readings.len());
        }

        readings
    }

    fn in_packet_range(&self, reading: &Reading) -> bool {
        let packet = i64::from(reading.packet);
        if matches!(self.packet_from, Some(from) if packet < from) {
            return false;
        }
        if matches!(self.packet_to, Some(to) if packet > to) {
            return false;
        }
        true
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn trace_stage(enabled: bool, stage: &str, remaining: usize) {
    if enabled {
        tracing::debug!(stage, remaining, "telemetry filter stage applied");
    }
}
