//! Threshold checks for single sensor values.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Temperature,
    Humidity,
    Co2,
}

impl SensorKind {
    /// Case-insensitive lookup; the Swedish names used by the deployed
    /// dashboards are accepted as aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "temperature" | "temperatur" | "temp" => Some(SensorKind::Temperature),
            "humidity" | "luftfuktighet" => Some(SensorKind::Humidity),
            "co2" => Some(SensorKind::Co2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "temperature",
            SensorKind::Humidity => "humidity",
            SensorKind::Co2 => "co2",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "°C",
            SensorKind::Humidity => "%",
            SensorKind::Co2 => "ppm",
        }
    }

    /// Inclusive accepted range
    pub fn range(&self) -> (f64, f64) {
        match self {
            SensorKind::Temperature => (0.0, 30.0),
            SensorKind::Humidity => (20.0, 70.0),
            SensorKind::Co2 => (0.0, 1000.0),
        }
    }

    pub fn all() -> &'static [SensorKind] {
        &[SensorKind::Temperature, SensorKind::Humidity, SensorKind::Co2]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ThresholdStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "WARNING")]
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdCheck {
    pub sensor: SensorKind,
    pub value: f64,
    pub status: ThresholdStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SensorInfo {
    pub name: SensorKind,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
}

impl From<SensorKind> for SensorInfo {
    fn from(kind: SensorKind) -> Self {
        let (min, max) = kind.range();
        Self { name: kind, unit: kind.unit(), min, max }
    }
}

pub fn sensors() -> Vec<SensorInfo> {
    SensorKind::all().iter().copied().map(SensorInfo::from).collect()
}

pub fn check(sensor: SensorKind, value: f64) -> ThresholdCheck {
    let (min, max) = sensor.range();
    if (min..=max).contains(&value) {
        ThresholdCheck { sensor, value, status: ThresholdStatus::Ok, reason: None }
    } else {
        ThresholdCheck {
            sensor,
            value,
            status: ThresholdStatus::Warning,
            reason: Some(format!("Threshold exceeded for {}", sensor.as_str())),
        }
    }
}

/// Parse a sensor value; only finite numbers are accepted.
pub fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(SensorKind::from_name("Temperatur"), Some(SensorKind::Temperature));
        assert_eq!(SensorKind::from_name("HUMIDITY"), Some(SensorKind::Humidity));
        assert_eq!(SensorKind::from_name("Luftfuktighet"), Some(SensorKind::Humidity));
        assert_eq!(SensorKind::from_name("CO2"), Some(SensorKind::Co2));
        assert_eq!(SensorKind::from_name("radon"), None);
    }

    #[test]
    fn range_edges_are_ok() {
        assert_eq!(check(SensorKind::Temperature, 30.0).status, ThresholdStatus::Ok);
        assert_eq!(check(SensorKind::Humidity, 20.0).status, ThresholdStatus::Ok);
        assert_eq!(check(SensorKind::Co2, 0.0).status, ThresholdStatus::Ok);
    }

    #[test]
    fn outside_range_warns_with_reason() {
        let result = check(SensorKind::Temperature, 31.5);
        assert_eq!(result.status, ThresholdStatus::Warning);
        assert_eq!(result.reason.as_deref(), Some("Threshold exceeded for temperature"));

        assert_eq!(check(SensorKind::Humidity, 19.9).status, ThresholdStatus::Warning);
        assert_eq!(check(SensorKind::Co2, 1200.0).status, ThresholdStatus::Warning);
    }

    #[test]
    fn check_serializes_status_strings() {
        let value = serde_json::to_value(check(SensorKind::Co2, 400.0)).unwrap();
        assert_eq!(value["sensor"], "co2");
        assert_eq!(value["status"], "OK");
        assert!(value.get("reason").is_none());
    }

    #[test]
    fn only_finite_values_parse() {
        assert_eq!(parse_value("22.5"), Some(22.5));
        assert_eq!(parse_value(" 7 "), Some(7.0));
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("inf"), None);
    }

    #[test]
    fn sensor_listing_covers_all_kinds() {
        let listing = sensors();
        assert_eq!(listing.len(), 3);
        assert_eq!(listing[2].max, 1000.0);
    }
}
