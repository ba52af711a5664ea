use anyhow::anyhow;

use crate::cli::utils;
use crate::cli::OutputFormat;
use crate::threshold::{self, SensorKind};

pub fn check(sensor: &str, value: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let kind = SensorKind::from_name(sensor).ok_or_else(|| anyhow!("Unknown sensor '{}'", sensor))?;
    let value = threshold::parse_value(value).ok_or_else(|| anyhow!("Sensor value must be a number, got '{}'", value))?;

    utils::output_check(&output_format, &threshold::check(kind, value))
}
