use serde_json::json;

use crate::cli::OutputFormat;
use crate::fleet::Reading;
use crate::threshold::{ThresholdCheck, ThresholdStatus};

/// Output readings as a JSON array or as an aligned text table
pub fn output_readings(output_format: &OutputFormat, readings: &[Reading]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(readings)?);
        }
        OutputFormat::Text => {
            if readings.is_empty() {
                println!("No readings matched");
                return Ok(());
            }
            for line in readings_table(readings) {
                println!("{}", line);
            }
            println!("{} reading(s)", readings.len());
        }
    }
    Ok(())
}

/// Output a threshold check result in the appropriate format
pub fn output_check(output_format: &OutputFormat, result: &ThresholdCheck) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!(result))?);
        }
        OutputFormat::Text => println!("{}", check_line(result)),
    }
    Ok(())
}

fn readings_table(readings: &[Reading]) -> Vec<String> {
    let mut lines = Vec::with_capacity(readings.len() + 1);
    lines.push(format!("{:>6}  {:<12}  {:>7}  {:>8}  {}", "PACKET", "DEVICE", "TEMP", "HUMIDITY", "TS"));
    for r in readings {
        lines.push(format!(
            "{:>6}  {:<12}  {:>7.1}  {:>8.1}  {}",
            r.packet, r.device_id, r.temperature, r.humidity, r.ts
        ));
    }
    lines
}

fn check_line(result: &ThresholdCheck) -> String {
    match (&result.status, &result.reason) {
        (ThresholdStatus::Ok, _) => format!("✓ {} {} OK", result.sensor.as_str(), result.value),
        (ThresholdStatus::Warning, Some(reason)) => {
            format!("⚠ {} {} WARNING: {}", result.sensor.as_str(), result.value, reason)
        }
        (ThresholdStatus::Warning, None) => format!("⚠ {} {} WARNING", result.sensor.as_str(), result.value),
    }
}
