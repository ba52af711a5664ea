mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn single_device_reading() -> Result<()> {
    let (status, body) = common::get_json("/api/iot/telemetry/55").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deviceId"], "uno-r4-055");
    assert_eq!(body["packet"], 55);
    assert_eq!(body["label"], "Paket 55 (uno-r4-055)");
    Ok(())
}

#[tokio::test]
async fn device_number_outside_fleet_is_bad_request() -> Result<()> {
    for device in ["0", "101", "-3", "abc"] {
        let (status, body) = common::get_json(&format!("/api/iot/telemetry/{}", device)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "deviceNum={}", device);
        assert_eq!(body["message"], "deviceNum must be 1-100");
        assert_eq!(body["code"], "BAD_REQUEST");
    }
    Ok(())
}

#[tokio::test]
async fn sensor_threshold_check() -> Result<()> {
    let (status, body) = common::get_json("/api/iot/sensors/co2/1500").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "WARNING");
    assert_eq!(body["sensor"], "co2");

    let (status, body) = common::get_json("/api/iot/sensors/Luftfuktighet/55").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(body.get("reason").is_none());
    Ok(())
}

#[tokio::test]
async fn sensor_listing() -> Result<()> {
    let (status, body) = common::get_json("/api/iot/sensors").await?;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .map(|rows| rows.iter().filter_map(|r| r["name"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["temperature", "humidity", "co2"]);
    Ok(())
}
