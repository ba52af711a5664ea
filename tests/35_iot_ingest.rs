mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

// The test server is shared by every test in this file, so each test uses
// its own device ids and only looks at its own entries.

#[tokio::test]
async fn ingested_documents_come_back_newest_first() -> Result<()> {
    for seq in 1..=3 {
        let body = json!({ "deviceId": "ingest-order", "payload": { "seq": seq } });
        let (status, reply) = common::post_json("/api/iot/ingest", &body).await?;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(reply["accepted"], true);
    }

    let (status, body) = common::get_json("/api/iot/recent?limit=100").await?;
    assert_eq!(status, StatusCode::OK);
    let seqs: Vec<u64> = body
        .as_array()
        .map(|rows| {
            rows.iter()
                .filter(|r| r["deviceId"] == "ingest-order")
                .filter_map(|r| r["payload"]["seq"].as_u64())
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(seqs, vec![3, 2, 1]);
    Ok(())
}

#[tokio::test]
async fn invalid_ingest_body_is_bad_request() -> Result<()> {
    let (status, body) = common::post_json("/api/iot/ingest", &json!({ "deviceId": "ingest-bad" })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "\"payload\" is required");
    Ok(())
}

#[tokio::test]
async fn recent_limit_is_capped() -> Result<()> {
    let (status, body) = common::get_json("/api/iot/recent?limit=1000").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().map(|rows| rows.len() <= 100).unwrap_or(false), "{}", body);
    Ok(())
}

#[tokio::test]
async fn sensor_report_round_trip() -> Result<()> {
    let (status, body) = common::post_json("/api/iot/sensors", &json!({ "name": "smoke-it", "value": 0.5 })).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "smoke-it");

    let (status, body) = common::post_json("/api/iot/sensors", &json!({ "value": 1 })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid_body");

    let (_, body) = common::get_json("/api/iot/sensors/reported").await?;
    let found = body
        .as_array()
        .map(|rows| rows.iter().any(|r| r["name"] == "smoke-it" && r["value"] == 0.5))
        .unwrap_or(false);
    assert!(found, "{}", body);
    Ok(())
}
