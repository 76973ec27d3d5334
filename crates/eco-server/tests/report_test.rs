//! End-to-end report tests against a running server.
//!
//! Run with: cargo test --test report_test -- --ignored
//! Requires a running eco-server with provider credentials configured.

use reqwest::Client;

fn base_url() -> String {
    std::env::var("ECO_TEST_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

#[tokio::test]
#[ignore]
async fn health_endpoint_responds() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
#[ignore]
async fn report_has_contract_shape() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/api/eco-report", base_url()))
        .query(&[("city", "delhi"), ("range", "7days")])
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["city"], "Delhi");
    assert_eq!(body["timeWindow"]["label"], "Last 7 days");
    for key in ["airQuality", "traffic", "environment", "insights"] {
        assert!(body.get(key).is_some(), "missing section {key}");
    }
    assert!(body["airQuality"]["pollutants"].is_object());
    assert!(body["traffic"]["corridors"].is_array());
}

#[tokio::test]
#[ignore]
async fn unknown_range_token_defaults_to_seven_days() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/api/eco-report", base_url()))
        .query(&[("city", "mumbai"), ("range", "quarterly")])
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["timeWindow"]["label"], "Last 7 days");
}
