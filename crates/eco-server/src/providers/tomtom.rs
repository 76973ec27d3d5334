//! Live traffic flow client (TomTom flow segment data).

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use eco_core::corridor::FlowReading;

use crate::config::Config;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlowEnvelope {
    flow_segment_data: Option<FlowSegment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlowSegment {
    current_speed: Option<f64>,
    free_flow_speed: Option<f64>,
}

/// Fetch the flow reading nearest to a point. A missing segment in an
/// otherwise valid payload yields an empty reading; the simulator's
/// fallback handles both that and an `Err` from this call.
pub async fn fetch_flow(
    client: &Client,
    config: &Config,
    api_key: &str,
    lat: f64,
    lon: f64,
) -> Result<FlowReading, String> {
    let response = client
        .get(&config.traffic_flow_url)
        .query(&[
            ("key", api_key.to_string()),
            ("point", format!("{:.6},{:.6}", lat, lon)),
        ])
        .timeout(Duration::from_secs(config.traffic_timeout_s))
        .send()
        .await
        .map_err(|err| err.to_string())?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("traffic provider HTTP {}", status));
    }

    let payload: FlowEnvelope = response.json().await.map_err(|err| err.to_string())?;
    let segment = payload.flow_segment_data.unwrap_or(FlowSegment {
        current_speed: None,
        free_flow_speed: None,
    });

    Ok(FlowReading {
        current_speed: segment.current_speed,
        free_flow_speed: segment.free_flow_speed,
    })
}
