//! Live air-quality feed client (WAQI).

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use eco_core::models::PollutantSnapshot;

use crate::config::Config;
use crate::error::ReportError;

/// Current pollutant readings plus the opaque station metadata block.
#[derive(Debug, Clone)]
pub struct AirSnapshot {
    pub pollutants: PollutantSnapshot,
    pub station: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct WaqiEnvelope {
    status: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct WaqiFeed {
    aqi: Option<serde_json::Value>,
    #[serde(default)]
    iaqi: HashMap<String, WaqiMetric>,
    #[serde(default)]
    city: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct WaqiMetric {
    v: Option<f64>,
}

/// Fetch the current snapshot for a city. Every failure here is fatal
/// to the report: missing credential, non-2xx status, an error status
/// in the payload, or a malformed body.
pub async fn fetch_city_air(
    client: &Client,
    config: &Config,
    city_name: &str,
) -> Result<AirSnapshot, ReportError> {
    let token = config
        .waqi_api_key
        .as_deref()
        .ok_or(ReportError::MissingCredential("ECO_WAQI_API_KEY"))?;

    let url = format!(
        "{}/feed/{}/",
        config.waqi_base_url.trim_end_matches('/'),
        city_name
    );
    let response = client
        .get(&url)
        .query(&[("token", token)])
        .timeout(Duration::from_secs(config.waqi_timeout_s))
        .send()
        .await
        .map_err(|err| ReportError::provider("WAQI", err.to_string()))?;

    let status = response.status();
    tracing::debug!("WAQI {} status: {}", city_name, status);
    if !status.is_success() {
        return Err(ReportError::provider("WAQI", format!("HTTP {}", status)));
    }

    let envelope: WaqiEnvelope = response
        .json()
        .await
        .map_err(|err| ReportError::provider("WAQI", err.to_string()))?;

    if envelope.status.as_deref() != Some("ok") {
        return Err(ReportError::provider(
            "WAQI",
            format!("payload status {:?}: {}", envelope.status, envelope.data),
        ));
    }

    let feed: WaqiFeed = serde_json::from_value(envelope.data)
        .map_err(|err| ReportError::provider("WAQI", err.to_string()))?;

    let metric = |key: &str| feed.iaqi.get(key).and_then(|m| m.v);
    let pollutants = PollutantSnapshot {
        aqi: feed.aqi.as_ref().and_then(|value| value.as_i64()),
        pm25: metric("pm25"),
        pm10: metric("pm10"),
        no2: metric("no2"),
        co: metric("co"),
        o3: metric("o3"),
        so2: metric("so2"),
    };

    Ok(AirSnapshot {
        pollutants,
        station: feed.city,
    })
}
