//! Historical PM2.5 archive client (Open-Meteo air-quality API).

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use eco_core::trend::HourlySample;

use crate::config::Config;

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    hourly: Option<HourlyBlock>,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    #[serde(default)]
    time: Vec<String>,
    #[serde(rename = "pm2_5", default)]
    pm25: Vec<Option<f64>>,
}

/// Fetch hourly PM2.5 samples for a closed date range. The range must
/// not extend past today; the window resolver guarantees that. Errors
/// are for the caller to degrade on, never to abort the report.
pub async fn fetch_pm25_history(
    client: &Client,
    config: &Config,
    lat: f64,
    lon: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<HourlySample>, String> {
    let response = client
        .get(&config.air_history_url)
        .query(&[
            ("latitude", lat.to_string()),
            ("longitude", lon.to_string()),
            ("start_date", start_date.to_string()),
            ("end_date", end_date.to_string()),
            ("hourly", "pm2_5".to_string()),
        ])
        .timeout(Duration::from_secs(config.history_timeout_s))
        .send()
        .await
        .map_err(|err| err.to_string())?;

    let status = response.status();
    tracing::debug!("Open-Meteo archive status: {}", status);
    if !status.is_success() {
        return Err(format!("archive provider HTTP {}", status));
    }

    let payload: HistoryResponse = response.json().await.map_err(|err| err.to_string())?;
    let Some(hourly) = payload.hourly else {
        return Ok(Vec::new());
    };

    if hourly.time.len() != hourly.pm25.len() {
        return Err("archive returned mismatched sample counts".to_string());
    }

    Ok(hourly
        .time
        .into_iter()
        .zip(hourly.pm25)
        .map(|(timestamp, pm25)| HourlySample { timestamp, pm25 })
        .collect())
}
