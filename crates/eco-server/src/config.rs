//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub waqi_api_key: Option<String>,
    pub tomtom_api_key: Option<String>,
    pub waqi_base_url: String,
    pub air_history_url: String,
    pub traffic_flow_url: String,
    pub waqi_timeout_s: u64,
    pub history_timeout_s: u64,
    pub traffic_timeout_s: u64,
    /// Corridor sampling radius reported in the traffic section.
    pub radius_km: f64,
}

fn non_empty(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("ECO_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            waqi_api_key: non_empty("ECO_WAQI_API_KEY"),
            tomtom_api_key: non_empty("ECO_TOMTOM_API_KEY"),
            waqi_base_url: env::var("ECO_WAQI_BASE_URL")
                .unwrap_or_else(|_| "https://api.waqi.info".to_string()),
            air_history_url: env::var("ECO_AIR_HISTORY_URL").unwrap_or_else(|_| {
                "https://air-quality-api.open-meteo.com/v1/air-quality".to_string()
            }),
            traffic_flow_url: env::var("ECO_TRAFFIC_FLOW_URL").unwrap_or_else(|_| {
                "https://api.tomtom.com/traffic/services/4/flowSegmentData/absolute/10/json"
                    .to_string()
            }),
            waqi_timeout_s: env::var("ECO_WAQI_TIMEOUT_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            history_timeout_s: env::var("ECO_HISTORY_TIMEOUT_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            traffic_timeout_s: env::var("ECO_TRAFFIC_TIMEOUT_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8),
            radius_km: env::var("ECO_RADIUS_KM")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10.0),
        }
    }
}
