//! Report data model shared between the pipeline stages and the HTTP surface.

use chrono::NaiveDate;
use serde::Serialize;

use crate::cities::CityOverview;
use crate::window::TimeWindow;

/// Current pollutant readings for a city, as reported by the live feed.
///
/// The `aqi` field is reconciled against PM2.5 evidence before the
/// snapshot reaches any downstream stage.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PollutantSnapshot {
    pub aqi: Option<i64>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub no2: Option<f64>,
    pub co: Option<f64>,
    pub o3: Option<f64>,
    pub so2: Option<f64>,
}

/// One daily point of the PM2.5 trend curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub pm25: f64,
    pub aqi: i64,
}

/// The trend curve plus its display label.
#[derive(Debug, Clone, Serialize)]
pub struct Trend {
    pub label: String,
    pub points: Vec<TrendPoint>,
}

/// Summary statistics over the daily trend points.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub data_points: usize,
    pub avg_pm25: Option<f64>,
    pub max_pm25: Option<f64>,
    pub max_pm25_date: Option<NaiveDate>,
    pub window_label: String,
}

/// A simulated traffic-monitoring point around the city centre.
///
/// `aqi` starts as `None` and is filled by the local AQI propagator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Corridor {
    pub id: u32,
    pub name: String,
    pub issue: String,
    pub congestion_percent: f64,
    pub daily_emissions_tons: f64,
    pub aqi: Option<i64>,
    pub center_lat: f64,
    pub center_lon: f64,
}

/// Aggregate congestion statistics over one request's corridor set.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficStats {
    pub avg_congestion: Option<f64>,
    pub max_congestion: Option<f64>,
}

/// Pairwise corridor-metric correlations. A pair that cannot be
/// computed is omitted from the serialized output entirely.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Correlations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub congestion_emissions: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub congestion_aqi: Option<f64>,
}

/// Normalized pollution-source attribution. The four shares sum to 1
/// up to rounding.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Breakdown {
    pub vehicles: f64,
    pub industry: f64,
    pub construction: f64,
    pub others: f64,
}

/// Rule-based guidance grouped by audience.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub traffic_management: Vec<String>,
    pub urban_planning: Vec<String>,
    pub pollution_control: Vec<String>,
    pub citizen_awareness: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualitySection {
    pub source: String,
    pub pollutants: PollutantSnapshot,
    pub trend: Trend,
    pub monthly_insights: TrendSummary,
    /// Opaque station metadata from the live feed, passed through as-is.
    pub station: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSection {
    pub source: String,
    pub radius_km: f64,
    pub corridors: Vec<Corridor>,
    pub stats: TrafficStats,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSection {
    pub overview: CityOverview,
    pub emission_breakdown: Breakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightsSection {
    pub correlations: Correlations,
    pub recommendations: Recommendations,
}

/// The aggregate report returned for one request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoReport {
    pub city: String,
    pub time_window: TimeWindow,
    pub air_quality: AirQualitySection,
    pub traffic: TrafficSection,
    pub environment: EnvironmentSection,
    pub insights: InsightsSection,
}
