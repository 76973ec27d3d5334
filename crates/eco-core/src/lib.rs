//! Core data-fusion and derived-metrics pipeline for city eco reports.
//!
//! Everything in this crate is pure and synchronous: the server crate
//! fetches provider snapshots, then runs them through these stages to
//! produce one [`models::EcoReport`].

pub mod aqi;
pub mod breakdown;
pub mod cities;
pub mod corridor;
pub mod models;
pub mod recommend;
pub mod report;
pub mod round;
pub mod stats;
pub mod trend;
pub mod window;

pub use aqi::{aqi_from_pm25, reconcile_aqi};
pub use breakdown::estimate_breakdown;
pub use cities::{CityOverview, CityProfile};
pub use corridor::{
    congestion_stats, corridor_points, propagate_local_aqi, simulate_corridors, FlowReading,
};
pub use models::{
    Breakdown, Correlations, Corridor, EcoReport, PollutantSnapshot, Recommendations,
    TrafficStats, Trend, TrendPoint, TrendSummary,
};
pub use recommend::recommendations_for;
pub use report::{assemble_report, ReportInputs};
pub use stats::{corridor_correlations, pearson};
pub use trend::{aggregate_daily, summarize, HourlySample};
pub use window::{resolve_window, window_ending_on, TimeWindow};
