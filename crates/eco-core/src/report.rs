//! Report assembly: composes the pipeline stages into one response.

use crate::aqi::reconcile_aqi;
use crate::breakdown::estimate_breakdown;
use crate::cities::CityProfile;
use crate::corridor::propagate_local_aqi;
use crate::models::{
    AirQualitySection, Corridor, EcoReport, EnvironmentSection, InsightsSection,
    PollutantSnapshot, TrafficSection, TrafficStats, Trend,
};
use crate::recommend::recommendations_for;
use crate::stats::corridor_correlations;
use crate::trend::{aggregate_daily, summarize, HourlySample};
use crate::window::TimeWindow;

pub const AIR_QUALITY_SOURCE: &str = "WAQI + Open-Meteo";
pub const TRAFFIC_SOURCE: &str = "TomTom";

/// Everything the assembler needs, already fetched and simulated.
///
/// The corridor set arrives with its AQI unset; reconciliation and
/// propagation happen in here so every derived metric sees the same
/// corrected city AQI.
#[derive(Debug, Clone)]
pub struct ReportInputs {
    pub window: TimeWindow,
    pub radius_km: f64,
    pub pollutants: PollutantSnapshot,
    pub station: serde_json::Value,
    pub history: Vec<HourlySample>,
    pub corridors: Vec<Corridor>,
    pub traffic_stats: TrafficStats,
}

/// Compose the full report. Pure and deterministic: identical inputs
/// produce identical output.
pub fn assemble_report(profile: &CityProfile, inputs: ReportInputs) -> EcoReport {
    let ReportInputs {
        window,
        radius_km,
        mut pollutants,
        station,
        history,
        mut corridors,
        traffic_stats,
    } = inputs;

    pollutants.aqi = reconcile_aqi(pollutants.aqi, pollutants.pm25);
    let city_aqi = pollutants.aqi;

    let points = aggregate_daily(&history);
    let summary = summarize(&points, &window.label);
    let trend = Trend {
        label: format!("Air Quality Trend (PM2.5 → AQI) — {}", window.label),
        points,
    };

    let breakdown = estimate_breakdown(pollutants.pm25, pollutants.pm10, pollutants.no2);

    propagate_local_aqi(city_aqi, &mut corridors, traffic_stats.avg_congestion);
    let correlations = corridor_correlations(&corridors);
    let recommendations = recommendations_for(city_aqi);

    EcoReport {
        city: profile.name.to_string(),
        time_window: window,
        air_quality: AirQualitySection {
            source: AIR_QUALITY_SOURCE.to_string(),
            pollutants,
            trend,
            monthly_insights: summary,
            station,
        },
        traffic: TrafficSection {
            source: TRAFFIC_SOURCE.to_string(),
            radius_km,
            corridors,
            stats: traffic_stats,
        },
        environment: EnvironmentSection {
            overview: profile.overview,
            emission_breakdown: breakdown,
        },
        insights: InsightsSection {
            correlations,
            recommendations,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities;
    use crate::corridor::{simulate_corridors, FlowReading};
    use crate::window::window_ending_on;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_inputs() -> (&'static CityProfile, ReportInputs) {
        let profile = cities::resolve("delhi");
        let window = window_ending_on(
            "7days",
            NaiveDate::parse_from_str("2024-03-10", "%Y-%m-%d").unwrap(),
        );

        let readings: Vec<Option<FlowReading>> = (0..6)
            .map(|idx| {
                Some(FlowReading {
                    current_speed: Some(20.0 + idx as f64 * 5.0),
                    free_flow_speed: Some(60.0),
                })
            })
            .collect();
        let mut rng = StdRng::seed_from_u64(11);
        let (corridors, traffic_stats) = simulate_corridors(profile, &readings, &mut rng);

        let history = vec![
            HourlySample {
                timestamp: "2024-03-08T00:00".to_string(),
                pm25: Some(80.0),
            },
            HourlySample {
                timestamp: "2024-03-08T12:00".to_string(),
                pm25: Some(120.0),
            },
            HourlySample {
                timestamp: "2024-03-09T00:00".to_string(),
                pm25: Some(60.0),
            },
        ];

        let inputs = ReportInputs {
            window,
            radius_km: 10.0,
            pollutants: PollutantSnapshot {
                aqi: Some(70),
                pm25: Some(130.0),
                pm10: Some(90.0),
                no2: Some(55.0),
                co: Some(0.6),
                o3: Some(12.0),
                so2: Some(4.0),
            },
            station: serde_json::json!({"name": "Delhi US Embassy"}),
            history,
            corridors,
            traffic_stats,
        };
        (profile, inputs)
    }

    #[test]
    fn reconciled_aqi_flows_into_every_consumer() {
        let (profile, inputs) = fixed_inputs();
        let report = assemble_report(profile, inputs);

        // Feed AQI 70 vs PM2.5 130 (AQI 300): corrected upward.
        assert_eq!(report.air_quality.pollutants.aqi, Some(300));
        // Severe band guidance follows the corrected value.
        assert!(report.insights.recommendations.pollution_control[0].contains("red-alert"));
        // Corridor AQIs centre on the corrected value as well.
        assert!(report.traffic.corridors.iter().all(|c| c.aqi.is_some()));
        let mean_local: f64 = report
            .traffic
            .corridors
            .iter()
            .map(|c| c.aqi.unwrap() as f64)
            .sum::<f64>()
            / 6.0;
        assert!((mean_local - 300.0).abs() < 2.0);
    }

    #[test]
    fn report_shape_matches_the_contract() {
        let (profile, inputs) = fixed_inputs();
        let report = assemble_report(profile, inputs);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["city"], "Delhi");
        assert_eq!(json["timeWindow"]["label"], "Last 7 days");
        assert!(json["timeWindow"].get("startDate").is_none());
        assert_eq!(json["airQuality"]["source"], "WAQI + Open-Meteo");
        assert_eq!(json["airQuality"]["monthlyInsights"]["dataPoints"], 2);
        assert_eq!(json["traffic"]["source"], "TomTom");
        assert_eq!(json["traffic"]["radiusKm"], 10.0);
        assert_eq!(json["traffic"]["corridors"].as_array().unwrap().len(), 6);
        assert!(json["environment"]["overview"]["totalCO2Tons"].is_number());
        assert!(json["insights"]["correlations"]["congestion_emissions"].is_number());
        assert_eq!(
            json["insights"]["recommendations"]["trafficManagement"]
                .as_array()
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn identical_inputs_produce_identical_reports() {
        let (profile, inputs) = fixed_inputs();
        let a = serde_json::to_string(&assemble_report(profile, inputs.clone())).unwrap();
        let b = serde_json::to_string(&assemble_report(profile, inputs)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degraded_sections_stay_empty_without_failing() {
        let (profile, mut inputs) = fixed_inputs();
        inputs.history = Vec::new();
        inputs.corridors = Vec::new();
        inputs.traffic_stats = TrafficStats::default();

        let report = assemble_report(profile, inputs);

        assert!(report.air_quality.trend.points.is_empty());
        assert_eq!(report.air_quality.monthly_insights.data_points, 0);
        assert!(report.traffic.corridors.is_empty());
        assert_eq!(report.traffic.stats.avg_congestion, None);
        let json = serde_json::to_value(&report.insights.correlations).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
