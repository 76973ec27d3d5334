//! Corridor simulation: fixed sampling points around the city centre,
//! congestion from live flow readings with a city-calibrated fallback,
//! emissions estimates, and local AQI propagation.

use std::cmp::Ordering;

use rand::Rng;

use crate::cities::CityProfile;
use crate::models::{Corridor, TrafficStats};
use crate::round::{round1, round2};

/// Fixed directional offsets from the city centre in degrees
/// (lat, lon, direction). Magnitudes sit roughly 4-8 km out, inside
/// the reported 10 km radius.
pub const CORRIDOR_OFFSETS: [(f64, f64, &str); 6] = [
    (0.06, 0.00, "North"),
    (-0.06, 0.00, "South"),
    (0.00, 0.08, "East"),
    (0.00, -0.08, "West"),
    (0.04, 0.06, "North-East"),
    (-0.04, -0.06, "South-West"),
];

/// Congestion readings at or below this percentage indicate a bad
/// source reading rather than true free flow.
pub const IMPLAUSIBLE_CONGESTION_PCT: f64 = 2.0;

/// Emissions scale from idle baseline (0.6) to full congestion (1.6).
const EMISSION_IDLE_FACTOR: f64 = 0.6;

/// A speed pair from the live traffic flow provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowReading {
    pub current_speed: Option<f64>,
    pub free_flow_speed: Option<f64>,
}

/// Sampling points for a city, one per corridor offset.
pub fn corridor_points(profile: &CityProfile) -> Vec<(f64, f64)> {
    CORRIDOR_OFFSETS
        .iter()
        .map(|(dlat, dlon, _)| (profile.lat + dlat, profile.lon + dlon))
        .collect()
}

/// Congestion percentage from a speed pair, rounded to 1 decimal and
/// clamped to [0, 100]. `None` when either speed is missing or the
/// free-flow speed is not positive.
pub fn congestion_from_speeds(reading: &FlowReading) -> Option<f64> {
    let current = reading.current_speed?;
    let free_flow = reading.free_flow_speed.filter(|v| *v > 0.0)?;
    Some(round1(100.0 * (1.0 - current / free_flow)).clamp(0.0, 100.0))
}

/// Draw a plausible congestion value from the city's fallback band.
pub fn fallback_congestion<R: Rng>(profile: &CityProfile, rng: &mut R) -> f64 {
    let (low, high) = profile.congestion_band;
    round1(rng.random_range(low..=high))
}

/// Daily emissions estimate in tons for a corridor at the given
/// congestion level.
pub fn estimate_emissions(profile: &CityProfile, congestion_pct: f64) -> f64 {
    round2(profile.emission_base_tons * (EMISSION_IDLE_FACTOR + congestion_pct / 100.0))
}

/// Build the corridor set from per-point flow readings.
///
/// `readings` holds one entry per corridor offset; `None` marks a
/// failed provider call. Both hard failures and implausibly low
/// readings fall back to a random draw from the city band. Corridors
/// come back sorted descending by congestion with their AQI unset;
/// the propagator fills it afterwards.
pub fn simulate_corridors<R: Rng>(
    profile: &CityProfile,
    readings: &[Option<FlowReading>],
    rng: &mut R,
) -> (Vec<Corridor>, TrafficStats) {
    let mut corridors: Vec<Corridor> = CORRIDOR_OFFSETS
        .iter()
        .enumerate()
        .map(|(idx, (dlat, dlon, direction))| {
            let congestion = match readings.get(idx).copied().flatten() {
                Some(reading) => match congestion_from_speeds(&reading) {
                    Some(pct) if pct > IMPLAUSIBLE_CONGESTION_PCT => pct,
                    // Missing speeds or a too-clean reading both mean the
                    // source is not usable at this point.
                    _ => fallback_congestion(profile, rng),
                },
                None => fallback_congestion(profile, rng),
            };

            Corridor {
                id: idx as u32 + 1,
                name: format!("{} {} Corridor", profile.name, direction),
                issue: "Traffic Congestion".to_string(),
                congestion_percent: congestion,
                daily_emissions_tons: estimate_emissions(profile, congestion),
                aqi: None,
                center_lat: profile.lat + dlat,
                center_lon: profile.lon + dlon,
            }
        })
        .collect();

    let stats = congestion_stats(&corridors);

    corridors.sort_by(|a, b| {
        b.congestion_percent
            .partial_cmp(&a.congestion_percent)
            .unwrap_or(Ordering::Equal)
    });

    (corridors, stats)
}

/// Aggregate congestion statistics, rounded to 1 decimal. Null for an
/// empty corridor set.
pub fn congestion_stats(corridors: &[Corridor]) -> TrafficStats {
    if corridors.is_empty() {
        return TrafficStats::default();
    }
    let sum: f64 = corridors.iter().map(|c| c.congestion_percent).sum();
    let max = corridors
        .iter()
        .map(|c| c.congestion_percent)
        .fold(f64::NEG_INFINITY, f64::max);
    TrafficStats {
        avg_congestion: Some(round1(sum / corridors.len() as f64)),
        max_congestion: Some(round1(max)),
    }
}

/// Congestion deviation window mapped onto the AQI deviation window:
/// +/-50 percentage points of congestion span +/-30 AQI points.
const CONGESTION_SPAN_PCT: f64 = 50.0;
const AQI_SPAN_POINTS: f64 = 30.0;

/// Fixed placeholder AQI assigned when the city-level value is
/// unavailable.
pub const FALLBACK_LOCAL_AQI: i64 = 100;

/// Distribute the city-level AQI across corridors proportionally to
/// each corridor's congestion deviation from the mean, clamped to
/// [0, 500]. Without a city AQI every corridor gets the fixed
/// placeholder instead.
pub fn propagate_local_aqi(
    city_aqi: Option<i64>,
    corridors: &mut [Corridor],
    avg_congestion: Option<f64>,
) {
    match city_aqi {
        Some(base) if !corridors.is_empty() => {
            let base = base as f64;
            let avg = avg_congestion.unwrap_or(0.0);
            for corridor in corridors.iter_mut() {
                let deviation = corridor.congestion_percent - avg;
                let local = base + (deviation / CONGESTION_SPAN_PCT) * AQI_SPAN_POINTS;
                corridor.aqi = Some(local.round().clamp(0.0, 500.0) as i64);
            }
        }
        _ => {
            for corridor in corridors.iter_mut() {
                corridor.aqi = Some(FALLBACK_LOCAL_AQI);
            }
        }
    }
}
