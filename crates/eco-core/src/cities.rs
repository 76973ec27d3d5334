//! Static city profile registry.
//!
//! Each profile carries the provider-facing display name, the city
//! centre coordinates, a static environmental overview block, and the
//! simulator constants (fallback congestion band, emission base, base
//! AQI). Unknown keys resolve to the default profile rather than
//! erroring.

use serde::Serialize;

/// Static environmental overview numbers shown alongside the report.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityOverview {
    #[serde(rename = "totalCO2Tons")]
    pub total_co2_tons: f64,
    pub fuel_wasted_liters: u64,
    pub affected_population: u64,
    pub eco_score: u32,
}

#[derive(Debug, Clone)]
pub struct CityProfile {
    /// Registry key (lowercase).
    pub key: &'static str,
    /// Display name used in provider queries and corridor names.
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub overview: CityOverview,
    /// Fallback congestion band in percent, inclusive bounds.
    pub congestion_band: (f64, f64),
    /// Base daily emissions in tons for the corridor estimate.
    pub emission_base_tons: f64,
    /// Baseline AQI used by fallback estimators.
    pub base_aqi: i64,
}

/// Key of the profile substituted for unrecognized cities.
pub const DEFAULT_CITY_KEY: &str = "hyderabad";

static PROFILES: &[CityProfile] = &[
    CityProfile {
        key: "hyderabad",
        name: "Hyderabad",
        lat: 17.3850,
        lon: 78.4867,
        overview: CityOverview {
            total_co2_tons: 1.1,
            fuel_wasted_liters: 3200,
            affected_population: 9_000_000,
            eco_score: 46,
        },
        congestion_band: (30.0, 60.0),
        emission_base_tons: 2.8,
        base_aqi: 110,
    },
    CityProfile {
        key: "bangalore",
        name: "Bengaluru",
        lat: 12.9716,
        lon: 77.5946,
        overview: CityOverview {
            total_co2_tons: 1.0,
            fuel_wasted_liters: 3000,
            affected_population: 12_000_000,
            eco_score: 48,
        },
        congestion_band: (40.0, 75.0),
        emission_base_tons: 3.2,
        base_aqi: 100,
    },
    // Alias spelling of bangalore.
    CityProfile {
        key: "bengaluru",
        name: "Bengaluru",
        lat: 12.9716,
        lon: 77.5946,
        overview: CityOverview {
            total_co2_tons: 1.0,
            fuel_wasted_liters: 3000,
            affected_population: 12_000_000,
            eco_score: 48,
        },
        congestion_band: (40.0, 75.0),
        emission_base_tons: 3.2,
        base_aqi: 100,
    },
    CityProfile {
        key: "mumbai",
        name: "Mumbai",
        lat: 19.0760,
        lon: 72.8777,
        overview: CityOverview {
            total_co2_tons: 1.6,
            fuel_wasted_liters: 4700,
            affected_population: 20_000_000,
            eco_score: 42,
        },
        congestion_band: (45.0, 80.0),
        emission_base_tons: 3.8,
        base_aqi: 120,
    },
    CityProfile {
        key: "delhi",
        name: "Delhi",
        lat: 28.6139,
        lon: 77.2090,
        overview: CityOverview {
            total_co2_tons: 1.8,
            fuel_wasted_liters: 5200,
            affected_population: 33_000_000,
            eco_score: 38,
        },
        congestion_band: (50.0, 85.0),
        emission_base_tons: 4.2,
        base_aqi: 180,
    },
];

/// Look up a profile by its exact registry key.
pub fn lookup(key: &str) -> Option<&'static CityProfile> {
    PROFILES.iter().find(|profile| profile.key == key)
}

/// Resolve free-form user input to a profile, falling back to the
/// default city. Never fails.
pub fn resolve(raw: &str) -> &'static CityProfile {
    let key = raw.trim().to_lowercase();
    // The default profile is the first registry entry.
    lookup(&key).unwrap_or(&PROFILES[0])
}
