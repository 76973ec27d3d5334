//! Corridor-set orchestration: concurrent flow fetches feeding the
//! simulator.

use futures::future;

use eco_core::cities;
use eco_core::corridor::{corridor_points, simulate_corridors, FlowReading};
use eco_core::models::{Corridor, TrafficStats};

use crate::providers::tomtom;
use crate::state::AppState;

/// Build the corridor set for a city. A missing provider key or an
/// unrecognized city key yields an empty set with null stats; that is
/// a valid terminal state, not an error.
pub async fn fetch_corridor_set(state: &AppState, city_key: &str) -> (Vec<Corridor>, TrafficStats) {
    let Some(api_key) = state.config.tomtom_api_key.as_deref() else {
        tracing::warn!("ECO_TOMTOM_API_KEY missing, skipping traffic data");
        return (Vec::new(), TrafficStats::default());
    };

    let Some(profile) = cities::lookup(city_key) else {
        return (Vec::new(), TrafficStats::default());
    };

    let fetches = corridor_points(profile)
        .into_iter()
        .map(|(lat, lon)| tomtom::fetch_flow(&state.http, &state.config, api_key, lat, lon));
    let results = future::join_all(fetches).await;

    let readings: Vec<Option<FlowReading>> = results
        .into_iter()
        .enumerate()
        .map(|(idx, result)| match result {
            Ok(reading) => Some(reading),
            Err(err) => {
                tracing::warn!(
                    "traffic flow fetch failed for {} corridor {}: {}",
                    profile.name,
                    idx + 1,
                    err
                );
                None
            }
        })
        .collect();

    // Request-local generator: concurrent requests never share RNG state.
    let mut rng = rand::rng();
    simulate_corridors(profile, &readings, &mut rng)
}
