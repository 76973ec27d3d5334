//! Per-request report orchestration.

use eco_core::cities::CityProfile;
use eco_core::models::EcoReport;
use eco_core::report::{assemble_report, ReportInputs};
use eco_core::window::resolve_window;

use crate::error::ReportError;
use crate::providers::{open_meteo, waqi};
use crate::state::AppState;
use crate::traffic;

/// Fetch the three provider snapshots concurrently and assemble the
/// report. Only a live air-quality failure is fatal; the archive and
/// traffic sections degrade to empty.
pub async fn build_report(
    state: &AppState,
    profile: &'static CityProfile,
    range_token: &str,
) -> Result<EcoReport, ReportError> {
    let window = resolve_window(range_token);

    let (air, history, corridor_set) = tokio::join!(
        waqi::fetch_city_air(&state.http, &state.config, profile.name),
        open_meteo::fetch_pm25_history(
            &state.http,
            &state.config,
            profile.lat,
            profile.lon,
            window.start_date,
            window.end_date,
        ),
        traffic::fetch_corridor_set(state, profile.key),
    );

    let air = air?;

    let history = match history {
        Ok(samples) => samples,
        Err(err) => {
            tracing::warn!("historical archive degraded for {}: {}", profile.name, err);
            Vec::new()
        }
    };

    let (corridors, traffic_stats) = corridor_set;

    Ok(assemble_report(
        profile,
        ReportInputs {
            window,
            radius_km: state.config.radius_km,
            pollutants: air.pollutants,
            station: air.station,
            history,
            corridors,
            traffic_stats,
        },
    ))
}
