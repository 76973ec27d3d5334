//! AQI derivation from PM2.5 and reconciliation against the live feed.

/// Coarse stepped PM2.5 (µg/m³) to AQI mapping.
///
/// This is a fixed lookup with closed upper bounds, not the official
/// piecewise-linear breakpoint formula. The table must not change:
/// downstream reconciliation and trend curves depend on these exact
/// steps.
pub fn aqi_from_pm25(pm25: f64) -> i64 {
    if pm25 <= 30.0 {
        50
    } else if pm25 <= 60.0 {
        100
    } else if pm25 <= 90.0 {
        150
    } else if pm25 <= 120.0 {
        200
    } else if pm25 <= 250.0 {
        300
    } else {
        400
    }
}

/// Tolerance band in index points below which the live AQI is trusted
/// even when PM2.5 suggests a higher value.
const AQI_UNDERREPORT_TOLERANCE: i64 = 20;

/// Correct an implausibly low authoritative AQI using PM2.5 evidence.
///
/// The correction only raises the value: when the live feed reports
/// more than [`AQI_UNDERREPORT_TOLERANCE`] points below what PM2.5
/// implies, the derived value wins. A higher-than-derived live AQI is
/// kept unchanged, and a missing input on either side disables the
/// correction entirely.
pub fn reconcile_aqi(authoritative: Option<i64>, pm25: Option<f64>) -> Option<i64> {
    match (authoritative, pm25) {
        (Some(reported), Some(pm25)) => {
            let calculated = aqi_from_pm25(pm25);
            if reported < calculated - AQI_UNDERREPORT_TOLERANCE {
                Some(calculated)
            } else {
                Some(reported)
            }
        }
        (reported, _) => reported,
    }
}
