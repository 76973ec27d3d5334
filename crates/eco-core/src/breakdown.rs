//! Pollution-source attribution from pollutant concentrations.

use crate::models::Breakdown;
use crate::round::round2;

/// Prior split before any threshold adjustment fires.
const PRIOR_VEHICLES: f64 = 0.50;
const PRIOR_INDUSTRY: f64 = 0.20;
const PRIOR_CONSTRUCTION: f64 = 0.20;
const PRIOR_OTHERS: f64 = 0.10;

/// Estimate the pollution-source split from PM2.5, PM10 and NO2.
///
/// Missing concentrations count as 0 for this computation only. The
/// threshold adjustments are independent and additive; `others` is
/// never boosted directly, only diluted by the final renormalization.
pub fn estimate_breakdown(pm25: Option<f64>, pm10: Option<f64>, no2: Option<f64>) -> Breakdown {
    let pm25 = pm25.unwrap_or(0.0);
    let pm10 = pm10.unwrap_or(0.0);
    let no2 = no2.unwrap_or(0.0);

    let mut vehicles = PRIOR_VEHICLES;
    let mut industry = PRIOR_INDUSTRY;
    let mut construction = PRIOR_CONSTRUCTION;
    let others = PRIOR_OTHERS;

    if pm25 > 100.0 {
        vehicles += 0.15;
        industry += 0.05;
    }
    if pm10 > 80.0 {
        construction += 0.10;
    }
    if no2 > 40.0 {
        vehicles += 0.10;
        industry += 0.05;
    }

    let total = vehicles + industry + construction + others;
    Breakdown {
        vehicles: round2(vehicles / total),
        industry: round2(industry / total),
        construction: round2(construction / total),
        others: round2(others / total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(b: &Breakdown) -> f64 {
        b.vehicles + b.industry + b.construction + b.others
    }

    #[test]
    fn prior_split_when_no_threshold_fires() {
        let b = estimate_breakdown(Some(50.0), Some(40.0), Some(20.0));
        assert_eq!(b.vehicles, 0.50);
        assert_eq!(b.industry, 0.20);
        assert_eq!(b.construction, 0.20);
        assert_eq!(b.others, 0.10);
    }

    #[test]
    fn high_pm25_boosts_vehicles_and_industry() {
        let b = estimate_breakdown(Some(150.0), Some(50.0), Some(20.0));
        // Raw shares 0.65/0.25/0.20/0.10 over a 1.20 total.
        assert_eq!(b.vehicles, 0.54);
        assert_eq!(b.industry, 0.21);
        assert_eq!(b.construction, 0.17);
        assert_eq!(b.others, 0.08);
        assert!((total(&b) - 1.0).abs() <= 0.01);
    }

    #[test]
    fn all_thresholds_can_fire_together() {
        let b = estimate_breakdown(Some(150.0), Some(100.0), Some(60.0));
        // Raw shares 0.75/0.30/0.30/0.10 over a 1.45 total.
        assert!(b.vehicles > b.industry);
        assert!(b.construction > b.others);
        assert!((total(&b) - 1.0).abs() <= 0.01);
    }

    #[test]
    fn missing_values_count_as_zero_here() {
        let b = estimate_breakdown(None, None, None);
        assert_eq!(b.vehicles, 0.50);
        assert!((total(&b) - 1.0).abs() <= 0.01);
    }
}
