//! Pearson correlation over corridor metrics.

use crate::models::{Correlations, Corridor};
use crate::round::round2;

/// Pearson's correlation coefficient between two equal-length
/// sequences, rounded to 2 decimals.
///
/// Returns `None` when fewer than 2 points are available, the lengths
/// differ, or either sequence has zero variance. The caller must treat
/// `None` as "not computable", never as zero.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        numerator += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = var_x.sqrt() * var_y.sqrt();
    if denominator == 0.0 {
        return None;
    }

    Some(round2(numerator / denominator))
}

/// The two fixed correlation pairs over the corridor set. Both are
/// absent for an empty set or whenever a pair is not computable.
pub fn corridor_correlations(corridors: &[Corridor]) -> Correlations {
    if corridors.is_empty() {
        return Correlations::default();
    }

    let congestion: Vec<f64> = corridors.iter().map(|c| c.congestion_percent).collect();
    let emissions: Vec<f64> = corridors.iter().map(|c| c.daily_emissions_tons).collect();
    let aqi: Vec<f64> = corridors
        .iter()
        .filter_map(|c| c.aqi.map(|a| a as f64))
        .collect();

    Correlations {
        congestion_emissions: pearson(&congestion, &emissions),
        congestion_aqi: pearson(&congestion, &aqi),
    }
}
