//! Daily PM2.5 trend aggregation from hourly archive samples.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::aqi::aqi_from_pm25;
use crate::models::{TrendPoint, TrendSummary};
use crate::round::round2;

/// One hourly sample from the historical archive. The timestamp keeps
/// the source's own timezone; only its date portion is used for
/// bucketing.
#[derive(Debug, Clone)]
pub struct HourlySample {
    pub timestamp: String,
    pub pm25: Option<f64>,
}

/// Bucket hourly samples into per-day PM2.5 averages.
///
/// Malformed timestamps and missing or non-finite values are dropped,
/// not zero-filled. Output is ascending by date regardless of input
/// order; zero usable samples yield an empty curve.
pub fn aggregate_daily(samples: &[HourlySample]) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();

    for sample in samples {
        let Some(value) = sample.pm25.filter(|v| v.is_finite()) else {
            continue;
        };
        let date_part = sample.timestamp.split('T').next().unwrap_or_default();
        let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") else {
            continue;
        };
        buckets.entry(date).or_default().push(value);
    }

    buckets
        .into_iter()
        .map(|(date, values)| {
            let avg = round2(values.iter().sum::<f64>() / values.len() as f64);
            TrendPoint {
                date,
                pm25: avg,
                aqi: aqi_from_pm25(avg),
            }
        })
        .collect()
}

/// Summary statistics over the daily curve. All-null when the curve is
/// empty; the max date is the first occurrence on ties.
pub fn summarize(points: &[TrendPoint], window_label: &str) -> TrendSummary {
    if points.is_empty() {
        return TrendSummary {
            data_points: 0,
            avg_pm25: None,
            max_pm25: None,
            max_pm25_date: None,
            window_label: window_label.to_string(),
        };
    }

    let avg = round2(points.iter().map(|p| p.pm25).sum::<f64>() / points.len() as f64);
    let mut max = &points[0];
    for point in &points[1..] {
        if point.pm25 > max.pm25 {
            max = point;
        }
    }

    TrendSummary {
        data_points: points.len(),
        avg_pm25: Some(avg),
        max_pm25: Some(max.pm25),
        max_pm25_date: Some(max.date),
        window_label: window_label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(timestamp: &str, pm25: Option<f64>) -> HourlySample {
        HourlySample {
            timestamp: timestamp.to_string(),
            pm25,
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn samples_bucket_by_calendar_day() {
        let points = aggregate_daily(&[
            sample("2024-01-01T00:00", Some(10.0)),
            sample("2024-01-01T12:00", Some(20.0)),
            sample("2024-01-02T00:00", Some(30.0)),
        ]);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, day("2024-01-01"));
        assert_eq!(points[0].pm25, 15.0);
        assert_eq!(points[1].date, day("2024-01-02"));
        assert_eq!(points[1].pm25, 30.0);
    }

    #[test]
    fn output_is_ascending_regardless_of_input_order() {
        let points = aggregate_daily(&[
            sample("2024-01-03T06:00", Some(5.0)),
            sample("2024-01-01T06:00", Some(9.0)),
            sample("2024-01-02T06:00", Some(7.0)),
        ]);
        let dates: Vec<_> = points.iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![day("2024-01-01"), day("2024-01-02"), day("2024-01-03")]
        );
    }

    #[test]
    fn invalid_samples_are_dropped_not_zero_filled() {
        let points = aggregate_daily(&[
            sample("2024-01-01T00:00", Some(10.0)),
            sample("2024-01-01T01:00", None),
            sample("2024-01-01T02:00", Some(f64::NAN)),
            sample("garbage", Some(50.0)),
        ]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].pm25, 10.0);
    }

    #[test]
    fn empty_archive_yields_empty_curve_and_null_summary() {
        let points = aggregate_daily(&[]);
        assert!(points.is_empty());

        let summary = summarize(&points, "Last 7 days");
        assert_eq!(summary.data_points, 0);
        assert_eq!(summary.avg_pm25, None);
        assert_eq!(summary.max_pm25, None);
        assert_eq!(summary.max_pm25_date, None);
        assert_eq!(summary.window_label, "Last 7 days");
    }

    #[test]
    fn summary_takes_first_occurrence_of_tied_max() {
        let points = aggregate_daily(&[
            sample("2024-01-01T00:00", Some(40.0)),
            sample("2024-01-02T00:00", Some(40.0)),
            sample("2024-01-03T00:00", Some(12.0)),
        ]);
        let summary = summarize(&points, "Last 7 days");
        assert_eq!(summary.data_points, 3);
        assert_eq!(summary.max_pm25, Some(40.0));
        assert_eq!(summary.max_pm25_date, Some(day("2024-01-01")));
        assert_eq!(summary.avg_pm25, Some(round2((40.0 + 40.0 + 12.0) / 3.0)));
    }

    #[test]
    fn daily_average_is_rounded_to_two_decimals() {
        let points = aggregate_daily(&[
            sample("2024-01-01T00:00", Some(10.0)),
            sample("2024-01-01T01:00", Some(10.0)),
            sample("2024-01-01T02:00", Some(11.0)),
        ]);
        assert_eq!(points[0].pm25, 10.33);
    }
}
