//! Comfort indices computed from occupied-time temperature readings.
//!
//! Each index reduces the series to its occupied subset and applies one
//! aggregation: a share of out-of-band readings, a severity-weighted
//! degree-hour sum, or a summary statistic. All results are rounded to two
//! decimals; share-style indices return 0 when nothing is occupied.

use crate::core::schedule::{DateRange, OccupancySchedule, SeasonSplit, SeasonalBands, SeasonalBounds};
use crate::core::series::{occupied, Reading};
use chrono::NaiveDate;
use statrs::statistics::Statistics;
use std::collections::BTreeMap;

/// Hours covered by one reading at the 15-minute sampling cadence.
const READING_INTERVAL_HOURS: f64 = 15.0 / 60.0;

/// Round to two decimal places. NaN stays NaN.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Share of `occupied` readings matched by `is_outlier`, 0 when empty.
fn outlier_share(occupied: &[Reading], is_outlier: impl Fn(&Reading) -> bool) -> f64 {
    if occupied.is_empty() {
        return 0.0;
    }
    let outside = occupied.iter().filter(|r| is_outlier(r)).count();
    round2(outside as f64 / occupied.len() as f64)
}

/// Share of occupied time outside the seasonal comfort band.
pub fn range_outlier(
    readings: &[Reading],
    range: &DateRange,
    schedule: &OccupancySchedule,
    split: &SeasonSplit,
    bands: &SeasonalBands,
) -> f64 {
    let occ = occupied(readings, range, schedule);
    outlier_share(&occ, |r| {
        let season = split.season_of(schedule.local_month(r.timestamp));
        bands.band(season).is_outside(r.value)
    })
}

/// Share of occupied time below the seasonal lower bound.
pub fn overcooling_outlier(
    readings: &[Reading],
    range: &DateRange,
    schedule: &OccupancySchedule,
    split: &SeasonSplit,
    lower: &SeasonalBounds,
) -> f64 {
    let occ = occupied(readings, range, schedule);
    outlier_share(&occ, |r| {
        let season = split.season_of(schedule.local_month(r.timestamp));
        r.value < lower.bound(season)
    })
}

/// Share of occupied time above the seasonal upper bound.
pub fn overheating_outlier(
    readings: &[Reading],
    range: &DateRange,
    schedule: &OccupancySchedule,
    split: &SeasonSplit,
    upper: &SeasonalBounds,
) -> f64 {
    let occ = occupied(readings, range, schedule);
    outlier_share(&occ, |r| {
        let season = split.season_of(schedule.local_month(r.timestamp));
        r.value > upper.bound(season)
    })
}

/// Share index for days whose occupied temperature spread exceeds
/// `threshold`.
///
/// The numerator counts offending days while the denominator counts
/// occupied readings; the mixed units are part of this index's definition.
pub fn daily_range_outlier(
    readings: &[Reading],
    range: &DateRange,
    schedule: &OccupancySchedule,
    threshold: f64,
) -> f64 {
    let occ = occupied(readings, range, schedule);
    if occ.is_empty() {
        return 0.0;
    }

    let mut spread: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for r in &occ {
        let day = schedule.local_date(r.timestamp);
        let (min, max) = spread.entry(day).or_insert((r.value, r.value));
        *min = min.min(r.value);
        *max = max.max(r.value);
    }

    let offending = spread
        .values()
        .filter(|(min, max)| max - min > threshold)
        .count();
    round2(offending as f64 / occ.len() as f64)
}

/// Arithmetic mean of two precomputed outlier shares.
pub fn combined_outlier(range_share: f64, daily_range_share: f64) -> f64 {
    round2((range_share + daily_range_share) / 2.0)
}

/// Severity-weighted degree-hours outside the seasonal comfort band.
///
/// Sums the out-of-band magnitude of every occupied reading and scales by
/// the per-reading duration.
pub fn degree_hours(
    readings: &[Reading],
    range: &DateRange,
    schedule: &OccupancySchedule,
    split: &SeasonSplit,
    bands: &SeasonalBands,
) -> f64 {
    let occ = occupied(readings, range, schedule);
    let total: f64 = occ
        .iter()
        .map(|r| {
            let season = split.season_of(schedule.local_month(r.timestamp));
            bands.band(season).excess(r.value)
        })
        .sum();
    round2(total * READING_INTERVAL_HOURS)
}

/// Mean occupied temperature. NaN when nothing is occupied.
pub fn temp_mean(
    readings: &[Reading],
    range: &DateRange,
    schedule: &OccupancySchedule,
) -> f64 {
    let occ = occupied(readings, range, schedule);
    round2(occ.iter().map(|r| r.value).mean())
}

/// Variance of occupied hourly-average temperature.
///
/// Readings are averaged per (date, hour) bucket first; the result is the
/// unbiased sample variance over those bucket means, NaN below two buckets.
pub fn temp_var(
    readings: &[Reading],
    range: &DateRange,
    schedule: &OccupancySchedule,
) -> f64 {
    let occ = occupied(readings, range, schedule);

    let mut buckets: BTreeMap<(NaiveDate, u32), Vec<f64>> = BTreeMap::new();
    for r in &occ {
        let key = (schedule.local_date(r.timestamp), schedule.local_hour(r.timestamp));
        buckets.entry(key).or_default().push(r.value);
    }

    let means: Vec<f64> = buckets
        .values()
        .map(|values| values.iter().sum::<f64>() / values.len() as f64)
        .collect();
    round2(means.variance())
}
