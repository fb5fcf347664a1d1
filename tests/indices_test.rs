//! End-to-end tests for the comfort indices over a synthetic sensor series.

use chrono::{Duration, TimeZone, Utc};
use comfort_index::core::{
    combined_outlier, daily_range_outlier, degree_hours, occupied, overcooling_outlier,
    overheating_outlier, range_outlier, temp_mean, temp_var, ComfortBand, DateRange,
    OccupancySchedule, Reading, SeasonSplit, SeasonalBands, SeasonalBounds,
};

fn reading(mo: u32, d: u32, h: u32, mi: u32, value: f64) -> Reading {
    Reading::new(Utc.with_ymd_and_hms(2016, mo, d, h, mi, 0).unwrap(), value)
}

fn office_hours() -> OccupancySchedule {
    OccupancySchedule::new(9, 17).unwrap()
}

fn split() -> SeasonSplit {
    SeasonSplit::new(5, 11).unwrap()
}

fn bands() -> SeasonalBands {
    SeasonalBands {
        summer: ComfortBand::new(70.0, 78.0),
        winter: ComfortBand::new(68.0, 76.0),
    }
}

/// One occupied reading per weekday of the first January 2016 work week
/// (Monday the 4th through Friday the 8th), plus samples that the occupied
/// reduction must discard.
fn winter_week() -> Vec<Reading> {
    let mut readings = vec![
        reading(1, 4, 10, 0, 66.0), // below the winter band
        reading(1, 5, 10, 0, 68.0), // at the bound, inside
        reading(1, 6, 10, 0, 70.0),
        reading(1, 7, 10, 0, 72.0),
        reading(1, 8, 10, 0, 80.0), // above the winter band
    ];
    // Discarded: after hours, Saturday, outside the date range
    readings.push(reading(1, 4, 20, 0, 40.0));
    readings.push(reading(1, 9, 10, 0, 40.0));
    readings.push(reading(1, 18, 10, 0, 40.0));
    readings
}

fn january() -> DateRange {
    DateRange::parse("2016-1-1", "2016-1-15").unwrap()
}

#[test]
fn range_outlier_over_a_winter_week() {
    let p = range_outlier(&winter_week(), &january(), &office_hours(), &split(), &bands());
    // 2 of 5 occupied readings outside the winter band
    assert_eq!(p, 0.4);
}

#[test]
fn one_sided_outliers_over_a_winter_week() {
    let lower = SeasonalBounds { summer: 70.0, winter: 68.0 };
    let upper = SeasonalBounds { summer: 78.0, winter: 76.0 };

    let oc = overcooling_outlier(&winter_week(), &january(), &office_hours(), &split(), &lower);
    let oh = overheating_outlier(&winter_week(), &january(), &office_hours(), &split(), &upper);
    assert_eq!(oc, 0.2);
    assert_eq!(oh, 0.2);

    let ro = range_outlier(&winter_week(), &january(), &office_hours(), &split(), &bands());
    assert_eq!(combined_outlier(ro, oc), 0.3);
}

#[test]
fn degree_hours_over_a_winter_week() {
    // 2F below on Monday, 4F above on Friday, 6F total at a quarter hour each
    let dh = degree_hours(&winter_week(), &january(), &office_hours(), &split(), &bands());
    assert_eq!(dh, 1.5);
}

#[test]
fn mean_ignores_unoccupied_readings() {
    let m = temp_mean(&winter_week(), &january(), &office_hours());
    assert_eq!(m, 71.2);
}

#[test]
fn daily_range_outlier_flags_the_swinging_day() {
    let readings = vec![
        reading(1, 4, 9, 0, 64.0),
        reading(1, 4, 14, 0, 76.0), // Monday swings 12F
        reading(1, 5, 9, 0, 71.0),
        reading(1, 5, 10, 0, 71.5),
        reading(1, 5, 11, 0, 71.0),
        reading(1, 5, 12, 0, 71.0),
    ];
    // one offending day over six occupied readings
    let p = daily_range_outlier(&readings, &january(), &office_hours(), 10.0);
    assert_eq!(p, 0.17);
}

#[test]
fn empty_occupied_set_is_harmless() {
    let weekend_only = vec![reading(1, 9, 10, 0, 70.0), reading(1, 10, 11, 0, 71.0)];

    assert_eq!(
        range_outlier(&weekend_only, &january(), &office_hours(), &split(), &bands()),
        0.0
    );
    assert_eq!(
        daily_range_outlier(&weekend_only, &january(), &office_hours(), 10.0),
        0.0
    );
    assert_eq!(
        degree_hours(&weekend_only, &january(), &office_hours(), &split(), &bands()),
        0.0
    );
    assert!(temp_mean(&weekend_only, &january(), &office_hours()).is_nan());
}

#[test]
fn variance_runs_on_hourly_averages() {
    let readings = vec![
        reading(1, 4, 9, 0, 70.0),
        reading(1, 4, 9, 30, 72.0), // hourly mean 71
        reading(1, 4, 10, 0, 73.0),
        reading(1, 4, 10, 15, 75.0), // hourly mean 74
        reading(1, 5, 9, 0, 68.0),   // hourly mean 68
    ];
    let v = temp_var(&readings, &january(), &office_hours());
    assert_eq!(v, 9.0);
}

#[test]
fn a_dense_sampled_day_matches_hand_computation() {
    // Monday 2016-01-04 sampled every 15 minutes around the clock; only the
    // 32 samples between 09:00 and 17:00 count. The first 8 occupied samples
    // sit 1F below the winter band, the rest at 72F.
    let start = Utc.with_ymd_and_hms(2016, 1, 4, 0, 0, 0).unwrap();
    let readings: Vec<Reading> = (0..96)
        .map(|i| {
            let ts = start + Duration::minutes(15 * i);
            let value = if (36..44).contains(&i) { 67.0 } else { 72.0 };
            Reading::new(ts, value)
        })
        .collect();

    let occ = occupied(&readings, &january(), &office_hours());
    assert_eq!(occ.len(), 32);

    let p = range_outlier(&readings, &january(), &office_hours(), &split(), &bands());
    assert_eq!(p, 0.25);

    // 8 samples, 1F low, 0.25h each
    let dh = degree_hours(&readings, &january(), &office_hours(), &split(), &bands());
    assert_eq!(dh, 2.0);

    let m = temp_mean(&readings, &january(), &office_hours());
    // (8 * 67 + 24 * 72) / 32
    assert_eq!(m, 70.75);
}
