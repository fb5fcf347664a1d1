//! Sensor reading type and the occupied-time reduction.
//!
//! Every index starts the same way: keep readings inside the date range,
//! then keep those inside the weekday occupancy window. The reduction is
//! per-reading, so input order does not matter.

use crate::core::schedule::{DateRange, OccupancySchedule};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One temperature sample from a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Timestamp of the sample
    pub timestamp: DateTime<Utc>,
    /// Measured value, degrees Fahrenheit by convention
    pub value: f64,
}

impl Reading {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Reduce a series to its occupied-time subset.
pub fn occupied(
    readings: &[Reading],
    range: &DateRange,
    schedule: &OccupancySchedule,
) -> Vec<Reading> {
    let kept: Vec<Reading> = readings
        .iter()
        .filter(|r| range.contains(r.timestamp) && schedule.contains(r.timestamp))
        .copied()
        .collect();
    tracing::debug!(
        total = readings.len(),
        occupied = kept.len(),
        "reduced series to occupied time"
    );
    kept
}
