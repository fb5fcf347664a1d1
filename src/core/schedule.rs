//! Temporal parameters for comfort-index computation.
//!
//! Readings are reduced to "occupied time" before any aggregation: a daily
//! hour window on Monday-Friday, inside an inclusive date range. Season
//! membership is decided per reading from its wall-clock month.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Errors from constructing temporal parameters.
///
/// These are precondition failures: they are raised before any data is
/// fetched and are never silently corrected.
#[derive(Debug)]
pub enum ScheduleError {
    /// Occupancy hours must satisfy `start_hour < end_hour`, both in 0-23.
    InvalidHours { start: u32, end: u32 },
    /// Season boundary months must be in 1-12.
    InvalidMonth(u32),
    /// A date string did not parse as year-month-day.
    InvalidDate(String),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidHours { start, end } => {
                write!(f, "Invalid occupancy hours: start {start} must be below end {end} on a 24-hour clock")
            }
            ScheduleError::InvalidMonth(m) => write!(f, "Invalid month: {m}"),
            ScheduleError::InvalidDate(s) => write!(f, "Invalid date '{s}': expected year-month-day"),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// An inclusive instant range derived from two calendar dates.
///
/// Both bounds are the midnight of the given date, so a reading stamped
/// exactly at the end date's midnight is the last one admitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Parse `"YYYY-M-D"` date strings as UTC midnights.
    pub fn parse(start: &str, end: &str) -> Result<Self, ScheduleError> {
        Self::parse_in(start, end, Tz::UTC)
    }

    /// Parse `"YYYY-M-D"` date strings as midnights in the given timezone.
    pub fn parse_in(start: &str, end: &str, tz: Tz) -> Result<Self, ScheduleError> {
        Ok(Self {
            start: midnight(start, tz)?,
            end: midnight(end, tz)?,
        })
    }

    /// Check whether a timestamp falls inside the range.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}

/// Parse a date string and resolve its midnight in `tz` to a UTC instant.
fn midnight(date: &str, tz: Tz) -> Result<DateTime<Utc>, ScheduleError> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidDate(date.to_string()))?;
    // A DST gap can make midnight nonexistent in rare zones; treat it as a
    // bad date rather than guessing.
    tz.from_local_datetime(&day.and_time(NaiveTime::MIN))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| ScheduleError::InvalidDate(date.to_string()))
}

/// The daily occupied-hours window, applied Monday-Friday.
///
/// A reading at exactly `start_hour` is occupied; one at exactly `end_hour`
/// is not. Hour and weekday are taken from the reading's wall-clock time in
/// the schedule's timezone (UTC unless overridden).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OccupancySchedule {
    start_hour: u32,
    end_hour: u32,
    tz: Tz,
}

impl OccupancySchedule {
    /// Create a schedule, validating `start_hour < end_hour` in 0-23.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, ScheduleError> {
        if start_hour > 23 || end_hour > 23 || start_hour >= end_hour {
            return Err(ScheduleError::InvalidHours {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
            tz: Tz::UTC,
        })
    }

    /// Tag readings by wall-clock time in the given timezone instead of UTC.
    pub fn with_timezone(mut self, tz: Tz) -> Self {
        self.tz = tz;
        self
    }

    /// Check whether a timestamp falls in the occupied window on a weekday.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let local = timestamp.with_timezone(&self.tz);
        let hour = local.hour();
        local.weekday().num_days_from_monday() < 5
            && hour >= self.start_hour
            && hour < self.end_hour
    }

    /// Wall-clock calendar date of a timestamp.
    pub fn local_date(&self, timestamp: DateTime<Utc>) -> NaiveDate {
        timestamp.with_timezone(&self.tz).date_naive()
    }

    /// Wall-clock hour of a timestamp.
    pub fn local_hour(&self, timestamp: DateTime<Utc>) -> u32 {
        timestamp.with_timezone(&self.tz).hour()
    }

    /// Wall-clock month of a timestamp.
    pub fn local_month(&self, timestamp: DateTime<Utc>) -> u32 {
        timestamp.with_timezone(&self.tz).month()
    }
}

/// Season of a reading, decided from its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
}

/// Month-based season boundaries.
///
/// A month in `[summer_start, winter_start - 1]` is summer, everything else
/// winter. `summer_start >= winter_start` is accepted but classifies every
/// month as winter; callers wanting a real split must keep summer first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSplit {
    summer_start: u32,
    winter_start: u32,
}

impl SeasonSplit {
    /// Create a split, validating both months are in 1-12.
    pub fn new(summer_start: u32, winter_start: u32) -> Result<Self, ScheduleError> {
        for month in [summer_start, winter_start] {
            if !(1..=12).contains(&month) {
                return Err(ScheduleError::InvalidMonth(month));
            }
        }
        Ok(Self {
            summer_start,
            winter_start,
        })
    }

    /// Classify a month.
    pub fn season_of(&self, month: u32) -> Season {
        if month >= self.summer_start && month < self.winter_start {
            Season::Summer
        } else {
            Season::Winter
        }
    }
}

/// A comfort band with inclusive bounds: a value exactly at `lower` or
/// `upper` is inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortBand {
    pub lower: f64,
    pub upper: f64,
}

impl ComfortBand {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Whether a value lies strictly outside the band.
    pub fn is_outside(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }

    /// Magnitude of the violation, 0 inside the band.
    pub fn excess(&self, value: f64) -> f64 {
        if value < self.lower {
            self.lower - value
        } else if value > self.upper {
            value - self.upper
        } else {
            0.0
        }
    }
}

/// Per-season comfort bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalBands {
    pub summer: ComfortBand,
    pub winter: ComfortBand,
}

impl SeasonalBands {
    pub fn band(&self, season: Season) -> ComfortBand {
        match season {
            Season::Summer => self.summer,
            Season::Winter => self.winter,
        }
    }
}

/// A single per-season threshold, used for one-sided indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalBounds {
    pub summer: f64,
    pub winter: f64,
}

impl SeasonalBounds {
    pub fn bound(&self, season: Season) -> f64 {
        match season {
            Season::Summer => self.summer,
            Season::Winter => self.winter,
        }
    }
}
