//! Core functionality for comfort-index.
//!
//! This module contains:
//! - Temporal parameters (date range, occupancy schedule, season split)
//! - The sensor reading type and the occupied-time reduction
//! - The comfort index aggregations

pub mod indices;
pub mod schedule;
pub mod series;

// Re-export commonly used types
pub use indices::{
    combined_outlier, daily_range_outlier, degree_hours, overcooling_outlier,
    overheating_outlier, range_outlier, temp_mean, temp_var,
};
pub use schedule::{
    ComfortBand, DateRange, OccupancySchedule, ScheduleError, Season, SeasonSplit, SeasonalBands,
    SeasonalBounds,
};
pub use series::{occupied, Reading};
