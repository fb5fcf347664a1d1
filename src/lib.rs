//! Comfort Index - building-temperature comfort indices from sensor series.
//!
//! This library computes occupied-time comfort indices (range violations,
//! degree-hours, daily swing, mean/variance) over timestamped temperature
//! readings retrieved from a remote building-data service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Comfort Index                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐        │
//! │  │   Client    │──▶│  Occupied   │──▶│   Indices   │        │
//! │  │  (fetch)    │   │  reduction  │   │ (aggregate) │        │
//! │  └─────────────┘   └─────────────┘   └─────────────┘        │
//! │         │                 ▲                                 │
//! │         ▼                 │                                 │
//! │  ┌─────────────┐   ┌─────────────┐                          │
//! │  │   Config    │   │  Schedule   │                          │
//! │  │ (endpoint)  │   │ (hours/tz)  │                          │
//! │  └─────────────┘   └─────────────┘                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every index follows the same recipe: fetch a series, keep the readings
//! inside the requested date range and the weekday occupancy window, then
//! apply one reduction. The fetch is a thin collaborator; all indices also
//! accept a pre-fetched series directly, so they run against fixture data
//! without a live service.
//!
//! # Example
//!
//! ```no_run
//! use comfort_index::core::{
//!     range_outlier, ComfortBand, DateRange, OccupancySchedule, Reading,
//!     SeasonSplit, SeasonalBands,
//! };
//!
//! let readings: Vec<Reading> = Vec::new(); // normally fetched via the client
//! let range = DateRange::parse("2016-1-1", "2016-1-31").unwrap();
//! let schedule = OccupancySchedule::new(9, 17).unwrap();
//! let split = SeasonSplit::new(5, 11).unwrap();
//! let bands = SeasonalBands {
//!     summer: ComfortBand::new(70.0, 78.0),
//!     winter: ComfortBand::new(68.0, 76.0),
//! };
//!
//! let share = range_outlier(&readings, &range, &schedule, &split, &bands);
//! assert_eq!(share, 0.0);
//! ```

pub mod config;
pub mod core;

#[cfg(feature = "client")]
pub mod client;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigError};
pub use core::{
    combined_outlier, daily_range_outlier, degree_hours, overcooling_outlier,
    overheating_outlier, range_outlier, temp_mean, temp_var, ComfortBand, DateRange,
    OccupancySchedule, Reading, ScheduleError, Season, SeasonSplit, SeasonalBands, SeasonalBounds,
};

// Client re-exports (when enabled)
#[cfg(feature = "client")]
pub use client::{BlockingDataServiceClient, ClientConfig, ClientError, DataServiceClient};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
