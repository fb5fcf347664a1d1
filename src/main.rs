//! Comfort Index CLI
//!
//! Building-temperature comfort indices from remote sensor data.

use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use comfort_index::{
    client::{BlockingDataServiceClient, ClientConfig},
    config::Config,
    core::{
        combined_outlier, daily_range_outlier, degree_hours, overcooling_outlier,
        overheating_outlier, range_outlier, temp_mean, temp_var, ComfortBand, DateRange,
        OccupancySchedule, Reading, SeasonSplit, SeasonalBands, SeasonalBounds,
    },
    VERSION,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "comfort-index")]
#[command(author = "Comfort Lab")]
#[command(version = VERSION)]
#[command(about = "Building-temperature comfort indices from remote sensor data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by every index that fetches a series.
#[derive(Args)]
struct FetchArgs {
    /// Sensor identifier understood by the data service
    #[arg(long)]
    sensor: String,

    /// Start date, year-month-day (e.g. 2016-1-1)
    #[arg(long)]
    start: String,

    /// End date, year-month-day, inclusive (e.g. 2016-1-31)
    #[arg(long)]
    end: String,

    /// First hour of the occupied window, 24-hour clock
    #[arg(long, default_value_t = 9)]
    start_hour: u32,

    /// First hour after the occupied window, 24-hour clock
    #[arg(long, default_value_t = 17)]
    end_hour: u32,

    /// Data-service endpoint (overrides the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// IANA timezone for wall-clock tagging (overrides the config file)
    #[arg(long)]
    timezone: Option<String>,
}

/// Season boundary months.
#[derive(Args)]
struct SeasonArgs {
    /// First month of summer, 1-12
    #[arg(long, default_value_t = 5)]
    summer_start: u32,

    /// First month of winter, 1-12
    #[arg(long, default_value_t = 11)]
    winter_start: u32,
}

/// Per-season comfort band bounds.
#[derive(Args)]
struct BandArgs {
    /// Lower comfort bound in summer
    #[arg(long)]
    summer_lower: f64,

    /// Upper comfort bound in summer
    #[arg(long)]
    summer_upper: f64,

    /// Lower comfort bound in winter
    #[arg(long)]
    winter_lower: f64,

    /// Upper comfort bound in winter
    #[arg(long)]
    winter_upper: f64,
}

impl BandArgs {
    fn bands(&self) -> SeasonalBands {
        SeasonalBands {
            summer: ComfortBand::new(self.summer_lower, self.summer_upper),
            winter: ComfortBand::new(self.winter_lower, self.winter_upper),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Share of occupied time outside the seasonal comfort band
    RangeOutlier {
        #[command(flatten)]
        fetch: FetchArgs,
        #[command(flatten)]
        seasons: SeasonArgs,
        #[command(flatten)]
        bands: BandArgs,
    },

    /// Share of occupied time below the seasonal lower bound
    OvercoolingOutlier {
        #[command(flatten)]
        fetch: FetchArgs,
        #[command(flatten)]
        seasons: SeasonArgs,

        /// Lower comfort bound in summer
        #[arg(long)]
        summer_lower: f64,

        /// Lower comfort bound in winter
        #[arg(long)]
        winter_lower: f64,
    },

    /// Share of occupied time above the seasonal upper bound
    OverheatingOutlier {
        #[command(flatten)]
        fetch: FetchArgs,
        #[command(flatten)]
        seasons: SeasonArgs,

        /// Upper comfort bound in summer
        #[arg(long)]
        summer_upper: f64,

        /// Upper comfort bound in winter
        #[arg(long)]
        winter_upper: f64,
    },

    /// Share index of days whose occupied temperature spread exceeds a threshold
    DailyRangeOutlier {
        #[command(flatten)]
        fetch: FetchArgs,

        /// Daily spread threshold
        #[arg(long)]
        threshold: f64,
    },

    /// Mean of two precomputed outlier shares
    CombinedOutlier {
        /// Precomputed range-outlier share
        #[arg(long)]
        range_outlier: f64,

        /// Precomputed daily-range-outlier share
        #[arg(long)]
        daily_range_outlier: f64,
    },

    /// Severity-weighted degree-hours outside the seasonal comfort band
    DegreeHours {
        #[command(flatten)]
        fetch: FetchArgs,
        #[command(flatten)]
        seasons: SeasonArgs,
        #[command(flatten)]
        bands: BandArgs,
    },

    /// Mean occupied temperature
    Mean {
        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Variance of occupied hourly-average temperature
    Variance {
        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Show configuration
    Config,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::RangeOutlier { fetch, seasons, bands } => {
            let split = SeasonSplit::new(seasons.summer_start, seasons.winter_start)?;
            let (readings, range, schedule) = prepare(&fetch)?;
            print_value(range_outlier(&readings, &range, &schedule, &split, &bands.bands()));
        }
        Commands::OvercoolingOutlier { fetch, seasons, summer_lower, winter_lower } => {
            let split = SeasonSplit::new(seasons.summer_start, seasons.winter_start)?;
            let lower = SeasonalBounds {
                summer: summer_lower,
                winter: winter_lower,
            };
            let (readings, range, schedule) = prepare(&fetch)?;
            print_value(overcooling_outlier(&readings, &range, &schedule, &split, &lower));
        }
        Commands::OverheatingOutlier { fetch, seasons, summer_upper, winter_upper } => {
            let split = SeasonSplit::new(seasons.summer_start, seasons.winter_start)?;
            let upper = SeasonalBounds {
                summer: summer_upper,
                winter: winter_upper,
            };
            let (readings, range, schedule) = prepare(&fetch)?;
            print_value(overheating_outlier(&readings, &range, &schedule, &split, &upper));
        }
        Commands::DailyRangeOutlier { fetch, threshold } => {
            let (readings, range, schedule) = prepare(&fetch)?;
            print_value(daily_range_outlier(&readings, &range, &schedule, threshold));
        }
        Commands::CombinedOutlier { range_outlier, daily_range_outlier } => {
            print_value(combined_outlier(range_outlier, daily_range_outlier));
        }
        Commands::DegreeHours { fetch, seasons, bands } => {
            let split = SeasonSplit::new(seasons.summer_start, seasons.winter_start)?;
            let (readings, range, schedule) = prepare(&fetch)?;
            print_value(degree_hours(&readings, &range, &schedule, &split, &bands.bands()));
        }
        Commands::Mean { fetch } => {
            let (readings, range, schedule) = prepare(&fetch)?;
            print_value(temp_mean(&readings, &range, &schedule));
        }
        Commands::Variance { fetch } => {
            let (readings, range, schedule) = prepare(&fetch)?;
            print_value(temp_var(&readings, &range, &schedule));
        }
        Commands::Config => {
            cmd_config();
        }
    }
    Ok(())
}

/// Validate temporal parameters, then fetch the sensor series.
///
/// Parameter validation happens before the client is even constructed, so
/// a bad schedule or date never triggers a network call.
fn prepare(fetch: &FetchArgs) -> Result<(Vec<Reading>, DateRange, OccupancySchedule)> {
    let mut config = Config::load().unwrap_or_default();
    if let Some(endpoint) = &fetch.endpoint {
        config.endpoint_url = endpoint.clone();
    }
    if let Some(timezone) = &fetch.timezone {
        config.timezone = timezone.clone();
    }

    let tz: Tz = config
        .timezone
        .parse()
        .map_err(|e| anyhow!("Invalid timezone '{}': {e}", config.timezone))?;
    let schedule = OccupancySchedule::new(fetch.start_hour, fetch.end_hour)?.with_timezone(tz);
    let range = DateRange::parse_in(&fetch.start, &fetch.end, tz)?;

    let client = BlockingDataServiceClient::new(ClientConfig::from(&config))?;
    let readings = client.fetch_readings(&fetch.sensor)?;

    Ok((readings, range, schedule))
}

fn print_value(value: f64) {
    println!("{value}");
}

fn cmd_config() {
    let config = Config::load().unwrap_or_default();

    println!("Configuration");
    println!("=============");
    println!();
    println!("Config file: {:?}", Config::config_path());
    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(&config).unwrap_or_else(|_| "Error".to_string())
    );
}
