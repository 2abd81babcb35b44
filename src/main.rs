//! CLI entry point for the delay board tools.
//!
//! Provides subcommands for reconciling a station's delay observations into a
//! day of chart buckets, summarizing a station list, and shaping raw
//! departures into station update events.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use delay_board::buckets::{DelayChart, Measure, Observation, Orientation, Window, reconcile};
use delay_board::config::StationDirectory;
use delay_board::departures::feed::StationEvent;
use delay_board::departures::pin::map_pins;
use delay_board::departures::table::{SortOrder, station_rows};
use delay_board::departures::{
    Departure, StationList, refresh_avg_delays, station_with_most_delay,
};
use delay_board::format::format_delay;
use delay_board::output::{append_record, print_json, print_pretty, write_records};
use delay_board::stats::DelayStats;
use serde::de::DeserializeOwned;
use std::ffi::OsStr;
use std::fmt::Display;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "delay_board")]
#[command(about = "Shape subway departure delays for the dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AxisSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Sort {
    Asc,
    Desc,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a day of delay buckets from sparse observations
    Reconcile {
        /// JSON file with an array of observations
        #[arg(value_name = "OBSERVATIONS")]
        observations: String,

        /// Calendar day to cover (YYYY-MM-DD)
        #[arg(short, long)]
        day: NaiveDate,

        /// Bucket width in minutes
        #[arg(short, long, default_value_t = 60)]
        interval: u32,

        /// CSV file to write the buckets to
        #[arg(short, long)]
        output: Option<String>,

        /// Read labels as UTC instead of the local time zone
        #[arg(long, default_value_t = false)]
        utc: bool,
    },
    /// Build the chart view of a day and print it as JSON
    Chart {
        /// JSON file with an array of observations
        #[arg(value_name = "OBSERVATIONS")]
        observations: String,

        /// Calendar day to cover (YYYY-MM-DD)
        #[arg(short, long)]
        day: NaiveDate,

        /// Bucket width in minutes
        #[arg(short, long, default_value_t = 60)]
        interval: u32,

        /// Side of the y-axis
        #[arg(long, value_enum, default_value_t = AxisSide::Left)]
        orientation: AxisSide,

        /// Plot the share of delayed departures instead of the average delay
        #[arg(long, default_value_t = false)]
        percentage: bool,

        /// Read labels as UTC instead of the local time zone
        #[arg(long, default_value_t = false)]
        utc: bool,
    },
    /// Summarize a station list: worst station, global delay, pins and table
    Stations {
        /// JSON file with a station-id to station object
        #[arg(value_name = "STATIONS")]
        input: String,

        /// Sort order of the table by station name
        #[arg(short, long, value_enum, default_value_t = Sort::Asc)]
        sort: Sort,

        /// CSV file to write the table rows to
        #[arg(short, long)]
        table: Option<String>,

        /// CSV file to append the delay snapshot to
        #[arg(long, default_value = "stats.csv")]
        stats: String,

        /// Station id to highlight on the map
        #[arg(long)]
        updated: Option<String>,
    },
    /// Turn a raw departure list into a station update event
    Ingest {
        /// JSON file with an array of departures
        #[arg(value_name = "DEPARTURES")]
        departures: String,

        /// Station id the departures belong to
        #[arg(short, long)]
        station: String,

        /// Station directory JSON (falls back to STATION_DIRECTORY)
        #[arg(long)]
        directory: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/delay_board.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("delay_board.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Reconcile {
            observations,
            day,
            interval,
            output,
            utc,
        } => {
            let observations: Vec<Observation> = load_json(&observations)?;
            if utc {
                reconcile_day(&observations, day, interval, output.as_deref(), &Utc)?;
            } else {
                reconcile_day(&observations, day, interval, output.as_deref(), &Local)?;
            }
        }
        Commands::Chart {
            observations,
            day,
            interval,
            orientation,
            percentage,
            utc,
        } => {
            let observations: Vec<Observation> = load_json(&observations)?;
            let orientation = match orientation {
                AxisSide::Left => Orientation::Left,
                AxisSide::Right => Orientation::Right,
            };
            let measure = Measure::from_show_percentage(percentage);
            if utc {
                chart_day(&observations, day, interval, orientation, measure, &Utc)?;
            } else {
                chart_day(&observations, day, interval, orientation, measure, &Local)?;
            }
        }
        Commands::Stations {
            input,
            sort,
            table,
            stats,
            updated,
        } => {
            let mut stations: StationList = load_json(&input)?;
            refresh_avg_delays(&mut stations);
            summarize_stations(&stations, sort, table.as_deref(), &stats, updated.as_deref())?;
        }
        Commands::Ingest {
            departures,
            station,
            directory,
        } => {
            let departures: Vec<Departure> = load_json(&departures)?;
            let directory = match directory.or_else(|| std::env::var("STATION_DIRECTORY").ok()) {
                Some(path) => StationDirectory::load(&path)?,
                None => {
                    warn!("No station directory configured, names and coordinates left empty");
                    StationDirectory::default()
                }
            };

            let event = StationEvent::assemble(&station, departures, &directory);
            print_pretty(&event);
            print_json(&event)?;
        }
    }

    Ok(())
}

/// Reads and deserializes a JSON file.
fn load_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read '{path}'"))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse '{path}'"))
}

#[tracing::instrument(skip(observations, tz), fields(observations = observations.len()))]
fn reconcile_day<Tz: TimeZone>(
    observations: &[Observation],
    day: NaiveDate,
    interval: u32,
    output: Option<&str>,
    tz: &Tz,
) -> Result<()> {
    let window = Window::day(day, tz)?;
    let buckets = reconcile(observations, window, interval, tz)?;

    let filled = buckets.iter().filter(|b| !b.is_empty()).count();
    info!(buckets = buckets.len(), filled, "Reconciliation finished");

    match output {
        Some(path) => {
            write_records(path, &buckets)?;
            info!(path, "Buckets written");
        }
        None => print_json(&buckets)?,
    }
    Ok(())
}

#[tracing::instrument(skip(observations, tz))]
fn chart_day<Tz: TimeZone>(
    observations: &[Observation],
    day: NaiveDate,
    interval: u32,
    orientation: Orientation,
    measure: Measure,
    tz: &Tz,
) -> Result<()>
where
    Tz::Offset: Display,
{
    let chart = DelayChart::for_day(observations, day, interval, orientation, measure, tz)?;
    print_json(&chart)?;

    for (timestamp, lines) in chart.tooltips(tz) {
        info!(timestamp, tooltip = %lines.join(" | "), "Tooltip");
    }
    Ok(())
}

#[tracing::instrument(skip(stations), fields(stations = stations.len()))]
fn summarize_stations(
    stations: &StationList,
    sort: Sort,
    table: Option<&str>,
    stats_path: &str,
    updated: Option<&str>,
) -> Result<()> {
    let stats = DelayStats::from_stations(stations);
    info!(
        global_delay = %format_delay(stats.global_delay),
        delayed_pct = stats.delayed_pct(),
        "Network delay"
    );

    match station_with_most_delay(stations) {
        Some(worst) => info!(
            station = %worst.friendly_name,
            avg_delay = %format_delay(worst.avg_delay),
            "Most delayed station"
        ),
        None => warn!("Station list is empty"),
    }

    for pin in map_pins(stations, updated) {
        info!(
            station = %pin.friendly_name,
            color = pin.color.hex(),
            highlighted = pin.highlighted,
            "Map pin"
        );
    }

    let order = match sort {
        Sort::Asc => SortOrder::Ascending,
        Sort::Desc => SortOrder::Descending,
    };
    let rows = station_rows(stations, order);
    match table {
        Some(path) => write_records(path, &rows)?,
        None => print_json(&rows)?,
    }

    append_record(stats_path, &stats)?;
    Ok(())
}
