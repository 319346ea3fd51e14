//! CSV loading and persistence for the historical lounge series.
//!
//! The raw history arrives as a headered CSV with columns
//! `timestamp,hour,day_of_week,is_weekend,flights,avg_passengers,crowd`.
//! Extra columns are ignored, so a previously persisted processed file
//! (which carries `prev_hour_crowd`) loads back without special casing.

use anyhow::{ensure, Context, Result};
use chrono::NaiveDateTime;
use polars::prelude::*;
use std::path::Path;

use crate::api::HistoricalRecord;

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

const INT_COLUMNS: [&str; 4] = ["hour", "day_of_week", "is_weekend", "flights"];
const FLOAT_COLUMNS: [&str; 2] = ["avg_passengers", "crowd"];

/// Parse a history CSV file into ordered records.
pub fn load_history_csv(path: &Path) -> Result<Vec<HistoricalRecord>> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.into()))
        .with_context(|| format!("failed to open {}", path.display()))?
        .finish()
        .with_context(|| format!("failed to parse {} as CSV", path.display()))?;

    dataframe_to_records(&df)
}

/// Convert a history DataFrame to records, normalizing column types first.
pub fn dataframe_to_records(df: &DataFrame) -> Result<Vec<HistoricalRecord>> {
    // Integer-looking columns may be inferred as Float64 (and booleans as
    // Boolean) depending on how the file was written; normalize everything
    // before extraction.
    let mut lazy_df = df
        .clone()
        .lazy()
        .with_column(col("timestamp").cast(DataType::String));
    for name in INT_COLUMNS {
        lazy_df = lazy_df.with_column(col(name).cast(DataType::Int64));
    }
    for name in FLOAT_COLUMNS {
        lazy_df = lazy_df.with_column(col(name).cast(DataType::Float64));
    }
    let df = lazy_df
        .collect()
        .context("failed to cast history columns to expected types")?;

    let timestamps = df.column("timestamp")?.str()?;
    let hours = df.column("hour")?.i64()?;
    let days = df.column("day_of_week")?.i64()?;
    let weekend_flags = df.column("is_weekend")?.i64()?;
    let flights = df.column("flights")?.i64()?;
    let passengers = df.column("avg_passengers")?.f64()?;
    let crowd = df.column("crowd")?.f64()?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let raw_ts = timestamps
            .get(i)
            .with_context(|| format!("missing timestamp at row {}", i))?;
        let timestamp = parse_timestamp(raw_ts)
            .with_context(|| format!("unparseable timestamp {:?} at row {}", raw_ts, i))?;

        let hour = hours
            .get(i)
            .with_context(|| format!("missing hour at row {}", i))?;
        ensure!((0..24).contains(&hour), "hour {} out of range at row {}", hour, i);

        let day_of_week = days
            .get(i)
            .with_context(|| format!("missing day_of_week at row {}", i))?;
        ensure!(
            (0..7).contains(&day_of_week),
            "day_of_week {} out of range at row {}",
            day_of_week,
            i
        );

        let flight_count = flights
            .get(i)
            .with_context(|| format!("missing flights at row {}", i))?;
        ensure!(flight_count >= 0, "negative flights at row {}", i);

        let avg_passengers = passengers
            .get(i)
            .with_context(|| format!("missing avg_passengers at row {}", i))?;
        ensure!(avg_passengers >= 0.0, "negative avg_passengers at row {}", i);

        let crowd_value = crowd
            .get(i)
            .with_context(|| format!("missing crowd at row {}", i))?;
        ensure!(crowd_value >= 0.0, "negative crowd at row {}", i);

        records.push(HistoricalRecord {
            timestamp,
            hour: hour as u8,
            day_of_week: day_of_week as u8,
            is_weekend: weekend_flags
                .get(i)
                .with_context(|| format!("missing is_weekend at row {}", i))?
                != 0,
            flights: flight_count as u32,
            avg_passengers,
            crowd: crowd_value,
        });
    }

    Ok(records)
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(ts);
        }
    }
    anyhow::bail!("no known timestamp format matched")
}

/// Write the lag-augmented table as CSV.
///
/// The first record is dropped (its lag is undefined); every remaining row
/// carries the previous row's crowd as `prev_hour_crowd`.
pub fn write_processed_csv(path: &Path, records: &[HistoricalRecord]) -> Result<()> {
    let n = records.len().saturating_sub(1);

    let mut timestamps = Vec::with_capacity(n);
    let mut hours = Vec::with_capacity(n);
    let mut days = Vec::with_capacity(n);
    let mut weekend_flags = Vec::with_capacity(n);
    let mut flights = Vec::with_capacity(n);
    let mut passengers = Vec::with_capacity(n);
    let mut lags = Vec::with_capacity(n);
    let mut crowd = Vec::with_capacity(n);

    for pair in records.windows(2) {
        let record = &pair[1];
        timestamps.push(record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
        hours.push(record.hour as i64);
        days.push(record.day_of_week as i64);
        weekend_flags.push(i64::from(record.is_weekend));
        flights.push(record.flights as i64);
        passengers.push(record.avg_passengers);
        lags.push(pair[0].crowd);
        crowd.push(record.crowd);
    }

    let mut df = df!(
        "timestamp" => timestamps,
        "hour" => hours,
        "day_of_week" => days,
        "is_weekend" => weekend_flags,
        "flights" => flights,
        "avg_passengers" => passengers,
        "prev_hour_crowd" => lags,
        "crowd" => crowd,
    )
    .context("failed to assemble processed DataFrame")?;

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("failed to write processed CSV to {}", path.display()))?;

    Ok(())
}
