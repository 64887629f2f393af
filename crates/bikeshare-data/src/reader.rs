//! CSV loading for the per-city trip exports.
//!
//! Each city's file is read in full, every `Start Time` is parsed, and the
//! calendar fields used by the filters and reports are derived once per row.

use std::fs::File;
use std::path::{Path, PathBuf};

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::models::{City, TripRecord, TripTable};
use bikeshare_core::time_utils::{hour_of, month_of, parse_start_time, weekday_of};
use serde::Deserialize;
use tracing::{debug, info};

// ── Raw CSV row ───────────────────────────────────────────────────────────────

/// One CSV row as exported by the bikeshare operators.
///
/// Columns not listed here (the unnamed index, `End Time`) are ignored.
/// `Gender` and `Birth Year` are absent from the Washington export.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

impl RawTrip {
    /// Validate the row and derive its calendar fields.
    ///
    /// `line` is the 1-based line number in the source file, used in errors.
    fn into_record(self, city: City, line: u64) -> Result<TripRecord> {
        let start_time =
            parse_start_time(&self.start_time).ok_or_else(|| BikeshareError::TimestampParse {
                line,
                value: self.start_time.clone(),
            })?;

        let birth_year = match self.birth_year.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(s.parse::<f64>().map_err(|_| {
                BikeshareError::InvalidBirthYear {
                    line,
                    value: s.to_string(),
                }
            })?),
        };

        Ok(TripRecord {
            city,
            start_time,
            trip_duration: self.trip_duration,
            start_station: non_blank(Some(self.start_station)),
            end_station: non_blank(Some(self.end_station)),
            user_type: non_blank(self.user_type),
            gender: non_blank(self.gender),
            birth_year,
            month: month_of(&start_time),
            day: weekday_of(&start_time),
            hour: hour_of(&start_time),
        })
    }
}

/// Treat whitespace-only cells the same as empty ones.
///
/// Applied to stations, user type and gender.
fn non_blank(cell: Option<String>) -> Option<String> {
    cell.filter(|s| !s.trim().is_empty())
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Path of `city`'s export inside `data_dir`.
pub fn city_file_path(data_dir: &Path, city: City) -> PathBuf {
    data_dir.join(city.file_name())
}

/// Load every trip for `city` from `data_dir`.
///
/// Fails on the first row that cannot be parsed; no partial table is
/// returned.
pub fn load_city_trips(data_dir: &Path, city: City) -> Result<TripTable> {
    let path = city_file_path(data_dir, city);
    debug!("Loading {} trips from {}", city.display_name(), path.display());

    let file = File::open(&path).map_err(|source| BikeshareError::FileRead {
        path: path.clone(),
        source,
    })?;
    let records = read_trips(csv::Reader::from_reader(file), city, &path)?;

    info!(
        "Loaded {} trips for {} from {}",
        records.len(),
        city.display_name(),
        path.display()
    );
    Ok(TripTable::new(city, records))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn read_trips<R: std::io::Read>(
    mut reader: csv::Reader<R>,
    city: City,
    path: &Path,
) -> Result<Vec<TripRecord>> {
    let csv_error = |source: csv::Error| BikeshareError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(csv_error)?.clone();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let raw: RawTrip = row.deserialize(Some(&headers)).map_err(csv_error)?;
        records.push(raw.into_record(city, line)?);
    }

    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
