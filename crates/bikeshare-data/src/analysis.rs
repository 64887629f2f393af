//! Dataset loading pipeline for one run of the explorer.
//!
//! Loads the selected city's trips, applies the month and day filters, and
//! optionally prints a preview of the filtered rows before handing the table
//! to the reporters.

use std::io::Write;
use std::path::Path;

use bikeshare_core::error::Result;
use bikeshare_core::models::{
    City, DayFilter, FilterSelection, MonthFilter, TripRecord, TripTable,
};
use tracing::info;

use crate::reader::load_city_trips;

/// Number of rows shown when the user asks for raw data.
pub const PREVIEW_ROWS: usize = 5;

const PREVIEW_HEADERS: [&str; 11] = [
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
    "Gender",
    "Birth Year",
    "month",
    "day",
    "hour",
    "city",
];

/// Columns only present in exports of cities that publish demographics.
const DEMOGRAPHIC_HEADERS: [&str; 2] = ["Gender", "Birth Year"];

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and filter the data for `selection`.
///
/// 1. Read the city's CSV from `data_dir`.
/// 2. Keep only rows in the selected month, then only rows on the selected day.
/// 3. When `selection.show_raw` is set, write the first [`PREVIEW_ROWS`] rows
///    of the filtered table to `out`.
pub fn load_data<W: Write>(
    data_dir: &Path,
    selection: &FilterSelection,
    out: &mut W,
) -> Result<TripTable> {
    let table = load_city_trips(data_dir, selection.city)?;
    let loaded = table.len();

    let table = apply_filters(table, selection.month, selection.day);
    info!(
        "Filter month={} day={} kept {} of {} trips",
        selection.month.token(),
        selection.day.token(),
        table.len(),
        loaded
    );

    if selection.show_raw {
        let shown = table.len().min(PREVIEW_ROWS);
        writeln!(
            out,
            "Here comes the raw data: \n{}",
            render_preview(table.city, &table.records[..shown])
        )?;
    }

    Ok(table)
}

/// Apply the month filter, then the day filter. Either may be `All`.
pub fn apply_filters(table: TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    table.filter_month(month).filter_day(day)
}

/// Render `rows` as a left-aligned text table with a header line.
///
/// `Gender` and `Birth Year` are only shown for cities whose export has
/// them. Absent values print as `NaN`.
pub fn render_preview(city: City, rows: &[TripRecord]) -> String {
    let header = preview_headers(city);
    let cells: Vec<Vec<String>> = rows.iter().map(|r| preview_cells(city, r)).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    let mut lines = vec![join_padded(&header, &widths)];
    lines.extend(cells.iter().map(|row| join_padded(row, &widths)));
    lines.join("\n")
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn preview_headers(city: City) -> Vec<&'static str> {
    PREVIEW_HEADERS
        .into_iter()
        .filter(|h| city.has_demographics() || !DEMOGRAPHIC_HEADERS.contains(h))
        .collect()
}

fn preview_cells(city: City, r: &TripRecord) -> Vec<String> {
    let or_nan = |cell: &Option<String>| cell.clone().unwrap_or_else(|| "NaN".to_string());

    let mut cells = vec![
        r.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        r.trip_duration.to_string(),
        or_nan(&r.start_station),
        or_nan(&r.end_station),
        or_nan(&r.user_type),
    ];
    if city.has_demographics() {
        cells.push(or_nan(&r.gender));
        cells.push(or_nan(&r.birth_year.map(|y| y.to_string())));
    }
    cells.extend([
        r.month_name().to_string(),
        r.day_name().to_string(),
        r.hour.to_string(),
        r.city.code().to_string(),
    ]);
    cells
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
