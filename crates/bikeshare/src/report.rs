//! The four statistics sections printed after every load.
//!
//! Each reporter prints a heading, its statistics, and how long the
//! computation took, then closes with a dashed rule.

use std::io::Write;
use std::time::Instant;

use bikeshare_core::error::Result;
use bikeshare_core::formatting::{format_counts, format_travel_time, separator};
use bikeshare_core::models::TripTable;
use bikeshare_data::analyzer::TripAnalyzer;

/// Print all four sections in order.
pub fn print_all<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    time_stats(out, table)?;
    station_stats(out, table)?;
    trip_duration_stats(out, table)?;
    user_stats(out, table)
}

/// Most frequent month, day and hour of travel.
pub fn time_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();

    let stats = TripAnalyzer::time_stats(table)?;
    writeln!(
        out,
        "The most common month is {} with a total rental count of {}.",
        stats.month.value, stats.month.count
    )?;
    writeln!(
        out,
        "The most common day is {} with a total rental count of {}.",
        stats.day.value, stats.day.count
    )?;
    writeln!(
        out,
        "The most common hour is {} with a total rental count of {}.",
        stats.hour.value, stats.hour.count
    )?;

    finish(out, started)
}

/// Most popular start station, end station and trip.
pub fn station_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();

    let stats = TripAnalyzer::station_stats(table)?;
    writeln!(
        out,
        "\nThe most common start station is {}.",
        stats.start_station.value
    )?;
    writeln!(
        out,
        "\nThe most common end station is {}.",
        stats.end_station.value
    )?;
    let (from, to) = &stats.trip.value;
    writeln!(out, "\nThe most popular trip is from {} to {}.", from, to)?;

    finish(out, started)
}

/// Total and mean travel time.
pub fn trip_duration_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();

    let stats = TripAnalyzer::duration_stats(table)?;
    writeln!(
        out,
        "\nThe total travel time is {}.",
        format_travel_time(stats.total_seconds)
    )?;
    writeln!(
        out,
        "\nThe mean  travel time is {}.",
        format_travel_time(stats.mean_seconds)
    )?;

    finish(out, started)
}

/// User types, and gender / birth year where the city publishes them.
pub fn user_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();

    let stats = TripAnalyzer::user_stats(table)?;
    writeln!(
        out,
        "Following user type counts are within the data: {}",
        format_counts(&stats.user_types)
    )?;

    match stats.demographics {
        None => writeln!(
            out,
            "\n{} customers don't have age or gender data!",
            table.city.display_name()
        )?,
        Some(demo) => {
            writeln!(
                out,
                "Following gender counts are within the data: {}",
                format_counts(&demo.genders)
            )?;
            writeln!(
                out,
                "The earliest date of birth is {}, the most recent is {} and the most common is {}",
                demo.earliest_birth_year, demo.most_recent_birth_year, demo.most_common_birth_year
            )?;
        }
    }

    finish(out, started)
}

fn finish<W: Write>(out: &mut W, started: Instant) -> Result<()> {
    writeln!(
        out,
        "\nThis took {} seconds.",
        started.elapsed().as_secs_f64()
    )?;
    writeln!(out, "{}", separator())?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
