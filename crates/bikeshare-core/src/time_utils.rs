use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};

// ── Timestamp parsing ─────────────────────────────────────────────────────────

/// Layouts accepted for the `Start Time` column, tried in order.
const START_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a trip start timestamp into a naive (local to the city) datetime.
///
/// The source files carry wall-clock times without an offset, so no timezone
/// conversion is applied. Returns `None` for empty strings or unrecognised
/// layouts.
pub fn parse_start_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

// ── Calendar fields ───────────────────────────────────────────────────────────

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Calendar month of a timestamp.
pub fn month_of(ts: &NaiveDateTime) -> Month {
    MONTHS[ts.month0() as usize]
}

/// Day of the week of a timestamp.
pub fn weekday_of(ts: &NaiveDateTime) -> Weekday {
    ts.weekday()
}

/// Hour of the day (0-23) of a timestamp.
pub fn hour_of(ts: &NaiveDateTime) -> u32 {
    ts.hour()
}

/// Lowercase English month name, e.g. `"january"`.
pub fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "january",
        Month::February => "february",
        Month::March => "march",
        Month::April => "april",
        Month::May => "may",
        Month::June => "june",
        Month::July => "july",
        Month::August => "august",
        Month::September => "september",
        Month::October => "october",
        Month::November => "november",
        Month::December => "december",
    }
}

/// Lowercase English weekday name, e.g. `"monday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
