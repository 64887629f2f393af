use std::fmt::Display;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Width of the horizontal rule printed between report sections.
pub const SEPARATOR_WIDTH: usize = 40;

/// Format a number of seconds as days, hours, minutes and seconds.
///
/// The value is truncated (not rounded) to whole seconds first. The day part
/// is left out entirely when it is zero; hours, minutes and seconds are
/// always shown.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_travel_time;
///
/// assert_eq!(format_travel_time(0.0), "0 hour(s) 0 minute(s) 0 second(s)");
/// assert_eq!(format_travel_time(125.0), "0 hour(s) 2 minute(s) 5 second(s)");
/// assert_eq!(
///     format_travel_time(90_000.0),
///     "1 day(s) 1 hour(s) 0 minute(s) 0 second(s)"
/// );
/// ```
pub fn format_travel_time(seconds: f64) -> String {
    let mut remaining = seconds.trunc() as i64;

    let days = remaining / SECONDS_PER_DAY;
    remaining %= SECONDS_PER_DAY;
    let hours = remaining / SECONDS_PER_HOUR;
    remaining %= SECONDS_PER_HOUR;
    let minutes = remaining / SECONDS_PER_MINUTE;
    remaining %= SECONDS_PER_MINUTE;

    let hms = format!(
        "{} hour(s) {} minute(s) {} second(s)",
        hours, minutes, remaining
    );
    if days >= 1 {
        format!("{} day(s) {}", days, hms)
    } else {
        hms
    }
}

/// Render a frequency distribution as a mapping literal, keeping the order of
/// `counts`.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_counts;
///
/// let counts = vec![("Subscriber".to_string(), 5), ("Customer".to_string(), 2)];
/// assert_eq!(format_counts(&counts), "{'Subscriber': 5, 'Customer': 2}");
/// assert_eq!(format_counts::<String>(&[]), "{}");
/// ```
pub fn format_counts<K: Display>(counts: &[(K, usize)]) -> String {
    let body = counts
        .iter()
        .map(|(key, count)| format!("'{}': {}", key, count))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}

/// The dashed rule that closes every report section.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
