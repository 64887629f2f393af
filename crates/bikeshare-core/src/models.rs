use chrono::{Month, NaiveDateTime, Weekday};
use std::fmt;
use std::str::FromStr;

use crate::time_utils::{month_name, weekday_name};

// ── Allowed answers ───────────────────────────────────────────────────────────

/// City codes accepted by the city prompt.
pub const CITY_OPTIONS: &[&str] = &["c", "n", "w"];
/// Month answers accepted by the month prompt.
pub const MONTH_OPTIONS: &[&str] = &["all", "jan", "feb", "mar", "apr", "may", "jun"];
/// Day answers accepted by the day prompt.
pub const DAY_OPTIONS: &[&str] = &["all", "mon", "tue", "wed", "thu", "fri", "sat", "sun"];
/// Answers accepted by the raw-data prompt.
pub const RAW_DATA_OPTIONS: &[&str] = &["yes", "no"];

/// An answer that is not one of the allowed tokens for its prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a valid option!", self.0)
    }
}

impl std::error::Error for InvalidChoice {}

/// Case-insensitive position of `s` in `options`.
fn lookup(options: &[&str], s: &str) -> Result<usize, InvalidChoice> {
    let lowered = s.to_lowercase();
    options
        .iter()
        .position(|opt| *opt == lowered)
        .ok_or_else(|| InvalidChoice(s.to_string()))
}

// ── City ──────────────────────────────────────────────────────────────────────

/// The three cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// One-letter code used at the prompt and attached to every record.
    pub fn code(self) -> &'static str {
        match self {
            City::Chicago => "c",
            City::NewYorkCity => "n",
            City::Washington => "w",
        }
    }

    /// Name of the backing CSV file inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Whether the city's export carries `Gender` and `Birth Year` columns.
    /// Washington's does not.
    pub fn has_demographics(self) -> bool {
        !matches!(self, City::Washington)
    }

    pub fn all() -> [City; 3] {
        [City::Chicago, City::NewYorkCity, City::Washington]
    }
}

impl FromStr for City {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(CITY_OPTIONS, s).map(|i| City::all()[i])
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ── Month / day filters ───────────────────────────────────────────────────────

/// Month restriction chosen at the prompt. Data only covers January–June.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// The three-letter token as typed at the prompt (`"all"` for no filter).
    pub fn token(self) -> &'static str {
        match self {
            MonthFilter::All => "all",
            MonthFilter::Only(m) => &month_name(m)[..3],
        }
    }

    pub fn matches(self, month: Month) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => month_name(month)[..3] == month_name(m)[..3],
        }
    }
}

impl FromStr for MonthFilter {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const MONTHS: [Month; 6] = [
            Month::January,
            Month::February,
            Month::March,
            Month::April,
            Month::May,
            Month::June,
        ];
        match lookup(MONTH_OPTIONS, s)? {
            0 => Ok(MonthFilter::All),
            i => Ok(MonthFilter::Only(MONTHS[i - 1])),
        }
    }
}

/// Weekday restriction chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn token(self) -> &'static str {
        match self {
            DayFilter::All => "all",
            DayFilter::Only(d) => &weekday_name(d)[..3],
        }
    }

    pub fn matches(self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => weekday_name(day)[..3] == weekday_name(d)[..3],
        }
    }
}

impl FromStr for DayFilter {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const DAYS: [Weekday; 7] = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        match lookup(DAY_OPTIONS, s)? {
            0 => Ok(DayFilter::All),
            i => Ok(DayFilter::Only(DAYS[i - 1])),
        }
    }
}

/// Answer to "do you want to see raw data?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowRawData(pub bool);

impl FromStr for ShowRawData {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(RAW_DATA_OPTIONS, s).map(|i| ShowRawData(i == 0))
    }
}

/// The four validated answers collected at the start of each run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
    pub show_raw: bool,
}

// ── Trip records ──────────────────────────────────────────────────────────────

/// One rental with its derived calendar fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// City the record was loaded for.
    pub city: City,
    pub start_time: NaiveDateTime,
    /// Trip length in seconds.
    pub trip_duration: f64,
    /// `None` when the cell was blank.
    pub start_station: Option<String>,
    /// `None` when the cell was blank.
    pub end_station: Option<String>,
    /// `None` when the cell was blank.
    pub user_type: Option<String>,
    /// Always `None` for Washington.
    pub gender: Option<String>,
    /// Always `None` for Washington.
    pub birth_year: Option<f64>,
    pub month: Month,
    pub day: Weekday,
    pub hour: u32,
}

impl TripRecord {
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn day_name(&self) -> &'static str {
        weekday_name(self.day)
    }
}

/// The per-run table of trips for one city, after filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    pub city: City,
    pub records: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(city: City, records: Vec<TripRecord>) -> Self {
        Self { city, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep only the records accepted by `filter`.
    pub fn filter_month(self, filter: MonthFilter) -> Self {
        self.retain(|r| filter.matches(r.month))
    }

    /// Keep only the records accepted by `filter`.
    pub fn filter_day(self, filter: DayFilter) -> Self {
        self.retain(|r| filter.matches(r.day))
    }

    fn retain(mut self, keep: impl Fn(&TripRecord) -> bool) -> Self {
        self.records.retain(|r| keep(r));
        self
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
