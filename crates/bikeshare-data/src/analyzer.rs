//! Descriptive statistics over a filtered [`TripTable`].
//!
//! Every computation is a pure function of the table; printing and timing
//! live in the binary's reporters.

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::models::TripTable;

use crate::aggregator::{mode, value_counts};

// ── Result types ──────────────────────────────────────────────────────────────

/// A most-frequent value together with the number of rows holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequent<T> {
    pub value: T,
    pub count: usize,
}

impl<T> Frequent<T> {
    fn from_mode(found: Option<(T, usize)>, what: &'static str) -> Result<Self> {
        found
            .map(|(value, count)| Frequent { value, count })
            .ok_or(BikeshareError::EmptyTable(what))
    }
}

/// Most common month, weekday and start hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: Frequent<&'static str>,
    pub day: Frequent<&'static str>,
    pub hour: Frequent<u32>,
}

/// Most popular stations and station pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Frequent<String>,
    pub end_station: Frequent<String>,
    /// `(start, end)` of the most frequent trip.
    pub trip: Frequent<(String, String)>,
}

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

/// Gender and birth-year breakdown for cities that publish it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub genders: Vec<(String, usize)>,
    pub earliest_birth_year: i64,
    pub most_recent_birth_year: i64,
    pub most_common_birth_year: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the city does not publish demographic columns.
    pub demographics: Option<Demographics>,
}

// ── TripAnalyzer ──────────────────────────────────────────────────────────────

/// Stateless helper computing the four report sections.
pub struct TripAnalyzer;

impl TripAnalyzer {
    /// Most frequent month, day and hour. Fails on an empty table.
    pub fn time_stats(table: &TripTable) -> Result<TimeStats> {
        let rows = &table.records;
        Ok(TimeStats {
            month: Frequent::from_mode(
                mode(rows.iter().map(|r| r.month_name())),
                "most common month",
            )?,
            day: Frequent::from_mode(
                mode(rows.iter().map(|r| r.day_name())),
                "most common day",
            )?,
            hour: Frequent::from_mode(mode(rows.iter().map(|r| r.hour)), "most common hour")?,
        })
    }

    /// Most frequent start station, end station and start/end pair.
    ///
    /// Blank stations are skipped, and a trip only counts toward the pair
    /// when both ends are known. Fails when nothing is left to count.
    pub fn station_stats(table: &TripTable) -> Result<StationStats> {
        let rows = &table.records;

        let start = mode(rows.iter().filter_map(|r| r.start_station.as_deref()))
            .map(|(s, n)| (s.to_string(), n));
        let end = mode(rows.iter().filter_map(|r| r.end_station.as_deref()))
            .map(|(s, n)| (s.to_string(), n));
        let trip = mode(rows.iter().filter_map(|r| {
            Some((r.start_station.as_deref()?, r.end_station.as_deref()?))
        }))
        .map(|((a, b), n)| ((a.to_string(), b.to_string()), n));

        Ok(StationStats {
            start_station: Frequent::from_mode(start, "most common start station")?,
            end_station: Frequent::from_mode(end, "most common end station")?,
            trip: Frequent::from_mode(trip, "most popular trip")?,
        })
    }

    /// Sum and mean of trip durations. The mean of an empty table fails.
    pub fn duration_stats(table: &TripTable) -> Result<DurationStats> {
        if table.is_empty() {
            return Err(BikeshareError::EmptyTable("mean travel time"));
        }
        let total_seconds: f64 = table.records.iter().map(|r| r.trip_duration).sum();
        Ok(DurationStats {
            total_seconds,
            mean_seconds: total_seconds / table.len() as f64,
        })
    }

    /// User-type counts, plus demographics unless the city lacks them.
    ///
    /// Blank user types and genders are not counted. Birth years are
    /// truncated to whole years.
    pub fn user_stats(table: &TripTable) -> Result<UserStats> {
        let user_types = owned_counts(
            table
                .records
                .iter()
                .filter_map(|r| r.user_type.as_deref()),
        );

        if !table.city.has_demographics() {
            return Ok(UserStats {
                user_types,
                demographics: None,
            });
        }

        let genders = owned_counts(table.records.iter().filter_map(|r| r.gender.as_deref()));

        let years: Vec<i64> = table
            .records
            .iter()
            .filter_map(|r| r.birth_year)
            .map(|y| y.trunc() as i64)
            .collect();

        let earliest_birth_year = years
            .iter()
            .copied()
            .min()
            .ok_or(BikeshareError::EmptyTable("earliest birth year"))?;
        let most_recent_birth_year = years
            .iter()
            .copied()
            .max()
            .ok_or(BikeshareError::EmptyTable("most recent birth year"))?;
        let most_common_birth_year = mode(years.iter().copied())
            .map(|(year, _)| year)
            .ok_or(BikeshareError::EmptyTable("most common birth year"))?;

        Ok(UserStats {
            user_types,
            demographics: Some(Demographics {
                genders,
                earliest_birth_year,
                most_recent_birth_year,
                most_common_birth_year,
            }),
        })
    }
}

fn owned_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    value_counts(values)
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::models::{City, TripRecord};
    use bikeshare_core::time_utils::{hour_of, month_of, parse_start_time, weekday_of};

    fn trip(start: &str, duration: f64, from: &str, to: &str) -> TripRecord {
        let ts = parse_start_time(start).unwrap();
        TripRecord {
            city: City::Chicago,
            start_time: ts,
            trip_duration: duration,
            start_station: Some(from.to_string()),
            end_station: Some(to.to_string()),
            user_type: Some("Subscriber".to_string()),
            gender: Some("Male".to_string()),
            birth_year: Some(1990.0),
            month: month_of(&ts),
            day: weekday_of(&ts),
            hour: hour_of(&ts),
        }
    }

    fn with_user(
        mut r: TripRecord,
        user: Option<&str>,
        gender: Option<&str>,
        year: Option<f64>,
    ) -> TripRecord {
        r.user_type = user.map(str::to_string);
        r.gender = gender.map(str::to_string);
        r.birth_year = year;
        r
    }

    fn sample_table(city: City) -> TripTable {
        let records = vec![
            // 2017-03-06 is a Monday.
            trip("2017-03-06 08:10:00", 600.0, "Canal St", "Clark St"),
            trip("2017-03-06 08:40:00", 300.0, "Canal St", "Clark St"),
            trip("2017-03-07 17:05:00", 90_000.0, "Clark St", "Canal St"),
            trip("2017-04-03 08:00:00", 60.0, "State St", "Clark St"),
        ];
        let records = records
            .into_iter()
            .map(|mut r| {
                r.city = city;
                r
            })
            .collect();
        TripTable::new(city, records)
    }

    // ── time_stats ────────────────────────────────────────────────────────────

    #[test]
    fn test_time_stats_most_common_values() {
        let stats = TripAnalyzer::time_stats(&sample_table(City::Chicago)).unwrap();

        assert_eq!(stats.month, Frequent { value: "march", count: 3 });
        assert_eq!(stats.day, Frequent { value: "monday", count: 3 });
        assert_eq!(stats.hour, Frequent { value: 8, count: 3 });
    }

    #[test]
    fn test_time_stats_tie_goes_to_earliest_hour() {
        let table = TripTable::new(
            City::Chicago,
            vec![
                trip("2017-01-02 18:00:00", 1.0, "A", "B"),
                trip("2017-01-02 07:00:00", 1.0, "A", "B"),
            ],
        );
        let stats = TripAnalyzer::time_stats(&table).unwrap();
        assert_eq!(stats.hour.value, 7);
    }

    #[test]
    fn test_time_stats_empty_table_fails() {
        let table = TripTable::new(City::Chicago, vec![]);
        let err = TripAnalyzer::time_stats(&table).unwrap_err();
        assert!(matches!(err, BikeshareError::EmptyTable("most common month")));
    }

    // ── station_stats ─────────────────────────────────────────────────────────

    #[test]
    fn test_station_stats() {
        let stats = TripAnalyzer::station_stats(&sample_table(City::Chicago)).unwrap();

        assert_eq!(stats.start_station.value, "Canal St");
        assert_eq!(stats.start_station.count, 2);
        assert_eq!(stats.end_station.value, "Clark St");
        assert_eq!(stats.end_station.count, 3);
        assert_eq!(
            stats.trip.value,
            ("Canal St".to_string(), "Clark St".to_string())
        );
        assert_eq!(stats.trip.count, 2);
    }

    #[test]
    fn test_station_stats_pair_is_directional() {
        // A→B and B→A are different trips; each occurs once, tie broken by order.
        let table = TripTable::new(
            City::Chicago,
            vec![
                trip("2017-01-02 18:00:00", 1.0, "B", "A"),
                trip("2017-01-02 07:00:00", 1.0, "A", "B"),
            ],
        );
        let stats = TripAnalyzer::station_stats(&table).unwrap();
        assert_eq!(stats.trip.value, ("A".to_string(), "B".to_string()));
        assert_eq!(stats.trip.count, 1);
    }

    #[test]
    fn test_station_stats_skip_blank_stations() {
        let mut records = vec![
            trip("2017-01-02 07:00:00", 1.0, "A", "B"),
            trip("2017-01-02 08:00:00", 1.0, "C", "D"),
            trip("2017-01-02 09:00:00", 1.0, "C", "D"),
            trip("2017-01-02 10:00:00", 1.0, "A", "B"),
            trip("2017-01-02 11:00:00", 1.0, "A", "B"),
        ];
        records[0].start_station = None;
        records[3].end_station = None;
        records[4].end_station = None;
        let stats = TripAnalyzer::station_stats(&TripTable::new(City::Chicago, records)).unwrap();

        assert_eq!(stats.start_station, Frequent { value: "A".to_string(), count: 2 });
        assert_eq!(stats.end_station, Frequent { value: "D".to_string(), count: 2 });
        assert_eq!(stats.trip.value, ("C".to_string(), "D".to_string()));
        assert_eq!(stats.trip.count, 2);
    }

    #[test]
    fn test_station_stats_all_blank_fails() {
        let mut record = trip("2017-01-02 07:00:00", 1.0, "A", "B");
        record.start_station = None;
        record.end_station = None;
        let table = TripTable::new(City::Chicago, vec![record]);
        assert!(matches!(
            TripAnalyzer::station_stats(&table),
            Err(BikeshareError::EmptyTable("most common start station"))
        ));
    }

    #[test]
    fn test_station_stats_empty_table_fails() {
        let table = TripTable::new(City::NewYorkCity, vec![]);
        assert!(TripAnalyzer::station_stats(&table).is_err());
    }

    // ── duration_stats ────────────────────────────────────────────────────────

    #[test]
    fn test_duration_stats_total_and_mean() {
        let stats = TripAnalyzer::duration_stats(&sample_table(City::Chicago)).unwrap();
        assert_eq!(stats.total_seconds, 90_960.0);
        assert_eq!(stats.mean_seconds, 22_740.0);
    }

    #[test]
    fn test_duration_stats_empty_table_fails() {
        let table = TripTable::new(City::Chicago, vec![]);
        assert!(matches!(
            TripAnalyzer::duration_stats(&table),
            Err(BikeshareError::EmptyTable(_))
        ));
    }

    // ── user_stats ────────────────────────────────────────────────────────────

    #[test]
    fn test_user_stats_with_demographics() {
        let base = sample_table(City::Chicago);
        let records = vec![
            with_user(
                base.records[0].clone(),
                Some("Subscriber"),
                Some("Male"),
                Some(1985.0),
            ),
            with_user(
                base.records[1].clone(),
                Some("Customer"),
                Some("Female"),
                Some(1992.0),
            ),
            with_user(
                base.records[2].clone(),
                Some("Subscriber"),
                Some("Female"),
                Some(1992.0),
            ),
            with_user(base.records[3].clone(), None, None, None),
        ];
        let stats = TripAnalyzer::user_stats(&TripTable::new(City::Chicago, records)).unwrap();

        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
        );
        let demo = stats.demographics.expect("chicago has demographics");
        assert_eq!(
            demo.genders,
            vec![("Female".to_string(), 2), ("Male".to_string(), 1)]
        );
        assert_eq!(demo.earliest_birth_year, 1985);
        assert_eq!(demo.most_recent_birth_year, 1992);
        assert_eq!(demo.most_common_birth_year, 1992);
    }

    #[test]
    fn test_user_stats_birth_year_tie_goes_to_earliest() {
        let base = sample_table(City::NewYorkCity);
        let records = vec![
            with_user(base.records[0].clone(), Some("Subscriber"), Some("Male"), Some(1999.0)),
            with_user(base.records[1].clone(), Some("Subscriber"), Some("Male"), Some(1970.0)),
        ];
        let stats =
            TripAnalyzer::user_stats(&TripTable::new(City::NewYorkCity, records)).unwrap();
        assert_eq!(stats.demographics.unwrap().most_common_birth_year, 1970);
    }

    #[test]
    fn test_user_stats_washington_skips_demographics() {
        let stats = TripAnalyzer::user_stats(&sample_table(City::Washington)).unwrap();
        assert_eq!(stats.user_types, vec![("Subscriber".to_string(), 4)]);
        assert!(stats.demographics.is_none());
    }

    #[test]
    fn test_user_stats_washington_empty_table_is_fine() {
        let stats = TripAnalyzer::user_stats(&TripTable::new(City::Washington, vec![])).unwrap();
        assert!(stats.user_types.is_empty());
        assert!(stats.demographics.is_none());
    }

    #[test]
    fn test_user_stats_no_birth_years_fails() {
        let base = sample_table(City::Chicago);
        let records = vec![with_user(base.records[0].clone(), Some("Customer"), None, None)];
        let err = TripAnalyzer::user_stats(&TripTable::new(City::Chicago, records)).unwrap_err();
        assert!(matches!(err, BikeshareError::EmptyTable("earliest birth year")));
    }
}
