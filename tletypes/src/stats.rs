use crate::record::{InclinationDegrees, LaunchYear, ParsedRecord};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const NOT_AVAILABLE: &str = "Not available";

pub type Histogram<K> = BTreeMap<K, u64>;

/// Aggregate statistics over a set of TLE entries
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize)]
pub struct Statistics {
    /// Number of complete three-line entries
    pub satellite_count: u64,

    /// Earliest valid epoch date, if any entry had one
    pub oldest_epoch: Option<NaiveDate>,

    pub launch_year_histogram: Histogram<LaunchYear>,

    pub inclination_histogram: Histogram<InclinationDegrees>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a single parsed entry into the totals
    pub fn record(&mut self, rec: &ParsedRecord) {
        self.satellite_count += 1;

        *self
            .launch_year_histogram
            .entry(rec.launch_year)
            .or_default() += 1;

        if let Some(incl) = rec.inclination_degrees {
            *self.inclination_histogram.entry(incl).or_default() += 1;
        }

        if let Some(date) = rec.epoch_date {
            self.oldest_epoch = Some(match self.oldest_epoch {
                Some(oldest) => oldest.min(date),
                None => date,
            });
        }
    }

    /// The human readable report
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total satellites: {}", self.satellite_count)?;
        match self.oldest_epoch {
            Some(date) => writeln!(
                f,
                "Oldest data date: {}",
                date.format(REPORT_DATE_FORMAT)
            )?,
            None => writeln!(f, "Oldest data date: {NOT_AVAILABLE}")?,
        }

        writeln!(f, "\nLaunches by year:")?;
        for (year, count) in self.launch_year_histogram.iter() {
            writeln!(f, "{year}: {count}")?;
        }

        writeln!(f, "\nInclinations:")?;
        for (deg, count) in self.inclination_histogram.iter() {
            writeln!(f, "{deg}°: {count}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rec(launch_year: i32, incl: Option<i64>, epoch: Option<NaiveDate>) -> ParsedRecord {
        ParsedRecord {
            launch_year,
            inclination_degrees: incl,
            epoch_date: epoch,
        }
    }

    #[test]
    fn empty_report() {
        let stats = Statistics::new();
        assert_eq!(
            stats.report(),
            indoc! {"
                Total satellites: 0
                Oldest data date: Not available

                Launches by year:

                Inclinations:
            "}
        );
    }

    #[test]
    fn first_valid_epoch_initializes_minimum() {
        let mut stats = Statistics::new();
        stats.record(&rec(1998, Some(52), None));
        assert_eq!(stats.oldest_epoch, None);

        stats.record(&rec(1998, Some(52), Some(date(2024, 2, 14))));
        assert_eq!(stats.oldest_epoch, Some(date(2024, 2, 14)));

        stats.record(&rec(2009, Some(99), Some(date(2024, 2, 13))));
        stats.record(&rec(2009, Some(99), Some(date(2024, 3, 1))));
        stats.record(&rec(2009, Some(99), None));
        assert_eq!(stats.oldest_epoch, Some(date(2024, 2, 13)));
    }

    #[test]
    fn missing_inclination_still_counts() {
        let mut stats = Statistics::new();
        stats.record(&rec(1958, None, None));
        assert_eq!(stats.satellite_count, 1);
        assert_eq!(stats.launch_year_histogram.get(&1958), Some(&1));
        assert!(stats.inclination_histogram.is_empty());
    }

    #[test]
    fn report_is_ordered() {
        let mut stats = Statistics::new();
        stats.record(&rec(2009, Some(99), Some(date(2024, 2, 13))));
        stats.record(&rec(1958, Some(34), Some(date(2024, 2, 13))));
        stats.record(&rec(1998, Some(52), Some(date(2024, 2, 14))));
        stats.record(&rec(1998, Some(52), Some(date(1998, 1, 1))));

        assert_eq!(
            stats.report(),
            indoc! {"
                Total satellites: 4
                Oldest data date: 1998-01-01

                Launches by year:
                1958: 1
                1998: 2
                2009: 1

                Inclinations:
                34°: 1
                52°: 2
                99°: 1
            "}
        );
    }

    #[test]
    fn serialize_json() {
        let mut stats = Statistics::new();
        stats.record(&rec(2024, Some(52), Some(date(2024, 2, 14))));
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "satellite_count": 1,
                "oldest_epoch": "2024-02-14",
                "launch_year_histogram": { "2024": 1 },
                "inclination_histogram": { "52": 1 },
            })
        );
    }
}
