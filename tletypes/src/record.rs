use chrono::NaiveDate;
use derive_more::Display;
use serde::Serialize;

pub type LaunchYear = i32;

/// Inclination rounded to the nearest whole degree
pub type InclinationDegrees = i64;

/// The typed fields pulled out of a single TLE entry
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Serialize)]
#[display(
    fmt = "{{launch_year: {}, inclination_degrees: {:?}, epoch_date: {:?}}}",
    "launch_year",
    "inclination_degrees",
    "epoch_date"
)]
pub struct ParsedRecord {
    /// Four digit year from the international designator
    pub launch_year: LaunchYear,

    /// `None` when the inclination field isn't a number
    pub inclination_degrees: Option<InclinationDegrees>,

    /// `None` when the epoch doesn't land on a real calendar day
    pub epoch_date: Option<NaiveDate>,
}
