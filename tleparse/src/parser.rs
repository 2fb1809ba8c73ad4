//! A fixed-column parser for two-line element sets

use crate::{
    CENTURY_PIVOT, EPOCH_DAY_OF_YEAR, EPOCH_YEAR, INCLINATION, LAUNCH_YEAR, LINES_PER_ENTRY,
};
use chrono::NaiveDate;
use nom::{
    character::complete::u32,
    combinator::{all_consuming, verify},
    error::ErrorKind,
    number::complete::double,
    Err::Error,
};
use tletypes::prelude::*;
use tracing::debug;

pub type Result<I, O, E = ParseError<I>> = std::result::Result<(I, O), nom::Err<E>>;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParseError<I> {
    #[error("Epoch day {day} is not a day of {year}")]
    EpochDayOfYear { year: i32, day: u32 },
    #[error("Parse error")]
    Nom(I, ErrorKind),
}

/// Split raw text into entries of three non-blank lines.
///
/// Lines are trimmed, blank lines don't count towards an entry and an incomplete
/// trailing entry is dropped.
pub fn parse_tle_entries(text: &str) -> Vec<TleEntry> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut chunks = lines.chunks_exact(LINES_PER_ENTRY);
    let entries = chunks
        .by_ref()
        .map(|c| TleEntry::new(c[0], c[1], c[2]))
        .collect();

    let rest = chunks.remainder();
    if !rest.is_empty() {
        debug!(lines = rest.len(), "Dropping incomplete trailing TLE entry");
    }

    entries
}

/// Pull the launch year, inclination and epoch date out of an entry.
///
/// Never fails. An unreadable launch year is taken as `00`, other unreadable
/// fields come back as `None`.
pub fn parse_record(entry: &TleEntry) -> ParsedRecord {
    let launch_year = field(entry, &LAUNCH_YEAR, two_digit_year(LAUNCH_YEAR.extract(entry)))
        .unwrap_or_else(|| expand_two_digit_year(0));

    let inclination_degrees =
        field(entry, &INCLINATION, inclination(INCLINATION.extract(entry)));

    let epoch_date = field(
        entry,
        &EPOCH_DAY_OF_YEAR,
        epoch_date(EPOCH_YEAR.extract(entry), EPOCH_DAY_OF_YEAR.extract(entry)),
    );

    ParsedRecord {
        launch_year,
        inclination_degrees,
        epoch_date,
    }
}

pub fn expand_two_digit_year(yy: u32) -> LaunchYear {
    let yy = yy as LaunchYear;
    if yy < CENTURY_PIVOT as LaunchYear {
        2000 + yy
    } else {
        1900 + yy
    }
}

fn field<O>(entry: &TleEntry, column: &Column, res: Result<&str, O>) -> Option<O> {
    match res {
        Ok((_, val)) => Some(val),
        Err(e) => {
            debug!(
                satellite = %entry,
                field = %column,
                error = %e,
                "Unreadable TLE field"
            );
            None
        }
    }
}

fn two_digit_year(s: &str) -> Result<&str, LaunchYear> {
    let (s, yy) = all_consuming(u32)(s.trim())?;
    Ok((s, expand_two_digit_year(yy)))
}

fn inclination(s: &str) -> Result<&str, InclinationDegrees> {
    let (s, deg) = all_consuming(verify(double, |d: &f64| d.is_finite()))(s.trim())?;
    // f64::round is half away from zero
    Ok((s, deg.round() as InclinationDegrees))
}

fn epoch_date<'a>(year: &'a str, day: &'a str) -> Result<&'a str, NaiveDate> {
    let (_, year) = two_digit_year(year)?;
    let (s, day) = all_consuming(u32)(day.trim())?;
    // Day 1 is January 1st
    let date =
        NaiveDate::from_yo_opt(year, day).ok_or(Error(ParseError::EpochDayOfYear { year, day }))?;
    Ok((s, date))
}

impl<I> nom::error::ParseError<I> for ParseError<I> {
    fn from_error_kind(s: I, kind: ErrorKind) -> Self {
        ParseError::Nom(s, kind)
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}
