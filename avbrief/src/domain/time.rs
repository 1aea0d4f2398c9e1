//! Report issue-time handling.
//!
//! NOAA bulletin files carry their issue time as a fixed-width
//! `YYYY/MM/DD HH:MM` prefix on the first line. This module parses that
//! prefix into a date-aware value that orders correctly across days.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid issue-time prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid report time: {reason}")]
pub struct TimeParseError {
    reason: &'static str,
}

impl TimeParseError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// The issue time of a weather bulletin.
///
/// Parsed from the fixed-width `YYYY/MM/DD HH:MM` prefix NOAA puts on the
/// first line of each product file. Anything after the 16-character prefix
/// is ignored.
///
/// # Examples
///
/// ```
/// use avbrief::domain::ReportTime;
///
/// let time = ReportTime::parse("2012/11/27 10:54 rest of line").unwrap();
/// assert_eq!(time.year(), 2012);
/// assert_eq!(time.month(), 11);
/// assert_eq!(time.day(), 27);
/// assert_eq!(time.hour(), 10);
/// assert_eq!(time.minute(), 54);
///
/// // Truncated input fails rather than panicking
/// assert!(ReportTime::parse("2012/11/27").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportTime {
    datetime: NaiveDateTime,
}

impl ReportTime {
    /// Parse an issue time from the start of a bulletin line.
    ///
    /// The first 16 characters must match `YYYY/MM/DD HH:MM` exactly:
    /// digits at offsets 0-3, 5-6, 8-9, 11-12 and 14-15, with `/`, `/`,
    /// space and `:` separators between them.
    pub fn parse(s: &str) -> Result<Self, TimeParseError> {
        let bytes = s.as_bytes();

        if bytes.len() < 16 {
            return Err(TimeParseError::new("expected at least 16 characters"));
        }

        if bytes[4] != b'/' || bytes[7] != b'/' {
            return Err(TimeParseError::new("expected YYYY/MM/DD date separators"));
        }
        if bytes[10] != b' ' {
            return Err(TimeParseError::new("expected space between date and time"));
        }
        if bytes[13] != b':' {
            return Err(TimeParseError::new("expected colon between hour and minute"));
        }

        let year =
            parse_digits(&bytes[0..4]).ok_or_else(|| TimeParseError::new("invalid year digits"))?;
        let month = parse_digits(&bytes[5..7])
            .ok_or_else(|| TimeParseError::new("invalid month digits"))?;
        let day =
            parse_digits(&bytes[8..10]).ok_or_else(|| TimeParseError::new("invalid day digits"))?;
        let hour = parse_digits(&bytes[11..13])
            .ok_or_else(|| TimeParseError::new("invalid hour digits"))?;
        let minute = parse_digits(&bytes[14..16])
            .ok_or_else(|| TimeParseError::new("invalid minute digits"))?;

        let date = NaiveDate::from_ymd_opt(year as i32, month, day)
            .ok_or_else(|| TimeParseError::new("no such calendar date"))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeParseError::new("no such time of day"))?;

        Ok(Self {
            datetime: date.and_time(time),
        })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u32 {
        self.datetime.month()
    }

    /// Returns the day of month (1-31).
    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.datetime.minute()
    }

    /// Converts to a NaiveDateTime.
    pub fn to_datetime(&self) -> NaiveDateTime {
        self.datetime
    }
}

impl Ord for ReportTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.datetime.cmp(&other.datetime)
    }
}

impl PartialOrd for ReportTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ReportTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReportTime({})", self)
    }
}

impl fmt::Display for ReportTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}/{:02}/{:02} {:02}:{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute()
        )
    }
}

/// Parse a run of ASCII digit bytes into a u32.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    let mut value: u32 = 0;
    for &b in bytes {
        let digit = (b as char).to_digit(10)?;
        value = value * 10 + digit;
    }
    Some(value)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Valid instants roundtrip through their display form
        #[test]
        fn roundtrip(year in 1970u32..2100, month in 1u32..=12, day in 1u32..=28,
                     hour in 0u32..=23, minute in 0u32..=59) {
            let line = format!("{year:04}/{month:02}/{day:02} {hour:02}:{minute:02}");
            let time = ReportTime::parse(&line).unwrap();
            prop_assert_eq!(time.to_string(), line);
        }

        /// Parsing never panics on arbitrary input
        #[test]
        fn never_panics(s in "\\PC*") {
            let _ = ReportTime::parse(&s);
        }

        /// Lexicographic order of the fixed-width prefix agrees with instant order
        #[test]
        fn lexicographic_matches_instant(
            a_year in 2000u32..2030, a_month in 1u32..=12, a_day in 1u32..=28,
            a_hour in 0u32..=23, a_minute in 0u32..=59,
            b_year in 2000u32..2030, b_month in 1u32..=12, b_day in 1u32..=28,
            b_hour in 0u32..=23, b_minute in 0u32..=59,
        ) {
            let a_line = format!("{a_year:04}/{a_month:02}/{a_day:02} {a_hour:02}:{a_minute:02}");
            let b_line = format!("{b_year:04}/{b_month:02}/{b_day:02} {b_hour:02}:{b_minute:02}");
            let a = ReportTime::parse(&a_line).unwrap();
            let b = ReportTime::parse(&b_line).unwrap();
            prop_assert_eq!(a_line.cmp(&b_line), a.cmp(&b));
        }
    }
}
