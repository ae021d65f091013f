//! Formatting and validation of `DD/MM/YYYY` dates typed into text inputs.
//!
//! The crate is split into a pure core and a presentation-agnostic widget:
//!
//! - [`DateTextValidator`] checks a string against the fixed display shape, a
//!   [`ValidationRange`] of years and the real length of each month, and turns
//!   valid input into a [`NormalizedDate`] (`YYYY-MM-DD`).
//! - [`reformat_keystrokes`] and [`is_accepted_key`] shape raw keystrokes into
//!   the display format while the user types.
//! - [`DateInput`] owns one input's text, options and validity flag, and
//!   reports changes to a [`DateInputObserver`].

mod consts;
mod format;
mod options;
mod prelude;
mod range;
mod types;
mod validator;
mod widget;

pub use consts::*;
pub use format::{KeyDecision, filter_key, is_accepted_key, reformat_keystrokes};
pub use options::DateInputOptions;
pub use range::{RangeError, ValidationRange};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use validator::{DateTextValidator, is_valid, is_valid_in, to_normalized_date, today};
pub use widget::{DateInput, DateInputObserver, ValidationStatus};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// A calendar-valid date in the `DD/MM/YYYY` display format.
///
/// Values only come out of successful validation, so holding one means the
/// text it was parsed from passed the shape, year range, month and day checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{day}/{month}/{year}")]
pub struct DisplayDate {
    // Field order gives chronological `Ord`
    year: Year,
    month: Month,
    day: Day,
}

/// A validated date in the `YYYY-MM-DD` storage format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct NormalizedDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Why a piece of text is not a usable date.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Malformed date: {_0:?}")]
    Malformed(String),
    #[display(fmt = "Invalid year: {} (must be 0-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Year {year} is outside {range}")]
    YearOutOfRange { year: u16, range: ValidationRange },
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { day: u8, month: u8, year: u16 },
}

impl std::error::Error for ParseError {}

/// A conversion refused because the input is not a valid display date.
///
/// The message is always the same; the underlying [`ParseError`] is available
/// through [`FormatError::reason`] and [`std::error::Error::source`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", FORMAT_ERROR_MESSAGE)]
pub struct FormatError {
    #[from]
    reason: ParseError,
}

impl FormatError {
    /// Returns the detailed reason the input was refused
    pub const fn reason(&self) -> &ParseError {
        &self.reason
    }
}

/// Shape of a display date: `DD/MM/YYYY`, ASCII digits only.
static DISPLAY_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$")
        .expect("fail to create a regex for the display date")
});

/// Shape of a normalized date: `YYYY-MM-DD`, ASCII digits only.
static NORMALIZED_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$")
        .expect("fail to create a regex for the normalized date")
});

impl DisplayDate {
    /// Parses `DD/MM/YYYY` text, accepting only years inside `range`.
    ///
    /// Checks run in a fixed order: shape, year range, month, then day of
    /// month against the calendar.
    ///
    /// # Errors
    /// Returns the first `ParseError` encountered.
    pub fn parse_in(value: &str, range: ValidationRange) -> Result<Self, ParseError> {
        if value.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let captures = DISPLAY_DATE_PATTERN
            .captures(value)
            .ok_or_else(|| ParseError::Malformed(value.to_owned()))?;
        let day_u8 = parse_u8(&captures[1])?;
        let month_u8 = parse_u8(&captures[2])?;
        let year_u16 = parse_u16(&captures[3])?;

        if !range.contains(year_u16) {
            return Err(ParseError::YearOutOfRange {
                year: year_u16,
                range,
            });
        }
        Self::from_parts(year_u16, month_u8, day_u8)
    }

    /// Builds a date from numeric components, validating month and day.
    ///
    /// # Errors
    /// Returns `ParseError` if a component is out of bounds.
    pub fn from_parts(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    /// Returns the day component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month component
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Reorders the components into `YYYY-MM-DD`.
    pub const fn to_normalized(&self) -> NormalizedDate {
        NormalizedDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Converts to a [`chrono::NaiveDate`].
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the calendar rejects the date, which
    /// cannot happen for a value produced by this crate.
    pub fn to_naive_date(&self) -> Result<NaiveDate, ParseError> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year()),
            u32::from(self.month()),
            u32::from(self.day()),
        )
        .ok_or(ParseError::InvalidDay {
            day: self.day(),
            month: self.month(),
            year: self.year(),
        })
    }
}

impl FromStr for DisplayDate {
    type Err = ParseError;

    /// Parses with the widget default range, see [`ValidationRange::INSTANCE`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_in(s, ValidationRange::default())
    }
}

impl TryFrom<NaiveDate> for DisplayDate {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year())
            .map_err(|_| ParseError::Malformed(date.format(DISPLAY_FORMAT).to_string()))?;
        let month = u8::try_from(date.month()).map_err(|_| ParseError::InvalidMonth(0))?;
        let day = u8::try_from(date.day()).map_err(|_| ParseError::InvalidDay {
            day: 0,
            month,
            year,
        })?;
        Self::from_parts(year, month, day)
    }
}

impl From<NormalizedDate> for DisplayDate {
    fn from(date: NormalizedDate) -> Self {
        date.to_display()
    }
}

impl NormalizedDate {
    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Reorders the components back into `DD/MM/YYYY`.
    pub const fn to_display(&self) -> DisplayDate {
        DisplayDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

impl From<DisplayDate> for NormalizedDate {
    fn from(date: DisplayDate) -> Self {
        date.to_normalized()
    }
}

impl FromStr for NormalizedDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`. No year range applies; month and day are still
    /// checked against the calendar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let captures = NORMALIZED_DATE_PATTERN
            .captures(s)
            .ok_or_else(|| ParseError::Malformed(s.to_owned()))?;
        let year = parse_u16(&captures[1])?;
        let month = parse_u8(&captures[2])?;
        let day = parse_u8(&captures[3])?;
        DisplayDate::from_parts(year, month, day).map(Self::from)
    }
}

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::Malformed(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::Malformed(s.to_owned()))
}

impl serde::Serialize for DisplayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DisplayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for NormalizedDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for NormalizedDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
