use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime};

use crate::ParseError;

/// Calendar day as reported by the API, interpreted at UTC midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(Date);

impl CalendarDate {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_date(input)
    }

    pub fn from_ymd(year: i32, month: Month, day: u8) -> Result<Self, ParseError> {
        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|_| ParseError::Date {
                value: format!("{year:04}-{:02}-{day:02}", u8::from(month)),
            })
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    /// The UTC instant at which this day starts.
    pub fn midnight_utc(self) -> OffsetDateTime {
        self.0.midnight().assume_utc()
    }
}

/// Parse an exact `YYYY-MM-DD` string. No sentinel values are accepted.
pub fn parse_date(input: &str) -> Result<CalendarDate, ParseError> {
    let invalid = || ParseError::Date {
        value: input.to_owned(),
    };

    // `[year]` tolerates a leading sign; the wire layout never carries one.
    if !input.starts_with(|ch: char| ch.is_ascii_digit()) {
        return Err(invalid());
    }

    Date::parse(input, format_description!("[year]-[month]-[day]"))
        .map(CalendarDate)
        .map_err(|_| invalid())
}

pub fn format_date(value: CalendarDate) -> String {
    value.to_string()
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}

impl From<Date> for CalendarDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse_date(&value).map_err(D::Error::custom)
    }
}
