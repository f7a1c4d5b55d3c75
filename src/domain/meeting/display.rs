//! Date and time rendering for exported meetings

use std::fmt::{self, Write};
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};

use crate::domain::error::{InvalidPatternError, InvalidTimezoneError};

/// Default date pattern (US-English style, e.g. `1/31/2024`)
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Default time-of-day pattern (US-English style, e.g. `10:05:00 AM`)
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// Check that a strftime pattern only contains items chrono can render
pub fn validate_pattern(pattern: &str) -> Result<(), InvalidPatternError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        Err(InvalidPatternError {
            input: pattern.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Time zone used when rendering dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The host's local zone
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl FromStr for DisplayZone {
    type Err = InvalidTimezoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" | "z" => Ok(Self::Utc),
            other => other
                .parse::<FixedOffset>()
                .map(Self::Fixed)
                .map_err(|_| InvalidTimezoneError {
                    input: s.to_string(),
                }),
        }
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Utc => write!(f, "utc"),
            Self::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Zone and patterns used to render meeting dates and transcript times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateDisplay {
    zone: DisplayZone,
    date_format: String,
    time_format: String,
}

impl DateDisplay {
    pub fn new(
        zone: DisplayZone,
        date_format: impl Into<String>,
        time_format: impl Into<String>,
    ) -> Self {
        Self {
            zone,
            date_format: date_format.into(),
            time_format: time_format.into(),
        }
    }

    /// Default patterns in the host's local zone
    pub fn local() -> Self {
        Self::new(DisplayZone::Local, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT)
    }

    /// Default patterns in UTC
    pub fn utc() -> Self {
        Self::new(DisplayZone::Utc, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT)
    }

    pub fn with_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    /// Render the calendar date of an instant
    pub fn format_date(&self, instant: &DateTime<Utc>) -> String {
        self.render(instant, &self.date_format, DEFAULT_DATE_FORMAT)
    }

    /// Render the time of day of a timestamp string.
    ///
    /// Accepts RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS[.fff]` read in the
    /// display zone. Anything else is returned unchanged.
    pub fn format_time(&self, timestamp: &str) -> String {
        match self.parse_timestamp(timestamp) {
            Some(instant) => self.render(&instant, &self.time_format, DEFAULT_TIME_FORMAT),
            None => timestamp.to_string(),
        }
    }

    fn parse_timestamp(&self, raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }

        let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()?;

        match self.zone {
            DisplayZone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            DisplayZone::Utc => Some(Utc.from_utc_datetime(&naive)),
            DisplayZone::Fixed(offset) => offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }

    /// Render with `pattern`, or with `fallback` when chrono rejects it
    fn render(&self, instant: &DateTime<Utc>, pattern: &str, fallback: &str) -> String {
        self.try_render(instant, pattern)
            .or_else(|| self.try_render(instant, fallback))
            .unwrap_or_else(|| instant.to_rfc3339())
    }

    fn try_render(&self, instant: &DateTime<Utc>, pattern: &str) -> Option<String> {
        let mut out = String::new();
        let written = match self.zone {
            DisplayZone::Local => write!(out, "{}", instant.with_timezone(&Local).format(pattern)),
            DisplayZone::Utc => write!(out, "{}", instant.format(pattern)),
            DisplayZone::Fixed(offset) => {
                write!(out, "{}", instant.with_timezone(&offset).format(pattern))
            }
        };
        written.ok().map(|_| out)
    }
}

impl Default for DateDisplay {
    fn default() -> Self {
        Self::local()
    }
}
