//! Parsing and English display formats for show start times.

use chrono::{DateTime, NaiveDateTime};

const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Named presentations accepted by [`format_datetime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `Monday May, 21, 2035 at 9:30PM`
    Full,
    /// `Mon 05, 21, 2035 9:30PM`
    #[default]
    Medium,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            Self::Full => "%A %B, %-d, %Y at %-I:%M%p",
            Self::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "full" => Self::Full,
            _ => Self::Medium,
        }
    }
}

/// Parses the ISO-ish date-time strings produced by forms and the database.
/// Offsets in RFC 3339 input are dropped, keeping the wall-clock time.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

pub fn format_naive(value: &NaiveDateTime, format: DateFormat) -> String {
    value.format(format.pattern()).to_string()
}

/// Template filter: reformats `value`, returning it unchanged when it does not parse.
pub fn format_datetime(value: &str, format: DateFormat) -> String {
    match parse_datetime(value) {
        Some(dt) => format_naive(&dt, format),
        None => value.to_string(),
    }
}
