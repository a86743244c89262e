//! Form schemas and field checks for the venue, artist and show forms.
//!
//! Each raw form deserializes every field leniently (missing keys default to
//! empty) and `validate()` either yields a typed input or a [`FieldErrors`]
//! map. Nothing is written until validation succeeds.

pub mod artist;
pub mod show;
pub mod venue;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::datetime::parse_datetime;
use crate::db::enums::{Genre, UsState};

pub use artist::{ArtistForm, ArtistInput};
pub use show::{ShowForm, ShowInput};
pub use venue::{VenueForm, VenueInput};

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+?1[-. ]?)?(\([0-9]{3}\)|[0-9]{3})[-. ]?[0-9]{3}[-. ]?[0-9]{4}$")
        .expect("phone pattern compiles")
});

/// Per-field validation messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// Accumulates errors while individual fields are checked.
#[derive(Debug, Default)]
pub(crate) struct Checker {
    errors: FieldErrors,
}

impl Checker {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    pub fn required(&mut self, field: &'static str, value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() {
            self.errors.add(field, "This field is required.");
            None
        } else {
            Some(value.to_string())
        }
    }

    pub fn optional(&mut self, value: &str) -> Option<String> {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn phone(&mut self, field: &'static str, value: &str) -> Option<String> {
        let phone = self.required(field, value)?;
        if PHONE_RE.is_match(&phone) {
            Some(phone)
        } else {
            self.errors.add(field, "Invalid phone number, use a format like 415-555-0100.");
            None
        }
    }

    /// Empty is allowed; anything else must be an absolute http(s) URL.
    pub fn optional_url(&mut self, field: &'static str, value: &str) -> Option<String> {
        let value = self.optional(value)?;
        match url::Url::parse(&value) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => {
                Some(value)
            }
            _ => {
                self.errors.add(field, "Invalid URL.");
                None
            }
        }
    }

    pub fn state(&mut self, field: &'static str, value: &str) -> Option<UsState> {
        let code = self.required(field, value)?;
        let state = UsState::from_str(&code.to_ascii_uppercase());
        if state.is_none() {
            self.errors.add(field, "Not a valid choice.");
        }
        state
    }

    pub fn genres(&mut self, field: &'static str, values: &[String]) -> Vec<Genre> {
        let mut genres = Vec::with_capacity(values.len());
        for value in values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
            match Genre::from_str(value) {
                Some(genre) if !genres.contains(&genre) => genres.push(genre),
                Some(_) => {}
                None => self
                    .errors
                    .add(field, format!("'{}' is not a valid choice.", value)),
            }
        }
        genres
    }

    pub fn id(&mut self, field: &'static str, value: &str) -> Option<i32> {
        let raw = self.required(field, value)?;
        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                self.errors.add(field, "Must be a positive whole number.");
                None
            }
        }
    }

    pub fn datetime(&mut self, field: &'static str, value: &str) -> Option<NaiveDateTime> {
        let raw = self.required(field, value)?;
        let parsed = parse_datetime(&raw);
        if parsed.is_none() {
            self.errors
                .add(field, "Not a valid date and time, use YYYY-MM-DD HH:MM.");
        }
        parsed
    }
}

/// Reads a checkbox-style flag. Only explicit affirmative values count as set.
pub fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "y" | "yes" | "on" | "true" | "1"
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_coercion() {
        assert!(parse_flag(Some("y")));
        assert!(parse_flag(Some("True")));
        assert!(parse_flag(Some("on")));
        assert!(parse_flag(Some("1")));
        assert!(!parse_flag(Some("False")));
        assert!(!parse_flag(Some("__import__('os')")));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_phone_formats() {
        let mut check = Checker::default();
        assert!(check.phone("phone", "415-555-0100").is_some());
        assert!(check.phone("phone", "(415) 555 0100").is_some());
        assert!(check.phone("phone", "+1 415.555.0100").is_some());
        assert!(check.phone("phone", "4155550100").is_some());
        assert!(check.is_ok());

        assert!(check.phone("phone", "call me").is_none());
        assert!(check.phone("phone", "415-555-01").is_none());
        assert_eq!(check.into_errors().get("phone").len(), 2);
    }

    #[test]
    fn test_urls() {
        let mut check = Checker::default();
        assert_eq!(check.optional_url("website_link", "  "), None);
        assert_eq!(
            check.optional_url("website_link", "https://example.com/venue"),
            Some("https://example.com/venue".to_string())
        );
        assert!(check.is_ok());

        assert_eq!(check.optional_url("website_link", "example.com"), None);
        assert_eq!(check.optional_url("facebook_link", "ftp://example.com"), None);
        let errors = check.into_errors();
        assert_eq!(errors.get("website_link"), ["Invalid URL.".to_string()]);
        assert_eq!(errors.get("facebook_link").len(), 1);
    }

    #[test]
    fn test_state_and_genres() {
        let mut check = Checker::default();
        assert_eq!(check.state("state", "ca"), Some(UsState::Ca));
        assert_eq!(
            check.genres("genres", &["Jazz".into(), "Rock".into(), "Jazz".into()]),
            vec![Genre::Jazz, Genre::Rock]
        );
        assert!(check.is_ok());

        assert_eq!(check.state("state", "ZZ"), None);
        assert_eq!(check.genres("genres", &["Polka".into()]), vec![]);
        let errors = check.into_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["genres", "state"]);
    }

    #[test]
    fn test_ids_and_datetimes() {
        let mut check = Checker::default();
        assert_eq!(check.id("venue_id", " 7 "), Some(7));
        assert!(check.datetime("start_time", "2035-05-21 21:30").is_some());
        assert!(check.is_ok());

        assert_eq!(check.id("venue_id", "0"), None);
        assert_eq!(check.id("artist_id", "abc"), None);
        assert_eq!(check.datetime("start_time", "tomorrow"), None);
        assert_eq!(check.into_errors().len(), 3);
    }
}
