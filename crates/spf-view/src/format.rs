//! Timestamp formatting for date cells.
//!
//! The backend sends timestamps as strings in a handful of layouts. The
//! view only decides which raw value feeds which cell; turning it into
//! display text is the [`DateFormatter`]'s job.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// Default display pattern
pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d %H:%M";

/// Turns a raw backend timestamp into display text.
pub trait DateFormatter {
    /// Display text for `raw`. Must not fail: unrecognized input is
    /// returned as-is.
    fn format(&self, raw: &str) -> String;
}

/// Formatter that leaves timestamps untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDates;

impl DateFormatter for RawDates {
    fn format(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// The configured pattern contains an unknown `strftime` specifier.
#[derive(thiserror::Error, Debug)]
#[error("Invalid date pattern: {0}")]
pub struct DatePatternError(pub String);

/// `chrono`-backed formatter with a `strftime` display pattern.
#[derive(Debug, Clone)]
pub struct ChronoDateFormatter {
    pattern: String,
}

impl ChronoDateFormatter {
    /// Create a formatter with a validated pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DatePatternError`] if `pattern` has an unknown specifier.
    pub fn new(pattern: &str) -> Result<Self, DatePatternError> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(DatePatternError(pattern.to_string()));
        }
        Ok(Self {
            pattern: pattern.to_string(),
        })
    }

    /// The display pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for ChronoDateFormatter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_PATTERN.to_string(),
        }
    }
}

/// Parse the timestamp layouts the backend emits. Zoned values keep their
/// own wall-clock time.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for layout in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, layout) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

impl DateFormatter for ChronoDateFormatter {
    fn format(&self, raw: &str) -> String {
        let Some(dt) = parse_timestamp(raw) else {
            return raw.to_string();
        };
        let mut out = String::new();
        if write!(out, "{}", dt.format(&self.pattern)).is_err() {
            return raw.to_string();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_known_layouts() {
        let f = ChronoDateFormatter::default();
        assert_eq!(f.format("2023-01-01"), "2023-01-01 00:00");
        assert_eq!(f.format("2023-05-02T10:15:30Z"), "2023-05-02 10:15");
        assert_eq!(f.format("2023-05-02T10:15:30.123456"), "2023-05-02 10:15");
        assert_eq!(f.format("2023-05-02 10:15:30"), "2023-05-02 10:15");
    }

    #[test]
    fn test_offset_keeps_wall_clock() {
        let f = ChronoDateFormatter::new("%H:%M").unwrap();
        assert_eq!(f.format("2023-05-02T10:15:00-03:00"), "10:15");
    }

    #[test]
    fn test_unparseable_passes_through() {
        let f = ChronoDateFormatter::default();
        assert_eq!(f.format("yesterday"), "yesterday");
        assert_eq!(f.format(""), "");
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert!(ChronoDateFormatter::new("%Q").is_err());
        assert_eq!(ChronoDateFormatter::default().pattern(), DEFAULT_DATE_PATTERN);
        assert_eq!(ChronoDateFormatter::new("%d/%m/%Y").unwrap().pattern(), "%d/%m/%Y");
        assert_eq!(
            ChronoDateFormatter::new("%d/%m/%Y").unwrap().format("2023-01-31"),
            "31/01/2023"
        );
    }

    #[test]
    fn test_raw_dates() {
        assert_eq!(RawDates.format("2023-01-01"), "2023-01-01");
    }
}
