//! Timestamp value object for temporal data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp for order creation and report generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a new Timestamp from a `DateTime<Utc>`.
    #[must_use]
    pub const fn new(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Get the current timestamp.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parse from an ISO 8601 string.
    ///
    /// # Errors
    ///
    /// Returns error if the string is not a valid ISO 8601 timestamp.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        let dt = DateTime::parse_from_rfc3339(s)?;
        Ok(Self(dt.with_timezone(&Utc)))
    }

    /// Get the inner `DateTime<Utc>`.
    #[must_use]
    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Format as ISO 8601 / RFC 3339 string.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Calendar-day label at `month-name day` granularity, e.g. `Jan 5`.
    ///
    /// English month abbreviations regardless of locale. This is the grouping
    /// key for revenue-by-date views: two orders on the same calendar day
    /// share a label, whatever their time of day.
    #[must_use]
    pub fn day_label(&self) -> String {
        self.0.format("%b %-d").to_string()
    }

    /// Short numeric date, e.g. `1/5/2026`.
    #[must_use]
    pub fn short_date(&self) -> String {
        self.0.format("%-m/%-d/%Y").to_string()
    }

    /// Long date-and-time form for report banners, e.g. `1/5/2026, 3:04:05 PM`.
    #[must_use]
    pub fn long_form(&self) -> String {
        self.0.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
    }

    /// Date-only stamp for file names, e.g. `2026-01-05`.
    #[must_use]
    pub fn date_stamp(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    #[test]
    fn timestamp_parse_and_display() {
        let t = ts("2026-01-05T15:04:05Z");
        assert_eq!(format!("{t}"), "2026-01-05T15:04:05+00:00");
    }

    #[test]
    fn timestamp_parse_invalid() {
        assert!(Timestamp::parse("not a date").is_err());
    }

    #[test]
    fn timestamp_day_label() {
        assert_eq!(ts("2026-01-05T15:04:05Z").day_label(), "Jan 5");
        assert_eq!(ts("2026-11-23T00:00:00Z").day_label(), "Nov 23");
    }

    #[test]
    fn timestamp_same_day_same_label() {
        let morning = ts("2026-03-07T08:00:00Z");
        let evening = ts("2026-03-07T22:30:00Z");
        assert_eq!(morning.day_label(), evening.day_label());
    }

    #[test]
    fn timestamp_short_date() {
        assert_eq!(ts("2026-01-05T15:04:05Z").short_date(), "1/5/2026");
        assert_eq!(ts("2026-12-25T00:00:00Z").short_date(), "12/25/2026");
    }

    #[test]
    fn timestamp_long_form() {
        assert_eq!(
            ts("2026-01-05T15:04:05Z").long_form(),
            "1/5/2026, 3:04:05 PM"
        );
        assert_eq!(
            ts("2026-01-05T00:09:05Z").long_form(),
            "1/5/2026, 12:09:05 AM"
        );
    }

    #[test]
    fn timestamp_date_stamp() {
        assert_eq!(ts("2026-01-05T15:04:05Z").date_stamp(), "2026-01-05");
    }

    #[test]
    fn timestamp_ordering() {
        let earlier = ts("2026-01-05T10:00:00Z");
        let later = ts("2026-01-05T11:00:00Z");
        assert!(earlier < later);
    }

    #[test]
    fn timestamp_serde_roundtrip() {
        let t = ts("2026-01-05T15:04:05Z");
        let json = serde_json::to_string(&t).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, t);
    }
}
