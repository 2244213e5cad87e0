//! Signing timestamp.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

/// The instant a request is signed, always rendered in UTC.
///
/// Capture one per outgoing request with `TimeStamp::now()`; the derived
/// signing key and the `X-Amz-Date` header both depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeStamp(DateTime<Utc>);

impl TimeStamp {
    pub fn new<Tz: TimeZone>(time: DateTime<Tz>) -> Self {
        Self(time.with_timezone(&Utc))
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Seconds since the Unix epoch; `None` when out of range.
    pub fn from_unix(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// `YYYYMMDD`, the date part of the credential scope.
    pub fn signing_date(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// `YYYYMMDDTHHMMSSZ`, sent as `X-Amz-Date`.
    pub fn signing_instant(&self) -> String {
        self.0.format("%Y%m%dT%H%M%SZ").to_string()
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeStamp {
    fn from(time: DateTime<Tz>) -> Self {
        Self::new(time)
    }
}

impl fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signing_instant())
    }
}
