//! Date values

use chrono::{DateTime, TimeZone, Utc};

use crate::object::{Prototype, PropertyBag};

/// Internal date data
///
/// An absent timestamp models an invalid date (`new Date(NaN)`).
#[derive(Debug, Clone)]
pub struct DateData {
    /// The instant, or `None` for invalid dates
    pub time: Option<DateTime<Utc>>,
    /// Additional own properties
    pub extras: PropertyBag,
    /// Prototype link
    pub prototype: Prototype,
}

impl DateData {
    /// Create a date from milliseconds since the epoch
    pub fn from_millis(millis: i64) -> Self {
        DateData {
            time: Utc.timestamp_millis_opt(millis).single(),
            extras: PropertyBag::new(),
            prototype: Prototype::Ordinary,
        }
    }

    /// Create an invalid date
    pub fn invalid() -> Self {
        DateData {
            time: None,
            extras: PropertyBag::new(),
            prototype: Prototype::Ordinary,
        }
    }

    /// True when the date holds no valid instant
    pub fn is_invalid(&self) -> bool {
        self.time.is_none()
    }

    /// ISO-8601 rendering for valid dates, `Invalid Date` otherwise
    pub fn to_display_string(&self) -> String {
        match self.time {
            Some(t) => t.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            None => "Invalid Date".to_string(),
        }
    }
}
