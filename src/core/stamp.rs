//! The per-run timestamp
//!
//! Every file touched in one run gets the same instant, rendered at a
//! fixed UTC+8 offset (the deployment's local time). The value is
//! computed once and threaded through the run, never read per file.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use std::fmt;

/// Seconds east of UTC for the fixed +08:00 rendering offset.
const OFFSET_EAST_SECS: i32 = 8 * 3600;

const STAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// The timestamp written into every post touched by a single run.
///
/// Renders as `YYYY-MM-DDTHH:MM:SS+08:00` regardless of the offset the
/// source instant carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStamp(String);

impl RunStamp {
    /// Capture the current instant.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Build a stamp from an explicit instant. Tests pin a fixed one so
    /// output is byte-for-byte predictable.
    pub fn from_datetime<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        let local = dt.with_timezone(&east8());
        RunStamp(local.format(STAMP_FORMAT).to_string())
    }

    /// The rendered timestamp value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn east8() -> FixedOffset {
    FixedOffset::east_opt(OFFSET_EAST_SECS).unwrap_or_else(|| Utc.fix())
}
