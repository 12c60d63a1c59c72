//! Civil time policy: every lifecycle timestamp is recorded at UTC+7,
//! independent of the server's locale.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Offset east of UTC, in seconds, used for all stored timestamps.
pub const CIVIL_OFFSET_SECS: i32 = 7 * 3600;

pub fn civil_offset() -> FixedOffset {
    match FixedOffset::east_opt(CIVIL_OFFSET_SECS) {
        Some(offset) => offset,
        None => Utc.fix(),
    }
}

/// Current instant expressed in the civil offset.
pub fn now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&civil_offset())
}

/// Re-express any instant in the civil offset without changing it.
pub fn to_civil<Tz: chrono::TimeZone>(instant: DateTime<Tz>) -> DateTime<FixedOffset> {
    instant.with_timezone(&civil_offset())
}
