//! Time source for timestamp claims
//!
//! All temporal validation goes through the two predicates here so that
//! clock-skew leeway is applied in exactly one place, symmetrically for
//! "too early" and "too late" checks.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current Unix timestamp in seconds (UTC)
pub fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time is before Unix epoch")
        .as_secs() as i64
}

/// Whether `timestamp` is strictly in the past, beyond `leeway` seconds
pub fn is_past(timestamp: i64, leeway: i64) -> bool {
    timestamp < now() - leeway
}

/// Whether `timestamp` is strictly in the future, beyond `leeway` seconds
pub fn is_future(timestamp: i64, leeway: i64) -> bool {
    timestamp > now() + leeway
}
