//! Calendar-relative "last seen" labels.

use chrono::{DateTime, TimeZone};

/// Label how long ago `timestamp` was, counted in calendar days in `now`'s
/// time zone: "today", "yesterday" or "N days ago".
///
/// A commit two hours ago that falls on the previous calendar day is
/// "yesterday". Timestamps after `now` (clock skew) count as "today".
pub fn recency_label<Tz: TimeZone>(timestamp: i64, now: &DateTime<Tz>) -> String {
    let then = match now.timezone().timestamp_opt(timestamp, 0).single() {
        Some(then) => then,
        // Out of chrono's range; only reachable with corrupt timestamps.
        None => return "a long time ago".to_string(),
    };

    let days = (now.date_naive() - then.date_naive()).num_days().max(0);

    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        n => format!("{} days ago", n),
    }
}
