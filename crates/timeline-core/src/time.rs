// File: crates/timeline-core/src/time.rs
// Summary: Timestamp codec for bucket labels ("HH:MM:SS.mmm").

use chrono::NaiveTime;

/// chrono pattern equivalent to `%H:%M:%S.%L`.
pub const TIME_PATTERN: &str = "%H:%M:%S%.3f";

/// Parse a bucket timestamp. Exactly three fractional digits are required.
pub fn parse_timestamp(s: &str) -> Option<NaiveTime> {
    let (_, frac) = s.rsplit_once('.')?;
    if frac.len() != 3 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveTime::parse_from_str(s, TIME_PATTERN).ok()
}

pub fn format_timestamp(t: NaiveTime) -> String {
    t.format(TIME_PATTERN).to_string()
}
