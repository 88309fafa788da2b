use chrono::{SecondsFormat, Utc};

/// Every emitted rate and price carries 2-decimal precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// UTC timestamp stamped on each response envelope as `lastUpdated`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
