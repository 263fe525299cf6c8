use chrono::{DateTime, Utc};

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Abbreviate a count for chart labels: 1500 -> "1.5K", 2500000 -> "2.5M".
///
/// One decimal place with ties rounded away from zero; `format!` alone
/// rounds half-to-even, so the scaled value is rounded explicitly first.
/// Values below 1K render as plain integers without grouping separators.
pub fn abbreviate_count(n: u64) -> String {
    if n >= MILLION {
        format!("{:.1}M", round_tenth(n as f64 / MILLION as f64))
    } else if n >= THOUSAND {
        format!("{:.1}K", round_tenth(n as f64 / THOUSAND as f64))
    } else {
        n.to_string()
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Render a timestamp relative to `now` ("2 min ago", "yesterday") for the
/// session list's last-activity column. Future instants clamp to
/// "just now".
pub fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(ts);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}
