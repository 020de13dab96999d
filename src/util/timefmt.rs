use chrono::{DateTime, Utc};

/// Render a backend timestamp relative to `now`.
///
/// Total over any input: a missing or empty timestamp is "Unknown", and a
/// present-but-unparseable one is echoed back raw rather than dropped.
/// Deltas are floor-truncated whole units; anything under a minute
/// (including a timestamp in the future) is "Just now", and anything a week
/// or older falls back to an absolute date.
///
/// Callers re-invoke this on every render. The value is derived from `now`,
/// never cached, so displayed ages advance on the next redraw rather than on
/// a ticking clock.
pub fn format_timestamp(raw: Option<&str>, now: DateTime<Utc>) -> String {
    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => return "Unknown".to_string(),
    };

    let parsed = match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => return raw.to_string(),
    };

    let delta = now.signed_duration_since(parsed);
    let minutes = delta.num_minutes();
    let hours = delta.num_hours();
    let days = delta.num_days();

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{} minute{} ago", minutes, plural(minutes));
    }
    if hours < 24 {
        return format!("{} hour{} ago", hours, plural(hours));
    }
    if days < 7 {
        return format!("{} day{} ago", days, plural(days));
    }
    parsed.format("%b %-d, %Y, %-I:%M %p").to_string()
}

fn plural(n: i64) -> &'static str {
    if n > 1 { "s" } else { "" }
}
