//! Compact human-readable durations, e.g. `1 h 1 min 1 sec`.

use std::time::Duration;

/// Render a duration using hours, minutes and seconds.
///
/// Sub-second remainders are truncated. Zero-valued components are omitted,
/// and anything below one second is `less than a second`.
#[must_use]
pub fn humanize(duration: Duration) -> String {
    if duration < Duration::from_secs(1) {
        return "less than a second".to_string();
    }

    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours} h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes} min"));
    }
    if seconds > 0 {
        parts.push(format!("{seconds} sec"));
    }
    parts.join(" ")
}
