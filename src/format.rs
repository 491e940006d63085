//! Human-readable distance and duration labels.

/// `"850 m"` below one kilometer, `"2.3 km"` otherwise.
pub fn format_distance(km: f64) -> String {
    let km = sanitize(km);
    let meters = (km * 1000.0).round();
    if meters < 1000.0 {
        format!("{} m", meters as u64)
    } else {
        format!("{:.1} km", km)
    }
}

/// `"45 min"` below an hour, `"1h 15m"` (or `"2h"`) otherwise.
pub fn format_duration(minutes: f64) -> String {
    let total = sanitize(minutes).round() as u64;
    if total < 60 {
        return format!("{} min", total);
    }

    let hours = total / 60;
    let rest = total % 60;
    if rest == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, rest)
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
