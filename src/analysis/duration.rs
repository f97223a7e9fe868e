// ============================================================
// Layer 5 — Duration Formatting
// ============================================================
// Reading time (fractional minutes) → "{h}h {m}m {s}s":
//   - total seconds = minutes * 60, rounded half-to-even
//   - hours shown only when > 0, minutes only when h or m > 0
//
//   0.0  → "0s"
//   1.5  → "1m 30s"
//   90.0 → "1h 30m 0s"
//
// Compute time (a std Duration) → a short label:
//   < 100 ms → "12.3 ms"
//   < 60 s   → "1.25 s"
//   < 60 min → "2 min 5 s"
//   else     → "1 h 2 min 5 s"

use std::time::Duration;

/// Format a reading time given in minutes
pub fn format_duration(minutes: f64) -> String {
    let total_seconds = (minutes * 60.0).round_ties_even() as u64;

    let hours = total_seconds / 3600;
    let mins  = (total_seconds % 3600) / 60;
    let secs  = total_seconds % 60;

    if hours > 0 {
        format!("{hours}h {mins}m {secs}s")
    } else if mins > 0 {
        format!("{mins}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Format how long the analysis itself took
pub fn format_compute_time(elapsed: Duration) -> String {
    let secs_f = elapsed.as_secs_f64();

    if secs_f < 0.1 {
        format!("{:.1} ms", secs_f * 1000.0)
    } else if secs_f < 60.0 {
        format!("{secs_f:.2} s")
    } else {
        let whole = elapsed.as_secs();
        let mins  = whole / 60;
        let secs  = whole % 60;
        if mins < 60 {
            format!("{mins} min {secs} s")
        } else {
            format!("{} h {} min {secs} s", mins / 60, mins % 60)
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_minutes() {
        assert_eq!(format_duration(0.0), "0s");
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(format_duration(1.5), "1m 30s");
    }

    #[test]
    fn test_hours_minutes_seconds() {
        assert_eq!(format_duration(90.0), "1h 30m 0s");
    }

    #[test]
    fn test_rounds_up_into_next_minute() {
        // 59.99 seconds
        assert_eq!(format_duration(59.99 / 60.0), "1m 0s");
    }

    #[test]
    fn test_half_seconds_round_to_even() {
        // 7.5 s → 8, 22.5 s → 22
        assert_eq!(format_duration(0.125), "8s");
        assert_eq!(format_duration(0.375), "22s");
    }

    #[test]
    fn test_exact_hour_keeps_zero_fields() {
        assert_eq!(format_duration(60.0), "1h 0m 0s");
    }

    #[test]
    fn test_compute_time_bands() {
        assert_eq!(format_compute_time(Duration::from_micros(1234)), "1.2 ms");
        assert_eq!(format_compute_time(Duration::from_millis(1250)), "1.25 s");
        assert_eq!(format_compute_time(Duration::from_secs(125)), "2 min 5 s");
        assert_eq!(format_compute_time(Duration::from_secs(3725)), "1 h 2 min 5 s");
    }

    #[test]
    fn test_compute_time_band_edges() {
        assert_eq!(format_compute_time(Duration::from_millis(100)), "0.10 s");
        assert_eq!(format_compute_time(Duration::from_secs(60)), "1 min 0 s");
        assert_eq!(format_compute_time(Duration::from_secs(3600)), "1 h 0 min 0 s");
    }
}
