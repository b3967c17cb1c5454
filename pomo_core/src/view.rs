//! Derived values shown by the presentation layer.
//!
//! All of these are pure functions of the run state and settings. The engine
//! keeps one [`DerivedView`] cached and drops it on every mutation.

use crate::{Phase, Settings};
use serde::Serialize;

/// Format a second count as `MM:SS`
///
/// Minutes are not wrapped into hours, so 3600 seconds is `60:00`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Fraction of the phase already elapsed, in `[0, 1]`
///
/// A zero-length phase counts as complete.
pub fn progress_fraction(remaining: u32, total: u32) -> f64 {
    if total == 0 {
        return 1.0;
    }
    (1.0 - f64::from(remaining) / f64::from(total)).clamp(0.0, 1.0)
}

/// Everything a window or status item needs to draw the timer
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivedView {
    pub formatted_time: String,
    pub progress: f64,
    pub phase_label: &'static str,
    /// Status-bar title, e.g. `☕ 01:59`
    pub title: String,
}

impl DerivedView {
    pub fn compute(phase: Phase, remaining: u32, settings: &Settings) -> Self {
        let formatted_time = format_clock(remaining);
        let title = format!("{} {}", phase.emoji(), formatted_time);
        Self {
            progress: progress_fraction(remaining, settings.duration_of(phase)),
            phase_label: phase.label(),
            formatted_time,
            title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn test_progress_endpoints() {
        assert_eq!(progress_fraction(1200, 1200), 0.0);
        assert_eq!(progress_fraction(0, 1200), 1.0);
        assert!((progress_fraction(300, 1200) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_zero_duration_is_complete() {
        assert_eq!(progress_fraction(0, 0), 1.0);
        assert_eq!(progress_fraction(10, 0), 1.0);
    }

    #[test]
    fn test_progress_clamped_when_phase_shortened() {
        // remaining exceeds a duration that was lowered mid-phase
        assert_eq!(progress_fraction(1500, 900), 0.0);
    }

    #[test]
    fn test_view_title() {
        let settings = Settings::default();
        let view = DerivedView::compute(Phase::ShortBreak, 119, &settings);
        assert_eq!(view.formatted_time, "01:59");
        assert_eq!(view.phase_label, "Short Break");
        assert_eq!(view.title, "☕ 01:59");
    }
}
