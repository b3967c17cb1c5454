//! Engine settings.
//!
//! Durations are whole seconds. The choice tables mirror what the settings
//! screen offers; the engine itself accepts any value.

use crate::{Phase, SoundId};
use serde::{Deserialize, Serialize};

/// Focus lengths offered in settings (minutes)
pub const FOCUS_MINUTES_CHOICES: [u32; 10] = [15, 20, 25, 30, 35, 40, 45, 50, 55, 60];

/// Short break lengths offered in settings (minutes)
pub const SHORT_BREAK_MINUTES_CHOICES: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Long break lengths offered in settings (minutes)
pub const LONG_BREAK_MINUTES_CHOICES: [u32; 5] = [10, 15, 20, 25, 30];

/// Cycle lengths offered in settings
pub const SESSIONS_CHOICES: [u32; 5] = [2, 3, 4, 5, 6];

/// Timer settings consumed by the engine
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub focus_duration: u32,
    pub short_break_duration: u32,
    pub long_break_duration: u32,
    pub sessions_before_long_break: u32,
    pub selected_sound: SoundId,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_duration: 20 * 60,
            short_break_duration: 2 * 60,
            long_break_duration: 15 * 60,
            sessions_before_long_break: 4,
            selected_sound: SoundId::Glass,
        }
    }
}

impl Settings {
    /// Configured length of `phase` in seconds
    pub fn duration_of(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Focus => self.focus_duration,
            Phase::ShortBreak => self.short_break_duration,
            Phase::LongBreak => self.long_break_duration,
        }
    }

    /// Focus sessions per long-break cycle, never below 1
    pub fn cycle_length(&self) -> u32 {
        self.sessions_before_long_break.max(1)
    }

    /// Build settings from minute values as chosen in the settings screen
    pub fn from_minutes(focus: u32, short_break: u32, long_break: u32, sessions: u32) -> Self {
        Self {
            focus_duration: focus.saturating_mul(60),
            short_break_duration: short_break.saturating_mul(60),
            long_break_duration: long_break.saturating_mul(60),
            sessions_before_long_break: sessions,
            ..Self::default()
        }
    }

    pub(crate) fn clamp(&mut self) {
        if self.sessions_before_long_break < 1 {
            tracing::warn!("sessions_before_long_break was 0, clamping to 1");
            self.sessions_before_long_break = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_settings_screen() {
        let settings = Settings::default();
        assert_eq!(settings.focus_duration, 1200);
        assert_eq!(settings.short_break_duration, 120);
        assert_eq!(settings.long_break_duration, 900);
        assert_eq!(settings.sessions_before_long_break, 4);
        assert!(FOCUS_MINUTES_CHOICES.contains(&(settings.focus_duration / 60)));
        assert!(SHORT_BREAK_MINUTES_CHOICES.contains(&(settings.short_break_duration / 60)));
        assert!(LONG_BREAK_MINUTES_CHOICES.contains(&(settings.long_break_duration / 60)));
        assert!(SESSIONS_CHOICES.contains(&settings.sessions_before_long_break));
    }

    #[test]
    fn test_duration_lookup() {
        let settings = Settings::from_minutes(25, 5, 30, 3);
        assert_eq!(settings.duration_of(Phase::Focus), 1500);
        assert_eq!(settings.duration_of(Phase::ShortBreak), 300);
        assert_eq!(settings.duration_of(Phase::LongBreak), 1800);
    }

    #[test]
    fn test_cycle_length_never_zero() {
        let mut settings = Settings {
            sessions_before_long_break: 0,
            ..Settings::default()
        };
        assert_eq!(settings.cycle_length(), 1);

        settings.clamp();
        assert_eq!(settings.sessions_before_long_break, 1);
    }
}
