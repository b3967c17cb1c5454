//! Core domain types for the Pomo timer.
//!
//! This module defines:
//! - Timer phases and their display properties
//! - The built-in set of completion sounds

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Phases
// ============================================================================

/// The interval type the timer is currently counting down
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Focus,
    ShortBreak,
    LongBreak,
}

impl Phase {
    /// Human-readable name shown in the timer window
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Focus => "Focus",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }

    /// Status-bar glyph for the phase
    pub fn emoji(&self) -> &'static str {
        match self {
            Phase::Focus => "👩🏾‍💻",
            Phase::ShortBreak | Phase::LongBreak => "☕",
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, Phase::Focus)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Sounds
// ============================================================================

/// Completion sounds offered in settings
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SoundId {
    #[default]
    Glass,
    Basso,
    Blow,
    Bottle,
    Frog,
    Funk,
    Hero,
    Morse,
    Ping,
    Pop,
    Purr,
    Sosumi,
    Submarine,
    Tink,
}

impl SoundId {
    /// Every selectable sound, in settings-menu order
    pub const ALL: [SoundId; 14] = [
        SoundId::Glass,
        SoundId::Basso,
        SoundId::Blow,
        SoundId::Bottle,
        SoundId::Frog,
        SoundId::Funk,
        SoundId::Hero,
        SoundId::Morse,
        SoundId::Ping,
        SoundId::Pop,
        SoundId::Purr,
        SoundId::Sosumi,
        SoundId::Submarine,
        SoundId::Tink,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SoundId::Glass => "Glass",
            SoundId::Basso => "Basso",
            SoundId::Blow => "Blow",
            SoundId::Bottle => "Bottle",
            SoundId::Frog => "Frog",
            SoundId::Funk => "Funk",
            SoundId::Hero => "Hero",
            SoundId::Morse => "Morse",
            SoundId::Ping => "Ping",
            SoundId::Pop => "Pop",
            SoundId::Purr => "Purr",
            SoundId::Sosumi => "Sosumi",
            SoundId::Submarine => "Submarine",
            SoundId::Tink => "Tink",
        }
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SoundId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        SoundId::ALL
            .iter()
            .copied()
            .find(|sound| sound.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownSound(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_labels() {
        assert_eq!(Phase::Focus.label(), "Focus");
        assert_eq!(Phase::ShortBreak.label(), "Short Break");
        assert_eq!(Phase::LongBreak.label(), "Long Break");
        assert_eq!(Phase::default(), Phase::Focus);
    }

    #[test]
    fn test_breaks_share_emoji() {
        assert_eq!(Phase::ShortBreak.emoji(), Phase::LongBreak.emoji());
        assert_ne!(Phase::Focus.emoji(), Phase::ShortBreak.emoji());
        assert!(Phase::LongBreak.is_break());
        assert!(!Phase::Focus.is_break());
    }

    #[test]
    fn test_sound_set_is_fixed() {
        assert_eq!(SoundId::ALL.len(), 14);
        assert_eq!(SoundId::default(), SoundId::Glass);
        assert_eq!(SoundId::ALL[13], SoundId::Tink);
    }

    #[test]
    fn test_sound_parse_ignores_case() {
        assert_eq!("submarine".parse::<SoundId>().unwrap(), SoundId::Submarine);
        assert_eq!(" Pop ".parse::<SoundId>().unwrap(), SoundId::Pop);
        assert!(matches!(
            "Trumpet".parse::<SoundId>(),
            Err(Error::UnknownSound(name)) if name == "Trumpet"
        ));
    }
}
