//! Completion notification with sound fallback.
//!
//! The engine only names a sound. Resolving and playing it happens here,
//! and nothing that goes wrong here reaches the engine.

use crate::{PhaseCompleted, Result, SoundId};

/// Sound output provided by the host
pub trait SoundPlayer {
    /// Play a built-in sound, failing if the host can't produce it
    fn play(&mut self, sound: SoundId) -> Result<()>;

    /// Generic alert tone, the last resort
    fn beep(&mut self);
}

/// Plays completion sounds, degrading to the default sound and then a beep
pub struct Notifier<P: SoundPlayer> {
    player: P,
}

impl<P: SoundPlayer> Notifier<P> {
    pub fn new(player: P) -> Self {
        Self { player }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// React to a finished phase
    pub fn announce(&mut self, event: &PhaseCompleted) {
        tracing::info!("Announcing {} -> {} with {}", event.from, event.to, event.sound);
        self.play_with_fallback(event.sound);
    }

    /// Play a sound from settings so the user can hear it
    pub fn preview(&mut self, sound: SoundId) {
        self.play_with_fallback(sound);
    }

    fn play_with_fallback(&mut self, sound: SoundId) {
        let err = match self.player.play(sound) {
            Ok(()) => return,
            Err(e) => e,
        };
        tracing::warn!("Unable to play {}: {}", sound, err);

        let fallback = SoundId::default();
        if sound != fallback {
            match self.player.play(fallback) {
                Ok(()) => return,
                Err(e) => tracing::warn!("Unable to play fallback {}: {}", fallback, e),
            }
        }

        self.player.beep();
    }
}
