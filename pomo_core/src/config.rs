//! Configuration file support for Pomo.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/pomo/config.toml`.

use crate::{Error, Result, Settings, SoundId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,

    #[serde(default)]
    pub sound: SoundConfig,
}

/// Phase lengths and cycle size
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,

    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,

    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,

    #[serde(default = "default_sessions_before_long_break")]
    pub sessions_before_long_break: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            sessions_before_long_break: default_sessions_before_long_break(),
        }
    }
}

/// Completion sound selection
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SoundConfig {
    #[serde(default)]
    pub selected: SoundId,

    /// Directory searched for `<Name>.aiff`
    #[serde(default = "default_sound_dir")]
    pub dir: PathBuf,

    /// Program launched with the sound file as its only argument
    #[serde(default = "default_sound_player")]
    pub player: String,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            selected: SoundId::default(),
            dir: default_sound_dir(),
            player: default_sound_player(),
        }
    }
}

// Default value functions
fn default_focus_minutes() -> u32 {
    20
}

fn default_short_break_minutes() -> u32 {
    2
}

fn default_long_break_minutes() -> u32 {
    15
}

fn default_sessions_before_long_break() -> u32 {
    4
}

fn default_sound_dir() -> PathBuf {
    PathBuf::from("/System/Library/Sounds")
}

fn default_sound_player() -> String {
    "afplay".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load from `path`, or fall back to defaults when it doesn't exist
    pub fn load_from_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("HOME environment variable not set".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("pomo").join("config.toml"))
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path()?;
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Render as the TOML that `save_to` writes
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Reject values the engine can't count down meaningfully
    pub fn validate(&self) -> Result<()> {
        let timer = &self.timer;
        for (name, minutes) in [
            ("focus_minutes", timer.focus_minutes),
            ("short_break_minutes", timer.short_break_minutes),
            ("long_break_minutes", timer.long_break_minutes),
        ] {
            if minutes == 0 {
                return Err(Error::Config(format!("{} must be at least 1", name)));
            }
        }
        if timer.sessions_before_long_break == 0 {
            return Err(Error::Config(
                "sessions_before_long_break must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Validated engine settings
    pub fn to_settings(&self) -> Result<Settings> {
        self.validate()?;
        let timer = &self.timer;
        Ok(Settings {
            selected_sound: self.sound.selected,
            ..Settings::from_minutes(
                timer.focus_minutes,
                timer.short_break_minutes,
                timer.long_break_minutes,
                timer.sessions_before_long_break,
            )
        })
    }
}
