#![forbid(unsafe_code)]

//! Core timer engine for the Pomo interval timer.
//!
//! This crate provides:
//! - Phase and sound types
//! - The timer engine (phase state machine, countdown, daily reset)
//! - Derived view computation with an invalidating cache
//! - The command surface used by hosts and keyboard shortcuts
//! - Completion-sound fallback handling
//! - Configuration file support

pub mod types;
pub mod error;
pub mod settings;
pub mod config;
pub mod logging;
pub mod view;
pub mod engine;
pub mod command;
pub mod notify;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use settings::Settings;
pub use config::Config;
pub use view::{format_clock, progress_fraction, DerivedView};
pub use engine::{local_today, EngineSnapshot, PhaseCompleted, TimerEngine};
pub use command::Command;
pub use notify::{Notifier, SoundPlayer};
