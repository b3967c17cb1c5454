//! Command surface shared by buttons and keyboard shortcuts.

use crate::{Error, Result, TimerEngine};
use chrono::NaiveDate;
use std::str::FromStr;

/// A user action the host forwards to the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Toggle,
    Reset,
    Skip,
    ResetSession,
}

impl Command {
    /// Map a shortcut key (space, r, s, x) to a command
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            ' ' => Some(Command::Toggle),
            'r' => Some(Command::Reset),
            's' => Some(Command::Skip),
            'x' => Some(Command::ResetSession),
            _ => None,
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "start" => Ok(Command::Start),
            "pause" => Ok(Command::Pause),
            "toggle" => Ok(Command::Toggle),
            "reset" => Ok(Command::Reset),
            "skip" => Ok(Command::Skip),
            "reset-session" | "reset_session" => Ok(Command::ResetSession),
            other => Err(Error::Other(format!("Unknown command: {}", other))),
        }
    }
}

impl TimerEngine {
    /// Run a command and report whether the tick driver should be active
    pub fn apply(&mut self, command: Command, today: NaiveDate) -> bool {
        tracing::debug!("Applying {:?}", command);
        match command {
            Command::Start => self.start(today),
            Command::Pause => self.pause(),
            Command::Toggle => self.toggle(today),
            Command::Reset => self.reset(),
            Command::Skip => self.skip(),
            Command::ResetSession => self.reset_session(),
        }
        self.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Phase;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_shortcut_keys() {
        assert_eq!(Command::from_key(' '), Some(Command::Toggle));
        assert_eq!(Command::from_key('R'), Some(Command::Reset));
        assert_eq!(Command::from_key('s'), Some(Command::Skip));
        assert_eq!(Command::from_key('x'), Some(Command::ResetSession));
        assert_eq!(Command::from_key('q'), None);
    }

    #[test]
    fn test_parse_words() {
        assert_eq!("toggle".parse::<Command>().unwrap(), Command::Toggle);
        assert_eq!("start".parse::<Command>().unwrap(), Command::Start);
        assert_eq!("PAUSE".parse::<Command>().unwrap(), Command::Pause);
        assert_eq!("Reset-Session".parse::<Command>().unwrap(), Command::ResetSession);
        assert!("launch".parse::<Command>().is_err());
    }

    #[test]
    fn test_apply_reports_running() {
        let mut engine = TimerEngine::with_defaults(today());
        assert!(engine.apply(Command::Toggle, today()));
        engine.tick();
        assert!(!engine.apply(Command::Reset, today()));
        assert_eq!(engine.time_remaining(), 1200);

        engine.apply(Command::Toggle, today());
        assert!(!engine.apply(Command::Skip, today()));
        assert_eq!(engine.phase(), Phase::ShortBreak);

        assert!(!engine.apply(Command::ResetSession, today()));
        assert_eq!(engine.phase(), Phase::Focus);
    }

    #[test]
    fn test_start_and_pause_are_idempotent() {
        let mut engine = TimerEngine::with_defaults(today());
        assert!(!engine.apply(Command::Pause, today()));
        assert!(!engine.apply(Command::Pause, today()));

        assert!(engine.apply(Command::Start, today()));
        engine.tick();
        assert!(engine.apply(Command::Start, today()));
        assert_eq!(engine.time_remaining(), 1199);

        assert!(!engine.apply(Command::Pause, today()));
        assert_eq!(engine.time_remaining(), 1199);
    }
}
