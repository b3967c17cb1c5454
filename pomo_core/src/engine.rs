//! Timer engine: phase state machine, countdown and daily reset.
//!
//! The engine owns no thread and never blocks. The host drives it:
//! - `tick()` once per elapsed second while `is_running()`
//! - `start`/`pause`/`toggle`/`reset`/`skip`/`reset_session` from user input
//! - `check_daily_reset` whenever the app comes to the foreground
//!
//! Phase cycle:
//!
//! ```text
//! Focus -> ShortBreak -> Focus -> ... -> Focus -> LongBreak -> Focus
//!          (sessions_before_long_break focus sessions per cycle)
//! ```

use crate::{DerivedView, Phase, Settings, SoundId};
use chrono::{Local, NaiveDate};
use once_cell::unsync::OnceCell;
use serde::Serialize;

/// Signal emitted when a phase runs out naturally
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PhaseCompleted {
    pub from: Phase,
    pub to: Phase,
    /// Sound the notification collaborator should play
    pub sound: SoundId,
}

/// Serializable picture of the engine for hosts and logs
#[derive(Clone, Debug, Serialize)]
pub struct EngineSnapshot {
    pub phase: Phase,
    pub time_remaining: u32,
    pub is_running: bool,
    pub session_number: u32,
    pub completed_focus_sessions: u32,
    pub completed_short_breaks: u32,
    pub last_reset_date: NaiveDate,
    pub view: DerivedView,
}

/// Today's date on the host's local calendar
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// The single-user interval timer
#[derive(Clone, Debug)]
pub struct TimerEngine {
    settings: Settings,
    phase: Phase,
    time_remaining: u32,
    running: bool,
    session_number: u32,
    completed_focus_sessions: u32,
    completed_short_breaks: u32,
    last_reset_date: NaiveDate,
    view: OnceCell<DerivedView>,
}

impl TimerEngine {
    /// Create an engine in the Focus phase at full duration, paused
    pub fn new(mut settings: Settings, today: NaiveDate) -> Self {
        settings.clamp();
        Self {
            time_remaining: settings.duration_of(Phase::Focus),
            settings,
            phase: Phase::Focus,
            running: false,
            session_number: 1,
            completed_focus_sessions: 0,
            completed_short_breaks: 0,
            last_reset_date: today,
            view: OnceCell::new(),
        }
    }

    pub fn with_defaults(today: NaiveDate) -> Self {
        Self::new(Settings::default(), today)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Position within the current long-break cycle, starting at 1
    pub fn session_number(&self) -> u32 {
        self.session_number
    }

    pub fn completed_focus_sessions(&self) -> u32 {
        self.completed_focus_sessions
    }

    pub fn completed_short_breaks(&self) -> u32 {
        self.completed_short_breaks
    }

    pub fn last_reset_date(&self) -> NaiveDate {
        self.last_reset_date
    }

    /// Configured length of the current phase
    pub fn phase_duration(&self) -> u32 {
        self.settings.duration_of(self.phase)
    }

    /// Derived values, recomputed only after a mutation
    pub fn view(&self) -> &DerivedView {
        self.view
            .get_or_init(|| DerivedView::compute(self.phase, self.time_remaining, &self.settings))
    }

    pub fn formatted_time(&self) -> &str {
        &self.view().formatted_time
    }

    pub fn progress(&self) -> f64 {
        self.view().progress
    }

    pub fn phase_label(&self) -> &'static str {
        self.view().phase_label
    }

    pub fn title(&self) -> &str {
        &self.view().title
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            phase: self.phase,
            time_remaining: self.time_remaining,
            is_running: self.running,
            session_number: self.session_number,
            completed_focus_sessions: self.completed_focus_sessions,
            completed_short_breaks: self.completed_short_breaks,
            last_reset_date: self.last_reset_date,
            view: self.view().clone(),
        }
    }

    // ── Settings ─────────────────────────────────────────────────────

    /// Modify settings in place
    ///
    /// Takes effect on the next duration lookup. The remaining time of the
    /// phase in progress is left alone.
    pub fn update_settings<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Settings),
    {
        f(&mut self.settings);
        self.settings.clamp();
        let cycle = self.settings.cycle_length();
        if self.session_number > cycle {
            self.session_number = cycle;
        }
        tracing::debug!("Settings updated: {:?}", self.settings);
        self.invalidate();
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Advance the countdown by one second
    ///
    /// Returns the completion signal on the tick that finds the countdown
    /// already at zero. Natural completion pauses the engine.
    pub fn tick(&mut self) -> Option<PhaseCompleted> {
        if !self.running {
            tracing::trace!("Tick ignored while paused");
            return None;
        }

        if self.time_remaining > 0 {
            self.time_remaining -= 1;
            self.invalidate();
            return None;
        }

        self.pause();
        let from = self.phase;
        self.transition(true);
        let completed = PhaseCompleted {
            from,
            to: self.phase,
            sound: self.settings.selected_sound,
        };
        tracing::info!(
            "{} completed, next phase {} (session {})",
            from,
            self.phase,
            self.session_number
        );
        Some(completed)
    }

    pub fn start(&mut self, today: NaiveDate) {
        self.check_daily_reset(today);
        if !self.running {
            tracing::debug!("Timer started in {} at {}", self.phase, self.formatted_time());
        }
        self.running = true;
    }

    pub fn pause(&mut self) {
        if self.running {
            tracing::debug!("Timer paused at {}", self.formatted_time());
        }
        self.running = false;
    }

    pub fn toggle(&mut self, today: NaiveDate) {
        if self.running {
            self.pause();
        } else {
            self.start(today);
        }
    }

    /// Pause and refill the current phase
    pub fn reset(&mut self) {
        self.pause();
        self.time_remaining = self.phase_duration();
        self.invalidate();
        tracing::debug!("Timer reset to {}", self.formatted_time());
    }

    /// Pause and move to the next phase without counting a completion
    pub fn skip(&mut self) {
        self.pause();
        let from = self.phase;
        self.transition(false);
        tracing::debug!("Skipped {} -> {}", from, self.phase);
    }

    /// Pause and start the day over: Focus, session 1, no completions
    pub fn reset_session(&mut self) {
        self.pause();
        self.completed_focus_sessions = 0;
        self.completed_short_breaks = 0;
        self.session_number = 1;
        self.phase = Phase::Focus;
        self.time_remaining = self.settings.focus_duration;
        self.invalidate();
        tracing::debug!("Session reset");
    }

    /// Zero the daily counters if `today` is a different calendar day
    ///
    /// Returns true when a reset happened.
    pub fn check_daily_reset(&mut self, today: NaiveDate) -> bool {
        if today == self.last_reset_date {
            return false;
        }
        tracing::info!(
            "New day ({} -> {}), clearing {} focus sessions and {} short breaks",
            self.last_reset_date,
            today,
            self.completed_focus_sessions,
            self.completed_short_breaks
        );
        self.completed_focus_sessions = 0;
        self.completed_short_breaks = 0;
        self.session_number = 1;
        self.last_reset_date = today;
        self.invalidate();
        true
    }

    /// Shared phase transition for natural completion and skip
    fn transition(&mut self, counts_as_completion: bool) {
        self.phase = match self.phase {
            Phase::Focus => {
                if counts_as_completion {
                    self.completed_focus_sessions += 1;
                }
                self.session_number += 1;
                if self.session_number > self.settings.cycle_length() {
                    self.session_number = 1;
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak => {
                if counts_as_completion {
                    self.completed_short_breaks += 1;
                }
                Phase::Focus
            }
            Phase::LongBreak => Phase::Focus,
        };
        self.time_remaining = self.phase_duration();
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.view.take();
    }
}
