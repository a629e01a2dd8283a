// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Training session lifecycle and scoring.
//!
//! The [`SessionController`] is the single owner of session state. It is
//! driven entirely from the main event loop:
//!
//! * user actions call [`SessionController::start_session`],
//!   [`SessionController::stop_session`],
//!   [`SessionController::handle_response`] and
//!   [`SessionController::toggle_sound`];
//! * elapsed timers call [`SessionController::on_timer`].
//!
//! # Trial loop
//!
//! ```text
//! Idle --start--> TrialPending --cue timer--> AwaitingResponse
//!                      ^                              |
//!                      |                          response
//!                 next-trial timer                    v
//!                      +------------------------- Feedback
//! ```
//!
//! Stopping from any state returns to `Idle` and cancels every timer the
//! controller holds. Timer events whose id the controller no longer holds
//! are dropped, so a late timer cannot touch a stopped or newer session.

mod state;
mod trial;

pub(crate) use trial::TrialScheduler;

use std::time::Duration;

use chrono::Local;
use rand::Rng;
use tracing::{debug, info};

use self::state::SessionState;
use crate::{
    audio::{AudioCuePlayer, AudioOutput},
    model::{Direction, SessionSnapshot, TrialRecord},
    timer::{Scheduler, TimerHandle, TimerId},
};

pub(crate) struct SessionController<O: AudioOutput, S: Scheduler, R: Rng> {
    player: AudioCuePlayer<O>,
    scheduler: S,
    trials: TrialScheduler<R>,
    state: SessionState,
    sound_enabled: bool,
    feedback_delay: Duration,
    next_trial: Option<TimerHandle>,
}

impl<O: AudioOutput, S: Scheduler, R: Rng> SessionController<O, S, R> {
    pub(crate) fn new(
        player: AudioCuePlayer<O>,
        scheduler: S,
        trials: TrialScheduler<R>,
        feedback_delay: Duration,
        sound_enabled: bool,
    ) -> Self {
        Self {
            player,
            scheduler,
            trials,
            state: SessionState::new(),
            sound_enabled,
            feedback_delay,
            next_trial: None,
        }
    }

    /// Starts a fresh session, discarding the previous session's results,
    /// and begins the first trial.
    pub(crate) fn start_session(&mut self) {
        self.player.ensure_resumed();
        self.cancel_timers();

        self.state.start();
        info!("Session started");

        self.trials.start_trial(&mut self.state, &mut self.scheduler);
    }

    /// Ends the session. Tallies and history stay available.
    pub(crate) fn stop_session(&mut self) {
        self.cancel_timers();
        self.state.stop();

        info!(
            total = self.state.total_attempts(),
            correct = self.state.correct_attempts(),
            "Session stopped"
        );
    }

    /// Scores an answer for the current trial.
    ///
    /// Ignored, returning `false`, unless the cue of the current trial has
    /// played and the trial has not been answered yet. An accepted answer
    /// schedules the next trial after the feedback delay.
    pub(crate) fn handle_response(&mut self, response: Direction) -> bool {
        let Some(record) = self.state.record_response(response, Local::now()) else {
            debug!(%response, "Response ignored");
            return false;
        };

        info!(
            direction = %record.direction,
            %response,
            correct = record.correct,
            "Response scored"
        );

        self.next_trial = Some(self.scheduler.schedule(self.feedback_delay));
        true
    }

    /// Flips the sound flag and returns its new value.
    pub(crate) fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        info!(enabled = self.sound_enabled, "Sound toggled");
        self.sound_enabled
    }

    /// Reacts to an elapsed timer: plays a pending cue or starts the next
    /// trial. Unknown or superseded timers are ignored.
    pub(crate) fn on_timer(&mut self, id: TimerId) {
        if let Some(direction) = self.trials.take_due(id) {
            self.player.play(direction, self.sound_enabled);
            self.state.cue_played();
            return;
        }

        if self.next_trial.as_ref().is_some_and(|h| h.id() == id) {
            self.next_trial = None;
            if self.state.is_active() {
                self.trials.start_trial(&mut self.state, &mut self.scheduler);
            }
            return;
        }

        debug!(timer = id.0, "Stale timer ignored");
    }

    pub(crate) fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.state.phase(),
            active: self.state.is_active(),
            current_direction: self.state.current_direction(),
            cue_pending: self.state.cue_pending(),
            feedback: self.state.feedback(),
            total_attempts: self.state.total_attempts(),
            correct_attempts: self.state.correct_attempts(),
            accuracy: self.state.accuracy(),
            sound_enabled: self.sound_enabled,
            asset_loaded: self.player.has_asset(),
        }
    }

    pub(crate) fn history(&self) -> &[TrialRecord] {
        self.state.history()
    }

    pub(crate) fn player_mut(&mut self) -> &mut AudioCuePlayer<O> {
        &mut self.player
    }

    fn cancel_timers(&mut self) {
        self.trials.cancel();
        if let Some(handle) = self.next_trial.take() {
            handle.cancel();
        }
    }
}
