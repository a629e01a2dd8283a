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

//! Session tallies and trial history.

use chrono::{DateTime, Local};

use crate::model::{self, Direction, Feedback, SessionPhase, TrialRecord};

/// Mutable state of one training session.
///
/// Invariants: `correct_attempts <= total_attempts` and
/// `history.len() == total_attempts`. Both only change together in
/// [`SessionState::record_response`].
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    active: bool,
    current_direction: Option<Direction>,
    cue_pending: bool,
    feedback: Option<Feedback>,
    total_attempts: u32,
    correct_attempts: u32,
    history: Vec<TrialRecord>,
}

impl SessionState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Marks the session active and clears the previous session's results.
    pub(crate) fn start(&mut self) {
        self.active = true;
        self.current_direction = None;
        self.cue_pending = false;
        self.feedback = None;
        self.total_attempts = 0;
        self.correct_attempts = 0;
        self.history.clear();
    }

    /// Marks the session idle. Tallies and history stay readable.
    pub(crate) fn stop(&mut self) {
        self.active = false;
        self.current_direction = None;
        self.feedback = None;
        self.cue_pending = false;
    }

    pub(crate) fn begin_trial(&mut self, direction: Direction) {
        self.current_direction = Some(direction);
        self.feedback = None;
        self.cue_pending = true;
    }

    pub(crate) fn cue_played(&mut self) {
        self.cue_pending = false;
    }

    /// Whether an answer would be scored right now.
    pub(crate) fn accepts_response(&self) -> bool {
        self.phase() == SessionPhase::AwaitingResponse
    }

    /// Scores `response` against the current trial.
    ///
    /// Returns `None` without touching any state when no answer is expected:
    /// no trial, cue still pending, or the trial already answered.
    pub(crate) fn record_response(
        &mut self,
        response: Direction,
        timestamp: DateTime<Local>,
    ) -> Option<&TrialRecord> {
        if !self.accepts_response() {
            return None;
        }
        let direction = self.current_direction?;

        let record = TrialRecord::new(direction, response, timestamp);
        self.total_attempts += 1;
        if record.correct {
            self.correct_attempts += 1;
        }
        self.feedback = Some(Feedback::from_correct(record.correct));
        self.history.push(record);

        self.history.last()
    }

    pub(crate) fn phase(&self) -> SessionPhase {
        if !self.active {
            SessionPhase::Idle
        } else if self.current_direction.is_none() || self.cue_pending {
            SessionPhase::TrialPending
        } else if self.feedback.is_some() {
            SessionPhase::Feedback
        } else {
            SessionPhase::AwaitingResponse
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn current_direction(&self) -> Option<Direction> {
        self.current_direction
    }

    pub(crate) fn cue_pending(&self) -> bool {
        self.cue_pending
    }

    pub(crate) fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub(crate) fn total_attempts(&self) -> u32 {
        self.total_attempts
    }

    pub(crate) fn correct_attempts(&self) -> u32 {
        self.correct_attempts
    }

    pub(crate) fn accuracy(&self) -> f64 {
        model::accuracy(self.correct_attempts, self.total_attempts)
    }

    pub(crate) fn history(&self) -> &[TrialRecord] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::util::format::format_accuracy;

    fn assert_invariants(state: &SessionState) {
        assert!(state.correct_attempts() <= state.total_attempts());
        assert_eq!(state.history().len() as u32, state.total_attempts());
    }

    #[test]
    fn new_state_is_idle() {
        let state = SessionState::new();
        assert_eq!(state.phase(), SessionPhase::Idle);
        assert_eq!(state.accuracy(), 0.0);
        assert_invariants(&state);
    }

    #[test]
    fn trial_walks_through_phases() {
        let mut state = SessionState::new();
        state.start();
        state.begin_trial(Direction::Left);
        assert_eq!(state.phase(), SessionPhase::TrialPending);

        state.cue_played();
        assert_eq!(state.phase(), SessionPhase::AwaitingResponse);

        let record = state.record_response(Direction::Left, Local::now()).cloned();
        assert!(record.is_some_and(|r| r.correct));
        assert_eq!(state.phase(), SessionPhase::Feedback);
        assert_eq!(state.feedback(), Some(Feedback::Correct));
        assert_invariants(&state);
    }

    #[test]
    fn pending_cue_rejects_answers() {
        let mut state = SessionState::new();
        state.start();
        state.begin_trial(Direction::Right);

        for _ in 0..5 {
            assert!(state.record_response(Direction::Right, Local::now()).is_none());
        }
        assert_eq!(state.total_attempts(), 0);
        assert!(state.history().is_empty());
        assert_eq!(state.feedback(), None);
    }

    #[test]
    fn answered_trial_rejects_second_answer() {
        let mut state = SessionState::new();
        state.start();
        state.begin_trial(Direction::Right);
        state.cue_played();

        assert!(state.record_response(Direction::Left, Local::now()).is_some());
        assert!(state.record_response(Direction::Right, Local::now()).is_none());

        assert_eq!(state.total_attempts(), 1);
        assert_eq!(state.correct_attempts(), 0);
        assert_eq!(state.feedback(), Some(Feedback::Wrong));
        assert_invariants(&state);
    }

    #[test]
    fn stop_keeps_results_and_start_clears_them() {
        let mut state = SessionState::new();
        state.start();
        state.begin_trial(Direction::Left);
        state.cue_played();
        state.record_response(Direction::Left, Local::now());

        state.stop();
        assert_eq!(state.phase(), SessionPhase::Idle);
        assert_eq!(state.current_direction(), None);
        assert_eq!(state.feedback(), None);
        assert!(!state.cue_pending());
        assert_eq!(state.total_attempts(), 1);
        assert_eq!(state.history().len(), 1);
        assert!(state.record_response(Direction::Left, Local::now()).is_none());

        state.start();
        assert!(state.is_active());
        assert_eq!(state.total_attempts(), 0);
        assert_eq!(state.correct_attempts(), 0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn one_in_sixteen_shows_as_six_point_three() {
        let mut state = SessionState::new();
        state.start();

        for i in 0..16 {
            state.begin_trial(Direction::Left);
            state.cue_played();
            let response = if i == 0 { Direction::Left } else { Direction::Right };
            state.record_response(response, Local::now());
        }

        assert_eq!(state.correct_attempts(), 1);
        assert_eq!(format_accuracy(state.accuracy()), "6.3");
        assert_invariants(&state);
    }
}
