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

//! Core data types shared between the session logic and the renderer.

use std::fmt;

use chrono::{DateTime, Local};

/// The side a cue is panned towards, and the answer a user gives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result shown to the user after a scored response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Feedback {
    Correct,
    Wrong,
}

impl Feedback {
    pub(crate) fn from_correct(correct: bool) -> Self {
        if correct {
            Feedback::Correct
        } else {
            Feedback::Wrong
        }
    }
}

/// One completed trial.
///
/// Records are appended to the session history once and never modified.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TrialRecord {
    pub(crate) direction: Direction,
    pub(crate) response: Direction,
    pub(crate) correct: bool,
    pub(crate) timestamp: DateTime<Local>,
}

impl TrialRecord {
    pub(crate) fn new(
        direction: Direction,
        response: Direction,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            direction,
            response,
            correct: direction == response,
            timestamp,
        }
    }
}

/// Where the session currently is in the trial loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SessionPhase {
    /// No session running; tallies from the last session stay readable.
    Idle,
    /// A direction has been picked but the cue has not played yet.
    TrialPending,
    /// The cue has played and an answer is expected.
    AwaitingResponse,
    /// The answer has been scored; the next trial is scheduled.
    Feedback,
}

/// Read-only view of the session handed to the renderer after every event.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SessionSnapshot {
    pub(crate) phase: SessionPhase,
    pub(crate) active: bool,
    pub(crate) current_direction: Option<Direction>,
    /// Set while the cue for the current trial has not played; answers are
    /// rejected in this window.
    pub(crate) cue_pending: bool,
    pub(crate) feedback: Option<Feedback>,
    pub(crate) total_attempts: u32,
    pub(crate) correct_attempts: u32,
    pub(crate) accuracy: f64,
    pub(crate) sound_enabled: bool,
    pub(crate) asset_loaded: bool,
}

/// Percentage of correct answers rounded to one decimal place, half up.
///
/// `0.0` when nothing has been attempted. The rounding is done on whole
/// tenths of a percent so ties such as 1 in 16 (6.25) land on 6.3.
pub(crate) fn accuracy(correct_attempts: u32, total_attempts: u32) -> f64 {
    if total_attempts == 0 {
        return 0.0;
    }
    let correct = u64::from(correct_attempts);
    let total = u64::from(total_attempts);
    let tenths = (correct * 2000 + total) / (2 * total);
    tenths as f64 / 10.0
}
