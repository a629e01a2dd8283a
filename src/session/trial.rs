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

//! Trial setup: cue direction and the randomised pre-cue delay.
//!
//! The delay is drawn fresh for every trial so the user cannot anticipate
//! when the cue will arrive and has to listen for it.

use std::{ops::Range, time::Duration};

use rand::Rng;
use tracing::debug;

use crate::{
    model::Direction,
    session::state::SessionState,
    timer::{Scheduler, TimerHandle, TimerId},
};

struct PendingCue {
    handle: TimerHandle,
    direction: Direction,
}

pub(crate) struct TrialScheduler<R: Rng> {
    rng: R,
    cue_delay: Range<Duration>,
    pending: Option<PendingCue>,
}

impl<R: Rng> TrialScheduler<R> {
    /// `cue_delay` must not be empty.
    pub(crate) fn new(rng: R, cue_delay: Range<Duration>) -> Self {
        Self {
            rng,
            cue_delay,
            pending: None,
        }
    }

    /// Picks a direction, marks the cue pending in `state` and schedules the
    /// cue. A cue still pending from an earlier trial is cancelled.
    pub(crate) fn start_trial<S: Scheduler>(
        &mut self,
        state: &mut SessionState,
        scheduler: &mut S,
    ) -> Direction {
        self.cancel();

        let direction = if self.rng.random_bool(0.5) {
            Direction::Left
        } else {
            Direction::Right
        };
        let delay = self.next_delay();

        state.begin_trial(direction);
        let handle = scheduler.schedule(delay);
        debug!(
            %direction,
            delay_ms = delay.as_millis() as u64,
            timer = handle.id().0,
            "Trial started"
        );
        self.pending = Some(PendingCue { handle, direction });

        direction
    }

    /// Claims the pending cue if `id` is its timer.
    pub(crate) fn take_due(&mut self, id: TimerId) -> Option<Direction> {
        match &self.pending {
            Some(pending) if pending.handle.id() == id => {
                self.pending.take().map(|pending| pending.direction)
            }
            _ => None,
        }
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.cancel();
        }
    }

    fn next_delay(&mut self) -> Duration {
        let min = self.cue_delay.start.as_millis() as u64;
        let max = self.cue_delay.end.as_millis() as u64;
        Duration::from_millis(self.rng.random_range(min..max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::StdRng};

    use crate::{model::SessionPhase, testing::ManualScheduler};

    fn trials(seed: u64) -> TrialScheduler<StdRng> {
        TrialScheduler::new(
            StdRng::seed_from_u64(seed),
            Duration::from_millis(800)..Duration::from_millis(1200),
        )
    }

    #[test]
    fn delay_stays_in_range() {
        let mut trials = trials(1);
        let mut scheduler = ManualScheduler::new();
        let mut state = SessionState::new();
        state.start();

        for _ in 0..200 {
            trials.start_trial(&mut state, &mut scheduler);
            let (_, delay) = scheduler.pop_live().unwrap();
            assert!(delay >= Duration::from_millis(800));
            assert!(delay < Duration::from_millis(1200));
        }
    }

    #[test]
    fn both_directions_occur() {
        let mut trials = trials(2);
        let mut scheduler = ManualScheduler::new();
        let mut state = SessionState::new();
        state.start();

        let picks: Vec<Direction> = (0..100)
            .map(|_| trials.start_trial(&mut state, &mut scheduler))
            .collect();
        assert!(picks.contains(&Direction::Left));
        assert!(picks.contains(&Direction::Right));
    }

    #[test]
    fn start_trial_marks_cue_pending() {
        let mut trials = trials(3);
        let mut scheduler = ManualScheduler::new();
        let mut state = SessionState::new();
        state.start();

        let direction = trials.start_trial(&mut state, &mut scheduler);
        assert_eq!(state.current_direction(), Some(direction));
        assert_eq!(state.phase(), SessionPhase::TrialPending);
    }

    #[test]
    fn new_trial_supersedes_pending_cue() {
        let mut trials = trials(4);
        let mut scheduler = ManualScheduler::new();
        let mut state = SessionState::new();
        state.start();

        trials.start_trial(&mut state, &mut scheduler);
        let (stale, _) = scheduler.live()[0];
        let direction = trials.start_trial(&mut state, &mut scheduler);

        let live = scheduler.live();
        assert_eq!(live.len(), 1);
        assert_ne!(live[0].0, stale);
        assert_eq!(trials.take_due(stale), None);
        assert_eq!(trials.take_due(live[0].0), Some(direction));
        assert_eq!(trials.take_due(live[0].0), None);
    }

    #[test]
    fn cancel_drops_pending_cue() {
        let mut trials = trials(5);
        let mut scheduler = ManualScheduler::new();
        let mut state = SessionState::new();
        state.start();

        trials.start_trial(&mut state, &mut scheduler);
        let (id, _) = scheduler.live()[0];
        trials.cancel();

        assert!(scheduler.live().is_empty());
        assert_eq!(trials.take_due(id), None);
    }
}
