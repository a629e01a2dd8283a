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

//! One-shot delayed callbacks for the trial loop.
//!
//! A timer never runs code itself. When it elapses it delivers an
//! [`AppEvent::TimerFired`] carrying its [`TimerId`] to the main event loop,
//! which owns all session state. Whoever scheduled the timer keeps the
//! returned [`TimerHandle`] and treats a fired id as meaningful only while it
//! still holds the matching handle, so a stale timer can never act on a newer
//! trial.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
    },
    thread,
    time::Duration,
};

use tracing::trace;

use crate::events::AppEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TimerId(pub(crate) u64);

/// Ownership token for a scheduled timer.
#[derive(Clone, Debug)]
pub(crate) struct TimerHandle {
    id: TimerId,
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    pub(crate) fn new(id: TimerId) -> Self {
        Self {
            id,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(crate) fn id(&self) -> TimerId {
        self.id
    }

    /// Stops the timer from delivering its event, if it has not already.
    pub(crate) fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

pub(crate) trait Scheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle;
}

/// Runs each timer on its own sleeping thread.
pub(crate) struct ThreadScheduler {
    next_id: u64,
    event_tx: Sender<AppEvent>,
}

impl ThreadScheduler {
    pub(crate) fn new(event_tx: Sender<AppEvent>) -> Self {
        Self {
            next_id: 0,
            event_tx,
        }
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::new(TimerId(self.next_id));

        let thread_handle = handle.clone();
        let event_tx = self.event_tx.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            if thread_handle.is_cancelled() {
                trace!(id = thread_handle.id().0, "Timer cancelled before firing");
                return;
            }
            // The receiver is gone only during shutdown
            let _ = event_tx.send(AppEvent::TimerFired(thread_handle.id()));
        });

        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::mpsc;

    #[test]
    fn cancel_is_shared_between_clones() {
        let handle = TimerHandle::new(TimerId(7));
        let clone = handle.clone();

        assert!(!clone.is_cancelled());
        handle.cancel();
        assert!(clone.is_cancelled());
        assert_eq!(clone.id(), TimerId(7));
    }

    #[test]
    fn thread_timer_delivers_its_id() {
        let (tx, rx) = mpsc::channel();
        let mut scheduler = ThreadScheduler::new(tx);

        let first = scheduler.schedule(Duration::from_millis(1));
        let second = scheduler.schedule(Duration::from_millis(1));
        assert_ne!(first.id(), second.id());

        let mut fired = Vec::new();
        for _ in 0..2 {
            match rx.recv_timeout(Duration::from_secs(5)) {
                Ok(AppEvent::TimerFired(id)) => fired.push(id),
                other => panic!("unexpected event: {:?}", other),
            }
        }
        fired.sort_by_key(|id| id.0);
        assert_eq!(fired, vec![first.id(), second.id()]);
    }

    #[test]
    fn cancelled_thread_timer_stays_silent() {
        let (tx, rx) = mpsc::channel();
        let mut scheduler = ThreadScheduler::new(tx);

        let handle = scheduler.schedule(Duration::from_millis(50));
        handle.cancel();

        assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
    }
}
