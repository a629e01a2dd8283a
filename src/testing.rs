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

//! Test doubles for the audio device and the timer source.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use crate::{
    audio::{AudioError, AudioOutput, CueRequest, RenderedCue},
    timer::{Scheduler, TimerHandle, TimerId},
};

#[derive(Debug, Default)]
pub(crate) struct OutputLog {
    /// Resume attempts made while the device was suspended.
    pub(crate) resumes: usize,
    pub(crate) started: Vec<RenderedCue>,
    /// Cues that arrived while the device could not be resumed.
    pub(crate) dropped: usize,
}

/// An output device that remembers what it was asked to do.
///
/// Mirrors the rodio worker: a cue started while suspended resumes the
/// device first, and is dropped if that fails.
pub(crate) struct RecordingOutput {
    suspended: bool,
    fail_resume: bool,
    closed: bool,
    log: Rc<RefCell<OutputLog>>,
}

impl RecordingOutput {
    pub(crate) fn new() -> Self {
        Self {
            suspended: true,
            fail_resume: false,
            closed: false,
            log: Rc::default(),
        }
    }

    pub(crate) fn failing_resume(mut self) -> Self {
        self.fail_resume = true;
        self
    }

    /// A device that refuses every request, like a stopped worker.
    pub(crate) fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    pub(crate) fn log(&self) -> Rc<RefCell<OutputLog>> {
        Rc::clone(&self.log)
    }

    fn check_open(&self) -> Result<(), AudioError> {
        if self.closed {
            return Err(AudioError::Device("output closed".to_string()));
        }
        Ok(())
    }

    fn resume_device(&mut self) {
        if !self.suspended {
            return;
        }
        self.log.borrow_mut().resumes += 1;
        if !self.fail_resume {
            self.suspended = false;
        }
    }
}

impl AudioOutput for RecordingOutput {
    fn resume(&mut self) -> Result<(), AudioError> {
        self.check_open()?;
        self.resume_device();
        Ok(())
    }

    fn start(&mut self, cue: CueRequest) -> Result<(), AudioError> {
        self.check_open()?;
        self.resume_device();

        let mut log = self.log.borrow_mut();
        if self.suspended {
            log.dropped += 1;
        } else {
            log.started.push(cue.render());
        }
        Ok(())
    }
}

#[derive(Debug)]
pub(crate) struct ScheduledTimer {
    pub(crate) handle: TimerHandle,
    pub(crate) delay: Duration,
}

/// A scheduler whose timers only fire when a test says so.
#[derive(Clone, Default)]
pub(crate) struct ManualScheduler {
    next_id: Rc<Cell<u64>>,
    timers: Rc<RefCell<Vec<ScheduledTimer>>>,
}

impl ManualScheduler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Timers that were scheduled and not cancelled, oldest first.
    pub(crate) fn live(&self) -> Vec<(TimerId, Duration)> {
        self.timers
            .borrow()
            .iter()
            .filter(|t| !t.handle.is_cancelled())
            .map(|t| (t.handle.id(), t.delay))
            .collect()
    }

    /// Removes and returns the oldest live timer.
    pub(crate) fn pop_live(&self) -> Option<(TimerId, Duration)> {
        let mut timers = self.timers.borrow_mut();
        let idx = timers.iter().position(|t| !t.handle.is_cancelled())?;
        let timer = timers.remove(idx);
        Some((timer.handle.id(), timer.delay))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.next_id.set(self.next_id.get() + 1);
        let handle = TimerHandle::new(TimerId(self.next_id.get()));
        self.timers.borrow_mut().push(ScheduledTimer {
            handle: handle.clone(),
            delay,
        });
        handle
    }
}
