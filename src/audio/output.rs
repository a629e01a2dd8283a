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

//! Rodio-backed output device.
//!
//! [`RodioOutput`] is only a handle. The output stream lives on a dedicated
//! worker thread which receives [`OutputCommand`]s, so opening the device,
//! rendering a cue and feeding the mixer never block the event loop. Device
//! failures are logged by the worker.

use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use rodio::{OutputStream, OutputStreamBuilder, buffer::SamplesBuffer};
use tracing::{debug, info, warn};

use crate::audio::{AudioError, AudioOutput, CueRequest};

#[derive(Debug)]
pub(crate) enum OutputCommand {
    Resume,
    Play(CueRequest),
}

/// The system default audio output.
///
/// The device counts as suspended until the worker has opened the default
/// output stream. Each cue is added to the stream's mixer as its own source
/// and plays to completion on the audio thread.
pub(crate) struct RodioOutput {
    command_tx: Sender<OutputCommand>,
}

impl RodioOutput {
    /// Spawns the output worker and returns a handle to it.
    pub(crate) fn new() -> Self {
        let (command_tx, command_rx) = mpsc::channel();

        spawn_output_worker(command_rx);

        Self { command_tx }
    }

    fn send(&self, command: OutputCommand) -> Result<(), AudioError> {
        self.command_tx
            .send(command)
            .map_err(|_| AudioError::Device("output worker has stopped".to_string()))
    }
}

impl AudioOutput for RodioOutput {
    fn resume(&mut self) -> Result<(), AudioError> {
        self.send(OutputCommand::Resume)
    }

    fn start(&mut self, cue: CueRequest) -> Result<(), AudioError> {
        self.send(OutputCommand::Play(cue))
    }
}

/// Spawns the thread that owns the output stream.
///
/// The worker runs until every handle has been dropped.
fn spawn_output_worker(command_rx: Receiver<OutputCommand>) {
    thread::spawn(move || {
        let mut device = OutputDevice::default();

        for command in command_rx {
            device.handle_command(command);
        }

        debug!("Audio output worker stopped");
    });
}

#[derive(Default)]
struct OutputDevice {
    stream: Option<OutputStream>,
}

impl OutputDevice {
    fn handle_command(&mut self, command: OutputCommand) {
        match command {
            OutputCommand::Resume => {
                if let Err(e) = self.resume() {
                    warn!(error = %e, "Failed to resume audio output");
                }
            }
            OutputCommand::Play(cue) => {
                if let Err(e) = self.play(&cue) {
                    warn!(error = %e, "Cue playback failed");
                }
            }
        }
    }

    /// Opens the default output stream unless it is already open.
    fn resume(&mut self) -> Result<&OutputStream, AudioError> {
        if self.stream.is_none() {
            let mut stream = OutputStreamBuilder::open_default_stream()
                .map_err(|e| AudioError::Device(e.to_string()))?;
            // Dropping the stream at shutdown is expected, no need to warn on stderr
            stream.log_on_drop(false);
            info!("Audio output resumed");
            self.stream = Some(stream);
        }

        self.stream
            .as_ref()
            .ok_or_else(|| AudioError::Device("output stream missing".to_string()))
    }

    fn play(&mut self, cue: &CueRequest) -> Result<(), AudioError> {
        let stream = self
            .resume()
            .map_err(|e| AudioError::Playback(e.to_string()))?;

        let rendered = cue.render();
        let source = SamplesBuffer::new(rendered.channels, rendered.sample_rate, rendered.samples);
        stream.mixer().add(source);

        Ok(())
    }
}
