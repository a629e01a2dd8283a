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

//! Directional audio cue playback.
//!
//! This module provides the [`AudioCuePlayer`] used by the session controller
//! to play the footstep cue towards one ear. The player owns the decoded
//! [`AudioAsset`] and an [`AudioOutput`] device. Each cue runs through a
//! fixed signal chain:
//!
//! 1. **Gain**: the configured fraction of full scale.
//! 2. **Position**: a hard stereo pan towards the cue direction, stopping
//!    short of fully one-sided (see [`panner`]).
//! 3. **Destination**: the output device, as an independent playback
//!    instance.
//!
//! The player only builds a [`CueRequest`] and hands it over. Rendering and
//! all device work happen behind the [`AudioOutput`], off the caller's
//! thread. Playback never reports failure to the caller. A missing asset,
//! disabled sound, or a device error all degrade to silence and a log record.

mod output;
mod panner;

pub(crate) use output::RodioOutput;
pub(crate) use panner::StereoPanner;

use std::{fs, io::Cursor, path::Path, sync::Arc};

use rodio::{Decoder, Source};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::Direction;

#[derive(Debug, Error)]
pub(crate) enum AudioError {
    #[error("failed to read cue asset {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode cue asset: {0}")]
    Decode(String),
    #[error("cue asset contains no audio")]
    EmptyAsset,
    #[error("audio output device unavailable: {0}")]
    Device(String),
    #[error("failed to start cue playback: {0}")]
    Playback(String),
}

/// A decoded sound held in memory as interleaved `f32` samples.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AudioAsset {
    channels: u16,
    sample_rate: u32,
    samples: Vec<f32>,
}

impl AudioAsset {
    pub(crate) fn new(
        channels: u16,
        sample_rate: u32,
        samples: Vec<f32>,
    ) -> Result<Self, AudioError> {
        if channels == 0 || samples.len() < usize::from(channels) {
            return Err(AudioError::EmptyAsset);
        }

        Ok(Self {
            channels,
            sample_rate,
            samples,
        })
    }

    /// Decodes an encoded sound file (MP3, WAV, FLAC, Vorbis) already in
    /// memory.
    pub(crate) fn decode(bytes: Vec<u8>) -> Result<Self, AudioError> {
        let decoder =
            Decoder::new(Cursor::new(bytes)).map_err(|e| AudioError::Decode(e.to_string()))?;

        let channels = decoder.channels();
        let sample_rate = decoder.sample_rate();
        let samples: Vec<f32> = decoder.collect();

        Self::new(channels, sample_rate, samples)
    }

    /// Reads and decodes the sound file at `path`.
    pub(crate) fn from_file(path: &Path) -> Result<Self, AudioError> {
        let bytes = fs::read(path).map_err(|source| AudioError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::decode(bytes)
    }

    pub(crate) fn channels(&self) -> u16 {
        self.channels
    }

    pub(crate) fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub(crate) fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub(crate) fn frames(&self) -> usize {
        self.samples.len() / usize::from(self.channels)
    }
}

/// A cue after the gain and position stages, ready for the output device.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RenderedCue {
    pub(crate) channels: u16,
    pub(crate) sample_rate: u32,
    pub(crate) samples: Vec<f32>,
}

/// One cue to play: the shared asset and the signal chain to run it through.
#[derive(Clone, Debug)]
pub(crate) struct CueRequest {
    pub(crate) asset: Arc<AudioAsset>,
    pub(crate) panner: StereoPanner,
    pub(crate) gain: f32,
}

impl CueRequest {
    pub(crate) fn render(&self) -> RenderedCue {
        self.panner.render(&self.asset, self.gain)
    }
}

/// The platform's real-time audio output.
///
/// A device starts out suspended. Both calls only queue work and return
/// straight away; an `Err` means the device can no longer accept requests at
/// all. Device failures surface in the log, not here.
///
/// Every [`AudioOutput::start`] call is an independent playback instance and
/// overlapping cues mix. A cue started while the device is suspended resumes
/// it first.
pub(crate) trait AudioOutput {
    fn resume(&mut self) -> Result<(), AudioError>;

    fn start(&mut self, cue: CueRequest) -> Result<(), AudioError>;
}

/// Fixed parameters of the cue signal chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CueSettings {
    /// Gain stage level as a fraction of full scale.
    pub(crate) gain: f32,
    /// Magnitude of the stereo position, applied negative for left cues.
    pub(crate) pan: f32,
}

impl Default for CueSettings {
    fn default() -> Self {
        Self { gain: 0.8, pan: 0.9 }
    }
}

impl CueSettings {
    pub(crate) fn panner_for(&self, direction: Direction) -> StereoPanner {
        match direction {
            Direction::Left => StereoPanner::new(-self.pan),
            Direction::Right => StereoPanner::new(self.pan),
        }
    }
}

pub(crate) struct AudioCuePlayer<O: AudioOutput> {
    output: O,
    asset: Option<Arc<AudioAsset>>,
    settings: CueSettings,
}

impl<O: AudioOutput> AudioCuePlayer<O> {
    /// Creates a player with no asset; cues are silent until
    /// [`AudioCuePlayer::set_asset`] is called.
    pub(crate) fn new(output: O, settings: CueSettings) -> Self {
        Self {
            output,
            asset: None,
            settings,
        }
    }

    /// Installs the decoded cue sound.
    pub(crate) fn set_asset(&mut self, asset: AudioAsset) {
        info!(
            channels = asset.channels(),
            sample_rate = asset.sample_rate(),
            frames = asset.frames(),
            "Cue asset ready"
        );
        self.asset = Some(Arc::new(asset));
    }

    pub(crate) fn has_asset(&self) -> bool {
        self.asset.is_some()
    }

    /// Asks the output device to resume if it is suspended.
    ///
    /// Does not wait for the device. Failure is logged and otherwise ignored;
    /// later cues try again.
    pub(crate) fn ensure_resumed(&mut self) {
        if let Err(e) = self.output.resume() {
            warn!(error = %e, "Failed to resume audio output");
        }
    }

    /// Plays the cue towards `direction`.
    ///
    /// Returns immediately without sound when `enabled` is false or no asset
    /// is loaded. Playback is not awaited. Returns whether a cue was handed to
    /// the output device.
    pub(crate) fn play(&mut self, direction: Direction, enabled: bool) -> bool {
        if !enabled {
            debug!(%direction, "Sound disabled, cue skipped");
            return false;
        }
        let Some(asset) = &self.asset else {
            debug!(%direction, "No cue asset loaded, cue skipped");
            return false;
        };

        let panner = self.settings.panner_for(direction);
        let cue = CueRequest {
            asset: Arc::clone(asset),
            panner,
            gain: self.settings.gain,
        };

        match self.output.start(cue) {
            Ok(()) => {
                info!(%direction, pan = panner.pan(), "Cue played");
                true
            }
            Err(e) => {
                warn!(%direction, error = %e, "Cue playback failed");
                false
            }
        }
    }
}
