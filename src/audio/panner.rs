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

//! Gain and stereo position stages of the cue signal chain.
//!
//! Positioning uses the equal-power law of a browser stereo panner: a mono
//! source is split between the channels with `cos`/`sin` gains, a stereo
//! source keeps the near channel intact and folds part of the far channel
//! into it.

use std::f32::consts::FRAC_PI_2;

use crate::audio::{AudioAsset, RenderedCue};

/// Stereo position in `-1.0..=1.0`, negative values towards the left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct StereoPanner {
    pan: f32,
}

impl StereoPanner {
    pub(crate) fn new(pan: f32) -> Self {
        Self {
            pan: pan.clamp(-1.0, 1.0),
        }
    }

    pub(crate) fn pan(&self) -> f32 {
        self.pan
    }

    /// Runs `asset` through the gain stage then this position stage.
    ///
    /// The result is always interleaved stereo at the asset's sample rate.
    /// Sources with more than two channels contribute their first two.
    pub(crate) fn render(&self, asset: &AudioAsset, gain: f32) -> RenderedCue {
        let channels = usize::from(asset.channels().max(1));
        let (cos, sin) = self.gains(channels > 1);
        let mut samples = Vec::with_capacity(asset.frames() * 2);

        for frame in asset.samples().chunks_exact(channels) {
            let (left, right) = if channels == 1 {
                let input = frame[0] * gain;
                (input * cos, input * sin)
            } else {
                let (left, right) = (frame[0] * gain, frame[1] * gain);
                if self.pan <= 0.0 {
                    (left + right * cos, right * sin)
                } else {
                    (left * cos, right + left * sin)
                }
            };
            samples.push(left);
            samples.push(right);
        }

        RenderedCue {
            channels: 2,
            sample_rate: asset.sample_rate(),
            samples,
        }
    }

    /// The `cos`/`sin` channel gains of the position stage.
    ///
    /// A mono source maps the whole pan range onto the quarter turn. A stereo
    /// source only attenuates the far channel, so each half of the range gets
    /// the full quarter turn.
    fn gains(&self, stereo: bool) -> (f32, f32) {
        let x = match (stereo, self.pan <= 0.0) {
            (false, _) => (self.pan + 1.0) / 2.0,
            (true, true) => self.pan + 1.0,
            (true, false) => self.pan,
        };
        let angle = x * FRAC_PI_2;
        (angle.cos(), angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(samples: Vec<f32>) -> AudioAsset {
        AudioAsset::new(1, 44_100, samples).unwrap()
    }

    #[test]
    fn centred_mono_is_split_evenly() {
        let cue = StereoPanner::new(0.0).render(&mono(vec![1.0]), 1.0);
        assert_eq!(cue.channels, 2);
        assert!((cue.samples[0] - cue.samples[1]).abs() < 1e-6);
        assert!((cue.samples[0] - 0.5f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn left_pan_leaves_a_trace_on_the_right() {
        let cue = StereoPanner::new(-0.9).render(&mono(vec![1.0, 1.0]), 0.8);
        let (left, right) = (cue.samples[0], cue.samples[1]);

        assert!(left > right);
        assert!(right > 0.0);
        assert!(left < 0.8);
        assert!((left - 0.8 * (0.05 * FRAC_PI_2).cos()).abs() < 1e-6);
        assert!((right - 0.8 * (0.05 * FRAC_PI_2).sin()).abs() < 1e-6);
        assert_eq!(cue.samples.len(), 4);
    }

    #[test]
    fn right_pan_mirrors_left_pan() {
        let left = StereoPanner::new(-0.9).render(&mono(vec![0.5]), 0.8);
        let right = StereoPanner::new(0.9).render(&mono(vec![0.5]), 0.8);

        assert!((left.samples[0] - right.samples[1]).abs() < 1e-6);
        assert!((left.samples[1] - right.samples[0]).abs() < 1e-6);
    }

    #[test]
    fn stereo_source_keeps_near_channel() {
        let asset = AudioAsset::new(2, 48_000, vec![0.2, 0.4]).unwrap();

        let cue = StereoPanner::new(0.9).render(&asset, 1.0);
        let far = 0.2 * (0.9 * FRAC_PI_2).cos();
        let near = 0.4 + 0.2 * (0.9 * FRAC_PI_2).sin();
        assert!((cue.samples[0] - far).abs() < 1e-6);
        assert!((cue.samples[1] - near).abs() < 1e-6);
        assert_eq!(cue.sample_rate, 48_000);
    }

    #[test]
    fn extra_channels_are_dropped() {
        let samples = vec![0.1, 0.2, 0.9, 0.9, 0.1, 0.2, 0.9, 0.9];
        let asset = AudioAsset::new(4, 44_100, samples).unwrap();

        let cue = StereoPanner::new(0.0).render(&asset, 1.0);
        assert_eq!(cue.samples.len(), 4);
    }

    #[test]
    fn every_frame_gets_the_same_gains() {
        let cue = StereoPanner::new(-0.9).render(&mono(vec![0.5; 256]), 0.8);

        for frame in cue.samples.chunks_exact(2) {
            assert_eq!(frame, &cue.samples[..2]);
        }
    }

    #[test]
    fn pan_is_clamped() {
        assert_eq!(StereoPanner::new(-3.0).pan(), -1.0);
        assert_eq!(StereoPanner::new(2.0).pan(), 1.0);
    }
}
