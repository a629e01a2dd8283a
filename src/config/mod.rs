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

//! Application configuration.
//!
//! This module manages the application configuration file. Values that would
//! break the trial loop (an empty delay range, a gain or pan outside the unit
//! interval) are rejected by [`AppConfig::validate`].

use std::{ops::Range, path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const CONFIG_NAME: &str = "sonar";

const LOG_FILE_NAME: &str = "sonar.log";

#[derive(Debug, Error, PartialEq)]
pub(crate) enum ConfigError {
    #[error("cue gain {0} is outside 0.0..=1.0")]
    Gain(f32),
    #[error("cue pan {0} is outside 0.0..=1.0")]
    Pan(f32),
    #[error("cue delay range {0}..{1} ms is empty")]
    DelayRange(u64, u64),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) cue_asset: PathBuf,
    pub(crate) cue_gain: f32,
    pub(crate) cue_pan: f32,
    pub(crate) cue_delay_min_ms: u64,
    pub(crate) cue_delay_max_ms: u64,
    pub(crate) feedback_delay_ms: u64,
    pub(crate) sound_enabled: bool,
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            cue_asset: PathBuf::from("sounds/footsteps.mp3"),
            cue_gain: 0.8,
            cue_pan: 0.9,
            cue_delay_min_ms: 800,
            cue_delay_max_ms: 1200,
            feedback_delay_ms: 2000,
            sound_enabled: true,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.cue_gain) {
            return Err(ConfigError::Gain(self.cue_gain));
        }
        if !(0.0..=1.0).contains(&self.cue_pan) {
            return Err(ConfigError::Pan(self.cue_pan));
        }
        if self.cue_delay_min_ms >= self.cue_delay_max_ms {
            return Err(ConfigError::DelayRange(
                self.cue_delay_min_ms,
                self.cue_delay_max_ms,
            ));
        }
        Ok(())
    }

    /// Half-open range the pre-cue delay is drawn from.
    pub(crate) fn cue_delay(&self) -> Range<Duration> {
        Duration::from_millis(self.cue_delay_min_ms)..Duration::from_millis(self.cue_delay_max_ms)
    }

    pub(crate) fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    /// Where log output goes: the configured file, otherwise next to the
    /// configuration file, otherwise the system temp directory.
    pub(crate) fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }

        confy::get_configuration_file_path(CONFIG_NAME, None)
            .ok()
            .and_then(|path| path.parent().map(|dir| dir.join(LOG_FILE_NAME)))
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
    }
}

/// Loads the configuration, falling back to defaults when the file cannot be
/// read.
///
/// The second element carries the validation error when the stored values
/// were rejected and replaced by defaults, so the caller can log it once
/// logging is up.
pub(crate) fn load_config() -> (AppConfig, Option<ConfigError>) {
    let config: AppConfig = confy::load(CONFIG_NAME, None).unwrap_or_default();
    match config.validate() {
        Ok(()) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}
