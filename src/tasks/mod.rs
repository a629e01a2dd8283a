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

//! Background task processing.
//!
//! Work that may block, such as reading and decoding the cue asset, runs on a
//! dedicated worker thread so the UI keeps responding. Results come back to
//! the main loop as [`AppEvent`]s.

use std::{
    path::PathBuf,
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use tracing::{debug, error, info};

use crate::{audio::AudioAsset, events::AppEvent};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadCueAsset(PathBuf),
}

/// Spawns a background thread to process application tasks.
///
/// The worker stops when either channel closes.
///
/// # Arguments
///
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(task_rx: Receiver<AppTask>, event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            if let Err(e) = handle_task(task, &event_tx) {
                debug!(error = %e, "Event loop gone, task worker stopping");
                break;
            }
        }
    });
}

fn handle_task(task: AppTask, event_tx: &Sender<AppEvent>) -> Result<()> {
    match task {
        AppTask::LoadCueAsset(path) => load_cue_asset(path, event_tx),
    }
}

/// Reads and decodes the cue sound.
///
/// A failure is only logged. The player then has no asset and every cue is
/// silent, which is all the user notices.
fn load_cue_asset(path: PathBuf, event_tx: &Sender<AppEvent>) -> Result<()> {
    match AudioAsset::from_file(&path) {
        Ok(asset) => {
            info!(path = %path.display(), "Cue asset decoded");
            event_tx.send(AppEvent::CueAssetLoaded(asset))?;
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to load cue asset");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{sync::mpsc, time::Duration};

    #[test]
    fn missing_asset_sends_nothing() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(task_rx, event_tx);

        task_tx
            .send(AppTask::LoadCueAsset(PathBuf::from("/nonexistent/sonar/footsteps.mp3")))
            .unwrap();
        drop(task_tx);

        // The worker exits once the task channel closes, dropping its sender
        assert!(matches!(
            event_rx.recv_timeout(Duration::from_secs(5)),
            Err(mpsc::RecvTimeoutError::Disconnected)
        ));
    }
}
