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

//! Application event distribution.
//!
//! This module bridges user input, elapsed timers and background task results
//! with the session controller and the rendering pipeline.
//!
//! # Architecture
//!
//! 1. **Capture**: Input, tick, timer and task threads send [`AppEvent`]s
//!    over a channel.
//! 2. **Process**: [`process_events`] applies each event to the [`App`] on
//!    the main thread, which is the only place session state changes.
//! 3. **Render**: After each event the UI is re-drawn from a fresh session
//!    snapshot.

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, audio::AudioAsset, model::Direction, render::draw, timer::TimerId};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    CueAssetLoaded(AudioAsset),

    TimerFired(TimerId),

    Tick,

    ExitApplication,
}

/// What a key press asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KeyAction {
    ToggleSession,
    Respond(Direction),
    ToggleSound,
    Quit,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a quit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::CueAssetLoaded(asset) => handle_cue_asset_loaded(app, asset),
            AppEvent::TimerFired(id) => handle_timer_fired(app, id),
            AppEvent::Tick => handle_tick(app),
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps a key press to the action it triggers, if any.
///
/// * `Enter` / `Space`: start or stop the session.
/// * `Left` / `h` / `a`: answer left.
/// * `Right` / `l` / `d`: answer right.
/// * `m`: toggle sound.
/// * `q` / `Esc` / `Ctrl+C`: quit.
pub(crate) fn key_action(key: KeyEvent) -> Option<KeyAction> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Some(KeyAction::Quit),

        (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => Some(KeyAction::ToggleSession),

        (KeyCode::Left, _) | (KeyCode::Char('h'), _) | (KeyCode::Char('a'), _) => {
            Some(KeyAction::Respond(Direction::Left))
        }
        (KeyCode::Right, _) | (KeyCode::Char('l'), _) | (KeyCode::Char('d'), _) => {
            Some(KeyAction::Respond(Direction::Right))
        }

        (KeyCode::Char('m'), _) => Some(KeyAction::ToggleSound),

        _ => None,
    }
}

fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key_action(key) {
        Some(KeyAction::Quit) => app.event_tx.send(AppEvent::ExitApplication)?,
        Some(KeyAction::ToggleSession) => handle_toggle_session(app),
        Some(KeyAction::Respond(direction)) => handle_response(app, direction),
        Some(KeyAction::ToggleSound) => handle_toggle_sound(app),
        None => {}
    }

    Ok(())
}
