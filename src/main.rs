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

//! # Sonar
//!
//! A terminal-based directional hearing trainer.
//!
//! A footstep sound plays in the left or right ear after a short random
//! delay, the user answers which side it came from, and the session keeps a
//! running accuracy score.
//!
//! ## Architecture
//!
//! The application uses an event-driven design where:
//!
//! * The **Main Thread** owns all session state, manages the terminal
//!   lifecycle and renders the UI.
//! * **Timer Threads** sleep for a trial delay and then post an event; they
//!   never touch state themselves.
//! * A **Task Worker** reads and decodes the cue sound off the UI thread.
//! * **Input** and **Tick** threads feed key presses and animation frames
//!   into the same `std::sync::mpsc` channel.
//!
//! The terminal is set up before the event loop and restored afterwards even
//! when the loop fails.

mod audio;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod session;
mod tasks;
mod theme;
mod timer;
mod util;

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{info, warn};

use crate::{
    audio::{AudioCuePlayer, CueSettings, RodioOutput},
    config::AppConfig,
    events::{AppEvent, process_events},
    session::{SessionController, TrialScheduler},
    tasks::AppTask,
    theme::Theme,
    timer::ThreadScheduler,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

type Session = SessionController<RodioOutput, ThreadScheduler, ThreadRng>;

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub session: Session,

    /// Animation frame counter, advanced on every tick.
    pub frame: usize,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let player = AudioCuePlayer::new(
            RodioOutput::new(),
            CueSettings {
                gain: config.cue_gain,
                pan: config.cue_pan,
            },
        );
        let trials = TrialScheduler::new(rand::rng(), config.cue_delay());
        let session = SessionController::new(
            player,
            ThreadScheduler::new(event_tx.clone()),
            trials,
            config.feedback_delay(),
            config.sound_enabled,
        );

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            session,
            frame: 0,
        }
    }
}

/// The entry point of the application.
///
/// Loads configuration, starts logging, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let (config, config_error) = config::load_config();

    logging::init_logging(&config.log_path()).context("Failed to initialise logging")?;
    if let Some(e) = config_error {
        warn!(error = %e, "Invalid configuration, using defaults");
    }
    info!(?config, "Starting");

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    info!("Exiting");
    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background colour based on the theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// Best-effort: called during cleanup, so failures are ignored.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the background workers and enters the main event loop.
///
/// This function spawns:
/// * A task worker that loads the cue sound.
/// * An input thread to poll for keyboard events.
/// * A tick thread driving the radar animation.
///
/// # Errors
///
/// Returns an error if the event loop fails.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(task_rx, app.event_tx.clone());

    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                // Only presses; some platforms also report releases
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "Failed to read terminal input");
                    break;
                }
            }
        }
    });

    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // The cue sound is loaded exactly once, at startup
    app.task_tx
        .send(AppTask::LoadCueAsset(app.config.cue_asset.clone()))
        .context("Failed to queue cue asset load")?;

    process_events(terminal, app)
}
