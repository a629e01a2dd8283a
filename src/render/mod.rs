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

//! User interface rendering logic.
//!
//! This module turns a [`SessionSnapshot`] and the trial history into
//! `ratatui` widgets. Rendering reads state only; nothing here feeds back
//! into the session.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event, including the periodic tick that animates the radar
//! sweep.

mod history;
mod icons;
mod radar;
mod scoreboard;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    model::SessionSnapshot,
    render::{
        history::draw_history, icons::*, radar::draw_radar, scoreboard::draw_scoreboard,
    },
    theme::Theme,
};

/// Renders the user interface to the terminal frame.
///
/// Layout, top to bottom: title, then the radar and scoreboard beside the
/// recent trial table, then a one-line key help footer.
pub(crate) fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let snapshot = app.session.snapshot();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], &app.theme);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(outer[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(7)])
        .split(main[0]);

    draw_radar(f, left[0], &snapshot, app.frame, &app.theme);
    draw_scoreboard(f, left[1], &snapshot, &app.theme);
    draw_history(f, main[1], app.session.history(), &app.theme);

    draw_footer(f, outer[2], &snapshot, &app.theme);
}

fn draw_header(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            "Sonar",
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Directional sound localisation training. Stereo headphones recommended.",
            Style::default().fg(theme.muted_colour),
        )),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_footer(f: &mut Frame, area: Rect, snapshot: &SessionSnapshot, theme: &Theme) {
    let (session_icon, session_label) = if snapshot.active {
        (ICON_STOP, "stop")
    } else {
        (ICON_PLAY, "start")
    };
    let sound_icon = if snapshot.sound_enabled {
        ICON_SOUND_ON
    } else {
        ICON_MUTED
    };

    let key = |k: &'static str| {
        Span::styled(
            k,
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
    };
    let text = |t: String| Span::styled(t, Style::default().fg(theme.muted_colour));

    let line = Line::from(vec![
        key(" Enter"),
        text(format!(" {} {}  ", session_icon, session_label)),
        key(ARROW_LEFT),
        text(" left  ".to_string()),
        key(ARROW_RIGHT),
        text(" right  ".to_string()),
        key("m"),
        text(format!(" sound {}  ", sound_icon)),
        key("q"),
        text(" quit".to_string()),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
