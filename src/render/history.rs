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

//! Render the trial history, most recent first.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{
    model::{Direction, TrialRecord},
    render::icons::{ARROW_LEFT, ARROW_RIGHT, CHECK, CROSS},
    theme::Theme,
    util::format::format_clock,
};

pub(crate) fn draw_history(f: &mut Frame, area: Rect, history: &[TrialRecord], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(" Trials ");

    // Two rows go to the borders and one to the header
    let visible = usize::from(area.height.saturating_sub(3));

    let rows: Vec<Row> = history
        .iter()
        .enumerate()
        .rev()
        .take(visible)
        .map(|(idx, record)| history_row(idx + 1, record, theme))
        .collect();

    let header = Row::new(vec!["#", "Time", "Cue", "Answer", ""])
        .style(Style::default().fg(theme.muted_colour).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(2),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}

fn history_row(number: usize, record: &TrialRecord, theme: &Theme) -> Row<'static> {
    let direction_cell = |direction: Direction| {
        let arrow = match direction {
            Direction::Left => ARROW_LEFT,
            Direction::Right => ARROW_RIGHT,
        };
        Cell::from(format!("{} {}", arrow, direction))
            .style(Style::default().fg(theme.direction_colour(direction)))
    };

    let (mark, mark_colour) = if record.correct {
        (CHECK, theme.correct_colour)
    } else {
        (CROSS, theme.wrong_colour)
    };

    Row::new(vec![
        Cell::from(number.to_string()).style(Style::default().fg(theme.muted_colour)),
        Cell::from(format_clock(&record.timestamp)).style(Style::default().fg(theme.muted_colour)),
        direction_cell(record.direction),
        direction_cell(record.response),
        Cell::from(mark).style(Style::default().fg(mark_colour).add_modifier(Modifier::BOLD)),
    ])
}
