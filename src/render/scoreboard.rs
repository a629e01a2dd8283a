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

//! Render the running score, the answer feedback and the asset status line.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    model::{Feedback, SessionPhase, SessionSnapshot},
    render::icons::{CHECK, CROSS},
    theme::Theme,
    util::format::format_accuracy,
};

pub(crate) fn draw_scoreboard(
    f: &mut Frame,
    area: Rect,
    snapshot: &SessionSnapshot,
    theme: &Theme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);

    draw_stat(
        f,
        cells[0],
        "Attempts",
        snapshot.total_attempts.to_string(),
        theme.accent_colour,
        theme,
    );
    draw_stat(
        f,
        cells[1],
        "Accuracy",
        format!("{}%", format_accuracy(snapshot.accuracy)),
        theme.correct_colour,
        theme,
    );
    draw_stat(
        f,
        cells[2],
        "Correct",
        snapshot.correct_attempts.to_string(),
        theme.left_colour,
        theme,
    );

    f.render_widget(
        Paragraph::new(feedback_line(snapshot, theme)).alignment(Alignment::Center),
        rows[1],
    );

    if let Some(line) = status_line(snapshot, theme) {
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), rows[2]);
    }
}

fn draw_stat(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: String,
    colour: Color,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour));

    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(colour).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label.to_string(), Style::default().fg(theme.muted_colour))),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center).block(block), area);
}

/// One line describing where the current trial is.
pub(crate) fn feedback_text(snapshot: &SessionSnapshot) -> String {
    match (snapshot.phase, snapshot.feedback) {
        (SessionPhase::Feedback, Some(Feedback::Correct)) => format!("{} Correct", CHECK),
        (SessionPhase::Feedback, Some(Feedback::Wrong)) => match snapshot.current_direction {
            Some(direction) => format!("{} Wrong, it came from the {}", CROSS, direction),
            None => format!("{} Wrong", CROSS),
        },
        (SessionPhase::TrialPending, _) => "Listen...".to_string(),
        (SessionPhase::AwaitingResponse, _) => "Which side was it?".to_string(),
        _ => "Press Enter to start a session".to_string(),
    }
}

fn feedback_line(snapshot: &SessionSnapshot, theme: &Theme) -> Line<'static> {
    let colour = snapshot
        .feedback
        .map(|feedback| theme.feedback_colour(feedback))
        .unwrap_or(theme.muted_colour);

    Line::from(Span::styled(
        feedback_text(snapshot),
        Style::default().fg(colour).add_modifier(Modifier::BOLD),
    ))
}

/// Shown only while no cue sound is installed.
fn status_line(snapshot: &SessionSnapshot, theme: &Theme) -> Option<Line<'static>> {
    if snapshot.asset_loaded {
        return None;
    }

    Some(Line::from(Span::styled(
        "No cue sound loaded, cues are silent",
        Style::default().fg(theme.wrong_colour),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::Direction;

    fn snapshot(phase: SessionPhase, feedback: Option<Feedback>) -> SessionSnapshot {
        SessionSnapshot {
            phase,
            active: phase != SessionPhase::Idle,
            current_direction: None,
            cue_pending: phase == SessionPhase::TrialPending,
            feedback,
            total_attempts: 0,
            correct_attempts: 0,
            accuracy: 0.0,
            sound_enabled: true,
            asset_loaded: true,
        }
    }

    #[test]
    fn status_line_only_without_asset() {
        let theme = Theme::default();
        let mut loaded = snapshot(SessionPhase::Idle, None);
        assert!(status_line(&loaded, &theme).is_none());

        loaded.asset_loaded = false;
        assert!(status_line(&loaded, &theme).is_some());
    }

    #[test]
    fn feedback_text_per_phase() {
        assert_eq!(
            feedback_text(&snapshot(SessionPhase::Feedback, Some(Feedback::Correct))),
            format!("{} Correct", CHECK)
        );
        assert_eq!(
            feedback_text(&snapshot(SessionPhase::Feedback, Some(Feedback::Wrong))),
            format!("{} Wrong", CROSS)
        );

        let mut wrong = snapshot(SessionPhase::Feedback, Some(Feedback::Wrong));
        wrong.current_direction = Some(Direction::Left);
        assert_eq!(
            feedback_text(&wrong),
            format!("{} Wrong, it came from the left", CROSS)
        );
        assert_eq!(feedback_text(&snapshot(SessionPhase::TrialPending, None)), "Listen...");
        assert_eq!(
            feedback_text(&snapshot(SessionPhase::AwaitingResponse, None)),
            "Which side was it?"
        );
        assert_eq!(
            feedback_text(&snapshot(SessionPhase::Idle, None)),
            "Press Enter to start a session"
        );
    }
}
