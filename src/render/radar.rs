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

//! Render the sonar display.
//!
//! Concentric rings with left and right ear markers. While a session runs a
//! sweep line turns one step per tick, and while a cue is pending a pulse
//! grows from the centre. The pulse never leans towards the cue's side.

use std::f64::consts::TAU;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Padding,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

use crate::{model::SessionSnapshot, theme::Theme};

const SWEEP_STEPS: usize = 24;
const PULSE_STEPS: usize = 4;

const RINGS: [f64; 4] = [0.95, 0.7, 0.45, 0.2];

/// End point of the sweep line for animation frame `frame`, on the unit
/// circle, starting at twelve o'clock and turning clockwise.
pub(crate) fn sweep_tip(frame: usize) -> (f64, f64) {
    let angle = (frame % SWEEP_STEPS) as f64 / SWEEP_STEPS as f64 * TAU;
    (angle.sin(), angle.cos())
}

pub(crate) fn draw_radar(
    f: &mut Frame,
    area: Rect,
    snapshot: &SessionSnapshot,
    frame: usize,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1))
        .title(" Sonar ");

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-1.1, 1.1])
        .y_bounds([-1.1, 1.1])
        .paint(|ctx| {
            for radius in RINGS {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius,
                    color: theme.radar_ring_colour,
                });
            }

            if snapshot.active {
                let (x, y) = sweep_tip(frame);
                ctx.draw(&CanvasLine::new(
                    0.0,
                    0.0,
                    x * RINGS[0],
                    y * RINGS[0],
                    theme.radar_sweep_colour,
                ));
            }

            if snapshot.cue_pending {
                let step = frame % PULSE_STEPS + 1;
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 0.1 * step as f64,
                    color: theme.pulse_colour,
                });
            }

            let marker = |label: &'static str, colour: Color| {
                Line::from(Span::styled(
                    label,
                    Style::default().fg(colour).add_modifier(Modifier::BOLD),
                ))
            };
            ctx.print(-1.05, 0.0, marker("L", theme.left_colour));
            ctx.print(1.0, 0.0, marker("R", theme.right_colour));
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_starts_at_twelve_and_turns_clockwise() {
        let (x, y) = sweep_tip(0);
        assert!(x.abs() < 1e-9 && (y - 1.0).abs() < 1e-9);

        let (x, y) = sweep_tip(SWEEP_STEPS / 4);
        assert!((x - 1.0).abs() < 1e-9 && y.abs() < 1e-9);
    }

    #[test]
    fn sweep_wraps() {
        assert_eq!(sweep_tip(3), sweep_tip(3 + SWEEP_STEPS));
    }
}
