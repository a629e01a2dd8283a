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

//! Visual styling and colour configuration for the TUI.
//!
//! This module defines the application's colour palette and converts colours
//! to the hexadecimal form used when styling the terminal emulator itself.

use ratatui::style::Color;

use crate::model::{Direction, Feedback};

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_colour: Color,

    pub(crate) radar_ring_colour: Color,
    pub(crate) radar_sweep_colour: Color,
    pub(crate) pulse_colour: Color,

    pub(crate) left_colour: Color,
    pub(crate) right_colour: Color,

    pub(crate) correct_colour: Color,
    pub(crate) wrong_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(12, 22, 28),
            accent_colour: Color::Rgb(64, 224, 160),
            border_colour: Color::Rgb(70, 96, 104),
            muted_colour: Color::Rgb(140, 156, 162),

            radar_ring_colour: Color::Rgb(36, 110, 90),
            radar_sweep_colour: Color::Rgb(64, 224, 160),
            pulse_colour: Color::Rgb(250, 189, 47),

            left_colour: Color::Rgb(80, 140, 250),
            right_colour: Color::Rgb(240, 90, 90),

            correct_colour: Color::Rgb(80, 220, 110),
            wrong_colour: Color::Rgb(240, 90, 90),
        }
    }

    pub(crate) fn direction_colour(&self, direction: Direction) -> Color {
        match direction {
            Direction::Left => self.left_colour,
            Direction::Right => self.right_colour,
        }
    }

    pub(crate) fn feedback_colour(&self, feedback: Feedback) -> Color {
        match feedback {
            Feedback::Correct => self.correct_colour,
            Feedback::Wrong => self.wrong_colour,
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, or `None` for anything but an `Rgb` colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::to_hex(Color::Rgb(12, 22, 255)), Some("#0c16ff".to_string()));
        assert_eq!(Theme::to_hex(Color::Red), None);
    }
}
