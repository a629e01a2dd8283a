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

//! Unicode symbols for the TUI.

pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_STOP: &str = "\u{25A0}";

pub(crate) const ARROW_LEFT: &str = "\u{2190}";
pub(crate) const ARROW_RIGHT: &str = "\u{2192}";

pub(crate) const CHECK: &str = "\u{2713}";
pub(crate) const CROSS: &str = "\u{2717}";

// Variation Selector-15 [\u{FE0E}] asks for the monochrome text glyph instead
// of a colour emoji, so the icon follows the TUI's styling.
pub(crate) const ICON_SOUND_ON: &str = "\u{1F50A}\u{FE0E}";
pub(crate) const ICON_MUTED: &str = "\u{1F507}\u{FE0E}";
