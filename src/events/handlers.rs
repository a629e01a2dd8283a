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

use crate::{App, audio::AudioAsset, model::Direction, timer::TimerId};

pub(super) fn handle_toggle_session(app: &mut App) {
    if app.session.snapshot().active {
        app.session.stop_session();
    } else {
        app.session.start_session();
    }
}

pub(super) fn handle_response(app: &mut App, direction: Direction) {
    app.session.handle_response(direction);
}

pub(super) fn handle_toggle_sound(app: &mut App) {
    app.session.toggle_sound();
}

pub(super) fn handle_cue_asset_loaded(app: &mut App, asset: AudioAsset) {
    app.session.player_mut().set_asset(asset);
}

pub(super) fn handle_timer_fired(app: &mut App, id: TimerId) {
    app.session.on_timer(id);
}

pub(super) fn handle_tick(app: &mut App) {
    app.frame = app.frame.wrapping_add(1);
}
