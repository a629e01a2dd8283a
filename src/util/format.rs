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

use chrono::{DateTime, Local};

/// Formats an accuracy percentage with a single decimal place.
///
/// Expects a value already rounded to tenths by [`crate::model::accuracy`].
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_accuracy(0.0), "0.0");
/// assert_eq!(format_accuracy(66.666), "66.7");
/// ```
pub(crate) fn format_accuracy(percent: f64) -> String {
    format!("{:.1}", percent)
}

/// Formats the wall-clock time of a trial response as `HH:MM:SS`.
pub(crate) fn format_clock(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::accuracy;

    #[test]
    fn accuracy_without_attempts_is_zero_point_zero() {
        assert_eq!(format_accuracy(accuracy(0, 0)), "0.0");
    }

    #[test]
    fn accuracy_rounds_to_one_decimal() {
        assert_eq!(format_accuracy(accuracy(2, 3)), "66.7");
        assert_eq!(format_accuracy(accuracy(1, 3)), "33.3");
        assert_eq!(format_accuracy(accuracy(5, 5)), "100.0");
    }

    #[test]
    fn accuracy_ties_round_up() {
        assert_eq!(format_accuracy(accuracy(1, 16)), "6.3");
        assert_eq!(format_accuracy(accuracy(5, 16)), "31.3");
        assert_eq!(format_accuracy(accuracy(3, 16)), "18.8");
    }

    #[test]
    fn clock_is_zero_padded() {
        use chrono::TimeZone;

        let timestamp = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_clock(&timestamp), "03:04:05");
    }
}
