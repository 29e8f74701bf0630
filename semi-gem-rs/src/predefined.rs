// Copyright © 2024 Nathaniel Hardesty
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the “Software”), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

//! # PREDEFINED STATUS VARIABLES, EQUIPMENT CONSTANTS, AND COLLECTION EVENTS
//!
//! **Based on secsgem's `gem/__init__.py` predefined ID constants**
//!
//! GEM reserves a handful of SVID/ECID/CEID values for equipment-wide
//! bookkeeping that every compliant equipment, regardless of its specific
//! process, must expose. The IDs themselves are local to the implementation
//! (SEMI E30 does not mandate specific numeric values), but a consistent
//! choice makes this module's constants a stable reference point for the rest
//! of the crate and for integration tests.

use chrono::{Local, SecondsFormat};

/// Clock status variable: the equipment's current date/time, in one of three
/// textual formats selected by [`TIME_FORMAT`][super::predefined::TIME_FORMAT].
pub const CLOCK: u32 = 1;
/// Mirrors the control state machine's current state (1-5, see
/// [`control_state`][crate::control_state]).
pub const CONTROL_STATE: u32 = 2;
/// Whether collection event reporting is globally enabled.
pub const EVENTS_ENABLED: u32 = 3;
/// Whether alarm reporting is globally enabled.
pub const ALARMS_ENABLED: u32 = 4;
/// Count of currently set (active) alarms.
pub const ALARMS_SET: u32 = 5;

/// Equipment constant: seconds to wait between Establish Communications
/// Request retries while in WAIT-CR-FROM-HOST / WAIT-DELAY.
pub const ESTABLISH_COMMUNICATIONS_TIMEOUT: u32 = 1;
/// Equipment constant: which [`CLOCK`] textual representation to produce (0,
/// 1, or 2, see [`format_clock`]).
pub const TIME_FORMAT: u32 = 2;

/// Collection event fired when the reserved `START` remote command completes.
pub const CMD_START_DONE: u32 = 1;
/// Collection event fired when the reserved `STOP` remote command completes.
pub const CMD_STOP_DONE: u32 = 2;

/// Default value of [`ESTABLISH_COMMUNICATIONS_TIMEOUT`], in seconds.
pub const DEFAULT_ESTABLISH_COMMUNICATIONS_TIMEOUT: u32 = 10;

/// Render the current local time per SEMI E30's TIME_FORMAT equipment
/// constant.
///
/// - `0`: `YYMMDDhhmmss` (12 digits, two-digit year)
/// - `1`: `YYYYMMDDhhmmssss` (16 digits, year-first, hundredths of a second)
/// - `2`: RFC 3339 with a numeric UTC offset
///
/// Any other value falls back to format `1`, matching a permissive host that
/// has not yet negotiated a TIME_FORMAT.
pub fn format_clock(time_format: u32) -> String {
  let now = Local::now();
  match time_format {
    0 => now.format("%y%m%d%H%M%S").to_string(),
    2 => now.to_rfc3339_opts(SecondsFormat::Secs, false),
    _ => {
      // Centihundredths of a second: secsgem's original truncates the
      // microsecond field to two digits rather than rounding.
      let hundredths = now.format("%6f").to_string();
      format!("{}{:02}", now.format("%Y%m%d%H%M%S"), &hundredths[..2])
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn format_0_is_twelve_digits() {
    assert_eq!(format_clock(0).len(), 12);
  }

  #[test]
  fn format_1_is_sixteen_digits() {
    assert_eq!(format_clock(1).len(), 16);
  }

  #[test]
  fn format_2_is_rfc3339() {
    assert!(chrono::DateTime::parse_from_rfc3339(&format_clock(2)).is_ok());
  }
}
