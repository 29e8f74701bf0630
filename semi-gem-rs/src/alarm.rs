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

//! # ALARM MANAGEMENT
//! **Based on SEMI E30§9 (S5F1/2/3/4), secsgem's `GemEquipmentHandler.set_alarm`/`clear_alarm`**
//!
//! An [Alarm] has two independent flags: whether it is *enabled* (the
//! equipment should report it at all, toggled by S5F3) and whether it is
//! currently *set* (the underlying condition is actually present). Setting
//! or clearing an alarm that is disabled still updates [Catalog]'s state —
//! SEMI E30 does not require hiding the condition, only suppressing the
//! S5F1 report — and still fires `ce_on`/`ce_off` if configured: an
//! application watching collection events should not silently miss an
//! alarm transition just because S5F1 reporting was toggled off.

use crate::catalog::Catalog;
use crate::report::build_event_report;
use crate::Error;
use secs_ii::Item;

/// Acknowledge code for S5F4 (S5F3's own Enable/Disable Alarm Acknowledge).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlarmAck {
  Ok = 0,
  DenyUnknownAlarm = 1,
}

/// Result of [set_alarm]/[clear_alarm]: the collection event (if any) that
/// should now be triggered by the caller via
/// [crate::report::trigger_collection_event] or, if that event has no
/// enabled reports, sent directly as a bare S6F11 via [build_bare_report],
/// and whether an S5F1 alarm report should be sent at all.
pub struct AlarmTransition {
  pub fire_event: Option<u32>,
  pub send_report: bool,
}

/// ## SET ALARM
/// **Based on SEMI E30§9.1**
///
/// Marks `id` set. An unknown alarm ID is a programmer error — the caller
/// asked to set an alarm this equipment never defined — and surfaces as
/// [Error::UnknownAlarm] rather than an ordinary acknowledge code (SEMI E30
/// has no "create on first set" behavior). If the alarm is enabled and was
/// not already set, an S5F1 report should be sent and `ce_on` fires; if it
/// is enabled and already set, this is a no-op wire-wise (alarm flag
/// monotonicity). If disabled, the flag is still set and `ce_on` still
/// fires, but no S5F1 report is ever sent.
pub fn set_alarm(catalog: &Catalog, id: u32) -> Result<AlarmTransition, Error> {
  match catalog.set_alarm_state(id, true) {
    None => Err(Error::UnknownAlarm(id)),
    Some((was_already_set, alarm)) if alarm.enabled && was_already_set => {
      Ok(AlarmTransition { fire_event: None, send_report: false })
    },
    Some((_, alarm)) => {
      Ok(AlarmTransition { fire_event: alarm.ce_on, send_report: alarm.enabled })
    },
  }
}

/// ## CLEAR ALARM
/// **Based on SEMI E30§9.1** — symmetric with [set_alarm] using `ce_off`.
pub fn clear_alarm(catalog: &Catalog, id: u32) -> Result<AlarmTransition, Error> {
  match catalog.set_alarm_state(id, false) {
    None => Err(Error::UnknownAlarm(id)),
    Some((was_already_clear, alarm)) if alarm.enabled && was_already_clear => {
      Ok(AlarmTransition { fire_event: None, send_report: false })
    },
    Some((_, alarm)) => {
      Ok(AlarmTransition { fire_event: alarm.ce_off, send_report: alarm.enabled })
    },
  }
}

/// ## ENABLE/DISABLE ALARM
/// **Based on SEMI E30§9.2 (S5F3)**
pub fn set_alarm_enabled(catalog: &Catalog, id: u32, enabled: bool) -> AlarmAck {
  match catalog.set_alarm_enabled(id, enabled) {
    None => AlarmAck::DenyUnknownAlarm,
    Some(_) => AlarmAck::Ok,
  }
}

/// Builds the S5F1 Alarm Report Send body: `(ALCD, ALID, ALTX)`. `ALCD`'s
/// bit 8 (0x80) indicates set-vs-clear per SEMI E5; the alarm's own `code`
/// occupies the low 7 bits.
pub fn build_alarm_report(catalog: &Catalog, id: u32) -> Option<Item> {
  let alarm = catalog.alarm(id)?;
  let alcd = (alarm.code & 0x7F) | if alarm.set { 0x80 } else { 0x00 };
  Some(Item::List(vec![
    Item::Bin(vec![alcd]),
    Item::U4(vec![alarm.id]),
    Item::Ascii(alarm.text.into_bytes()),
  ]))
}

/// Builds an S6F11 body for `ce_id` using whatever reports are linked to it,
/// ignoring [crate::report::ReportEnablement] — used for the `ce_on`/`ce_off` firing which
/// SEMI E30 treats as independent of the S2F37 enable/disable toggle.
pub fn build_bare_report(catalog: &Catalog, ce_id: u32) -> Item {
  let report_ids = catalog.linked_reports(ce_id);
  build_event_report(catalog, ce_id, &report_ids)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::Alarm;

  fn catalog_with_alarm(enabled: bool) -> Catalog {
    let catalog = Catalog::new();
    catalog.define_alarm(Alarm {
      id: 1, text: "Door Open".into(), code: 0x01, enabled, set: false,
      ce_on: Some(1), ce_off: Some(2),
    });
    catalog
  }

  #[test]
  fn unknown_alarm_rejected() {
    let catalog = Catalog::new();
    match set_alarm(&catalog, 999) {
      Err(Error::UnknownAlarm(999)) => {},
      other => panic!("expected UnknownAlarm(999), got {other:?}"),
    }
  }

  #[test]
  fn set_alarm_fires_ce_on_even_when_disabled() {
    let catalog = catalog_with_alarm(false);
    let transition = set_alarm(&catalog, 1).unwrap();
    assert_eq!(transition.fire_event, Some(1));
    assert!(catalog.alarm(1).unwrap().set);
  }

  #[test]
  fn clear_fires_ce_off() {
    let catalog = catalog_with_alarm(true);
    set_alarm(&catalog, 1).unwrap();
    let transition = clear_alarm(&catalog, 1).unwrap();
    assert_eq!(transition.fire_event, Some(2));
    assert!(!catalog.alarm(1).unwrap().set);
  }

  #[test]
  fn second_set_on_enabled_alarm_produces_no_wire_traffic() {
    let catalog = catalog_with_alarm(true);
    let first = set_alarm(&catalog, 1).unwrap();
    assert!(first.send_report);
    assert_eq!(first.fire_event, Some(1));

    let second = set_alarm(&catalog, 1).unwrap();
    assert!(!second.send_report);
    assert_eq!(second.fire_event, None);
  }

  #[test]
  fn second_clear_on_enabled_alarm_produces_no_wire_traffic() {
    let catalog = catalog_with_alarm(true);
    set_alarm(&catalog, 1).unwrap();
    let first = clear_alarm(&catalog, 1).unwrap();
    assert!(first.send_report);
    assert_eq!(first.fire_event, Some(2));

    let second = clear_alarm(&catalog, 1).unwrap();
    assert!(!second.send_report);
    assert_eq!(second.fire_event, None);
  }

  #[test]
  fn disabled_alarm_never_sends_s5f1() {
    let catalog = catalog_with_alarm(false);
    let first = set_alarm(&catalog, 1).unwrap();
    assert!(!first.send_report);
    assert_eq!(first.fire_event, Some(1));
  }

  #[test]
  fn alarm_report_encodes_set_bit() {
    let catalog = catalog_with_alarm(true);
    set_alarm(&catalog, 1).unwrap();
    match build_alarm_report(&catalog, 1).unwrap() {
      Item::List(fields) => {
        match &fields[0] {
          Item::Bin(bytes) => assert_eq!(bytes[0] & 0x80, 0x80),
          other => panic!("unexpected ALCD item: {other:?}"),
        }
      },
      other => panic!("unexpected item: {other:?}"),
    }
  }
}
