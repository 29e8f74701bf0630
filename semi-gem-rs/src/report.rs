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

//! # DYNAMIC REPORT ENGINE
//! **Based on SEMI E30§8 (S2F33/34/35/36/37/38) and secsgem's
//! `GemEquipmentHandler._on_s02f33`/`_on_s02f35`/`_on_s02f37`**
//!
//! The report engine is one of this crate's three load-bearing subsystems.
//! It owns the host-driven dance that turns a [Catalog] of status variables
//! and data values into the subscription-style reporting SEMI E30 expects:
//!
//! 1. S2F33 Define Report: host names a [Report] (`RPTID`) as an ordered list
//!    of variable IDs.
//! 2. S2F35 Link Event Report: host attaches one or more `RPTID`s to a
//!    [CollectionEvent] (`CEID`).
//! 3. S2F37 Enable/Disable Event Report: host turns reporting for a `CEID`
//!    (or all of them) on or off.
//! 4. [trigger_collection_event] samples every linked report's variables and
//!    produces the S6F11 body the equipment sends when that event occurs.
//!
//! None of these four steps know about the wire — they take and return
//! [Item]s already unpacked from the S2Fxx body, leaving socket I/O and HSMS
//! framing to [handler][crate::handler].

use crate::catalog::Catalog;
use secs_ii::Item;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering::SeqCst};
use std::sync::Mutex;

/// Acknowledge code for S2F34 Define Report Acknowledge.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefineReportAck {
  Ok = 0,
  DenyInsufficientSpace = 1,
  DenyInvalidFormat = 2,
  DenyAlreadyDefined = 3,
  DenyUnknownVariable = 4,
}

/// Acknowledge code for S2F36 Link Event Report Acknowledge.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkReportAck {
  Ok = 0,
  DenyInsufficientSpace = 1,
  DenyInvalidFormat = 2,
  DenyUnknownReport = 3,
  DenyUnknownCollectionEvent = 4,
  DenyAlreadyLinked = 5,
}

/// Acknowledge code for S2F38 Enable/Disable Event Report Acknowledge.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnableReportAck {
  Ok = 0,
  DenyUnknownCollectionEvent = 1,
}

/// Parsed S2F33 body: `DATAID` plus `(RPTID, [VID...])` pairs. `DATAID == 0`
/// with an empty report list means "delete all reports" per SEMI E30.
pub struct ReportDefinition {
  pub data_id: u32,
  pub reports: Vec<(u32, Vec<u32>)>,
}

/// ## DEFINE REPORT
/// **Based on SEMI E30§8.1 (S2F33)**
///
/// Deletes all reports if `reports` is empty; otherwise defines/redefines
/// each named report, failing the whole request at the first invalid
/// variable reference or already-defined `RPTID` (SEMI E30 treats S2F33 as
/// all-or-nothing).
pub fn define_reports(catalog: &Catalog, definition: &ReportDefinition) -> DefineReportAck {
  if definition.reports.is_empty() {
    catalog.clear_reports();
    return DefineReportAck::Ok;
  }

  for (report_id, variables) in &definition.reports {
    if variables.is_empty() {
      // An RPTID with no VIDs names a deletion of that single report.
      continue;
    }
    if catalog.report_exists(*report_id) {
      return DefineReportAck::DenyAlreadyDefined;
    }
    for vid in variables {
      if catalog.sample_variable(*vid).is_none() {
        return DefineReportAck::DenyUnknownVariable;
      }
    }
  }

  for (report_id, variables) in &definition.reports {
    if variables.is_empty() {
      catalog.delete_report(*report_id);
    } else {
      catalog.define_report(crate::catalog::Report { id: *report_id, variables: variables.clone() });
    }
  }
  DefineReportAck::Ok
}

/// ## LINK EVENT REPORT
/// **Based on SEMI E30§8.2 (S2F35)**
///
/// Links each `(CEID, [RPTID...])` pair. An empty `RPTID` list unlinks every
/// report currently attached to that `CEID`.
pub fn link_reports(catalog: &Catalog, links: &[(u32, Vec<u32>)]) -> LinkReportAck {
  for (ce_id, report_ids) in links {
    if catalog.collection_event(*ce_id).is_none() {
      return LinkReportAck::DenyUnknownCollectionEvent;
    }
    for report_id in report_ids {
      if !catalog.report_exists(*report_id) {
        return LinkReportAck::DenyUnknownReport;
      }
    }
    if !report_ids.is_empty() {
      let already_linked = catalog.linked_reports(*ce_id);
      if report_ids.iter().any(|report_id| already_linked.contains(report_id)) {
        return LinkReportAck::DenyAlreadyLinked;
      }
    }
  }

  for (ce_id, report_ids) in links {
    if report_ids.is_empty() {
      catalog.unlink_all(*ce_id);
    } else {
      catalog.link_reports(*ce_id, report_ids.clone());
    }
  }
  LinkReportAck::Ok
}

/// Tracks which collection events currently report. Separate from
/// [Catalog] because enablement is a reporting-session concern, not part of
/// the equipment's static data model.
#[derive(Default)]
pub struct ReportEnablement {
  global: AtomicBool,
  disabled: Mutex<HashSet<u32>>,
}

impl ReportEnablement {
  pub fn new() -> Self {
    Self { global: AtomicBool::new(false), disabled: Mutex::new(HashSet::new()) }
  }

  /// ## ENABLE/DISABLE EVENT REPORT
  /// **Based on SEMI E30§8.3 (S2F37)**
  ///
  /// An empty `ce_ids` list applies to every collection event (the
  /// `CEED`-only, no-`CEID` form of S2F37).
  pub fn set_enabled(&self, catalog: &Catalog, enabled: bool, ce_ids: &[u32]) -> EnableReportAck {
    if ce_ids.is_empty() {
      self.global.store(enabled, SeqCst);
      self.disabled.lock().unwrap().clear();
      return EnableReportAck::Ok;
    }
    for ce_id in ce_ids {
      if catalog.collection_event(*ce_id).is_none() {
        return EnableReportAck::DenyUnknownCollectionEvent;
      }
    }
    let mut disabled = self.disabled.lock().unwrap();
    for ce_id in ce_ids {
      if enabled {
        disabled.remove(ce_id);
      } else {
        disabled.insert(*ce_id);
      }
    }
    EnableReportAck::Ok
  }

  pub fn is_enabled(&self, ce_id: u32) -> bool {
    self.global.load(SeqCst) && !self.disabled.lock().unwrap().contains(&ce_id)
  }
}

/// ## TRIGGER COLLECTION EVENT
/// **Based on SEMI E30§8.4 (S6F11)**
///
/// Builds the S6F11 body for `ce_id`: `(DATAID, CEID, [(RPTID, [V...])...])`.
/// Returns `None` if reporting for `ce_id` is currently disabled (the
/// equipment should not send S6F11 at all in that case) or if no reports are
/// linked to it (SEMI E30 permits firing the event with zero reports, but
/// most equipment implementations send nothing in that case either — the
/// caller still sees the `None` here and may choose to fire a reportless
/// S6F11 itself via [build_event_report] directly).
pub fn trigger_collection_event(
  catalog: &Catalog,
  enablement: &ReportEnablement,
  ce_id: u32,
) -> Option<Item> {
  if !enablement.is_enabled(ce_id) {
    return None;
  }
  let report_ids = catalog.linked_reports(ce_id);
  if report_ids.is_empty() {
    return None;
  }
  Some(build_event_report(catalog, ce_id, &report_ids))
}

/// Builds an S6F11 body for `ce_id` using exactly `report_ids`, without
/// consulting [ReportEnablement] or the catalog's own linked-report table.
/// Exposed for callers (alarms, remote command completion) that need to send
/// a report set different from the host-configured link table.
pub fn build_event_report(catalog: &Catalog, ce_id: u32, report_ids: &[u32]) -> Item {
  let reports: Vec<Item> = report_ids.iter().filter_map(|report_id| {
    let report = catalog.report(*report_id)?;
    let values: Vec<Item> = report.variables.iter()
      .map(|vid| catalog.sample_variable(*vid).unwrap_or(Item::List(vec![])))
      .collect();
    Some(Item::List(vec![
      Item::U4(vec![*report_id]),
      Item::List(values),
    ]))
  }).collect();

  Item::List(vec![
    Item::U4(vec![catalog.next_data_id()]),
    Item::U4(vec![ce_id]),
    Item::List(reports),
  ])
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::StatusVariable;
  use std::sync::Arc;

  fn catalog_with_sv() -> Catalog {
    let catalog = Catalog::new();
    catalog.define_status_variable(StatusVariable {
      id: 100, name: "Temp".into(), unit: Some("C".into()),
      source: Arc::new(|| Item::F4(vec![72.5])),
    });
    catalog.define_collection_event(crate::catalog::CollectionEvent {
      id: 100025, name: "ProcessComplete".into(), linked_variables: vec![100],
    });
    catalog
  }

  #[test]
  fn define_unknown_variable_rejected() {
    let catalog = catalog_with_sv();
    let ack = define_reports(&catalog, &ReportDefinition {
      data_id: 1,
      reports: vec![(1000, vec![999])],
    });
    assert_eq!(ack, DefineReportAck::DenyUnknownVariable);
  }

  #[test]
  fn define_report_over_equipment_constant_only_vid_is_rejected() {
    let catalog = catalog_with_sv();
    catalog.define_equipment_constant(crate::catalog::EquipmentConstant {
      id: 20, name: "MaxLotSize".into(), unit: None,
      min: None, max: None, default: Some(Item::I4(vec![321])),
      source: Arc::new(|| Item::I4(vec![321])),
      sink: None,
    });
    let ack = define_reports(&catalog, &ReportDefinition {
      data_id: 1,
      reports: vec![(1000, vec![20])],
    });
    assert_eq!(ack, DefineReportAck::DenyUnknownVariable);
  }

  #[test]
  fn full_report_cycle_produces_s6f11_body() {
    let catalog = catalog_with_sv();
    assert_eq!(define_reports(&catalog, &ReportDefinition { data_id: 1, reports: vec![(1000, vec![100])] }), DefineReportAck::Ok);
    assert_eq!(link_reports(&catalog, &[(100025, vec![1000])]), LinkReportAck::Ok);

    let enablement = ReportEnablement::new();
    assert_eq!(enablement.set_enabled(&catalog, true, &[]), EnableReportAck::Ok);

    let body = trigger_collection_event(&catalog, &enablement, 100025).expect("linked and enabled");
    match body {
      Item::List(fields) => assert_eq!(fields.len(), 3),
      other => panic!("unexpected item: {other:?}"),
    }
  }

  #[test]
  fn disabled_event_does_not_report() {
    let catalog = catalog_with_sv();
    define_reports(&catalog, &ReportDefinition { data_id: 1, reports: vec![(1000, vec![100])] });
    link_reports(&catalog, &[(100025, vec![1000])]);
    let enablement = ReportEnablement::new();
    assert!(trigger_collection_event(&catalog, &enablement, 100025).is_none());
  }

  #[test]
  fn relinking_same_report_is_rejected() {
    let catalog = catalog_with_sv();
    define_reports(&catalog, &ReportDefinition { data_id: 1, reports: vec![(1000, vec![100])] });
    assert_eq!(link_reports(&catalog, &[(100025, vec![1000])]), LinkReportAck::Ok);
    assert_eq!(link_reports(&catalog, &[(100025, vec![1000])]), LinkReportAck::DenyAlreadyLinked);
  }

  #[test]
  fn deleting_a_report_unlinks_it_from_its_collection_event() {
    let catalog = catalog_with_sv();
    define_reports(&catalog, &ReportDefinition { data_id: 1, reports: vec![(1000, vec![100])] });
    link_reports(&catalog, &[(100025, vec![1000])]);
    assert_eq!(catalog.linked_reports(100025), vec![1000]);

    // An RPTID with an empty VID list names a deletion of that report.
    assert_eq!(define_reports(&catalog, &ReportDefinition { data_id: 2, reports: vec![(1000, vec![])] }), DefineReportAck::Ok);
    assert!(!catalog.report_exists(1000));
    assert!(catalog.linked_reports(100025).is_empty());
  }
}
