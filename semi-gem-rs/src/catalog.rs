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

//! # DATA MODEL CATALOG
//! **Based on secsgem's `gem/__init__.py` entity registry**
//!
//! Holds every named entity a GEM equipment exposes: [StatusVariable]s,
//! [DataValue]s, [EquipmentConstant]s, [CollectionEvent]s, [Report]
//! definitions, [CeLink] links between a collection event and the reports it
//! triggers, [Alarm]s, and [RemoteCommand] descriptors. [Catalog] is the
//! single place the rest of the crate (report engine, alarm engine, remote
//! command dispatch, the handler itself) looks things up by ID or name.
//!
//! A [StatusVariable]/[DataValue]/[EquipmentConstant]'s current value is read
//! on demand from a caller-supplied closure rather than stored inline: this
//! lets the equipment-specific program back these with live process state
//! instead of requiring it to keep the catalog's copy in sync.

use secs_ii::Item;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

/// Current value supplier for a variable (SV/DV/EC). Invoked each time the
/// value is sampled, e.g. in response to S1F3/S2F13 or while building an
/// S6F11 report.
pub type ValueSource = Arc<dyn Fn() -> Item + Send + Sync>;

/// Setter for a writable equipment constant (S2F15), returning `false` if
/// the supplied value is rejected (out of range, wrong format).
pub type ValueSink = Arc<dyn Fn(&Item) -> bool + Send + Sync>;

/// ## STATUS VARIABLE
/// **Based on SEMI E30§7.2, SEMI E5§10.3 (SVID)**
#[derive(Clone)]
pub struct StatusVariable {
  pub id: u32,
  pub name: String,
  pub unit: Option<String>,
  pub source: ValueSource,
}

/// ## DATA VALUE
/// **Based on SEMI E30§7.3**
///
/// Distinguished from a [StatusVariable] only by convention: data values
/// describe measurements tied to a particular process step rather than
/// ongoing equipment status, but both are read the same way and reported
/// through the same mechanism.
#[derive(Clone)]
pub struct DataValue {
  pub id: u32,
  pub name: String,
  pub unit: Option<String>,
  pub source: ValueSource,
}

/// ## EQUIPMENT CONSTANT
/// **Based on SEMI E30§7.4, SEMI E5§10.3 (ECID)**
#[derive(Clone)]
pub struct EquipmentConstant {
  pub id: u32,
  pub name: String,
  pub unit: Option<String>,
  pub min: Option<Item>,
  pub max: Option<Item>,
  pub default: Option<Item>,
  pub source: ValueSource,
  /// `None` for a read-only constant.
  pub sink: Option<ValueSink>,
}

impl EquipmentConstant {
  /// Whether `value` coerces to a number and falls within `[min, max]`
  /// (SEMI E30§7.4, the S2F15 EAC=3 boundary). A bound left unset imposes
  /// no limit on that side; a non-numeric `value` never passes.
  fn accepts(&self, value: &Item) -> bool {
    let Some(numeric) = item_as_f64(value) else { return false };
    if let Some(min) = &self.min {
      if item_as_f64(min).is_some_and(|min| numeric < min) {
        return false;
      }
    }
    if let Some(max) = &self.max {
      if item_as_f64(max).is_some_and(|max| numeric > max) {
        return false;
      }
    }
    true
  }
}

fn item_as_f64(item: &Item) -> Option<f64> {
  match item {
    Item::I1(v) => v.first().map(|x| *x as f64),
    Item::I2(v) => v.first().map(|x| *x as f64),
    Item::I4(v) => v.first().map(|x| *x as f64),
    Item::I8(v) => v.first().map(|x| *x as f64),
    Item::U1(v) => v.first().map(|x| *x as f64),
    Item::U2(v) => v.first().map(|x| *x as f64),
    Item::U4(v) => v.first().map(|x| *x as f64),
    Item::U8(v) => v.first().map(|x| *x as f64),
    Item::F4(v) => v.first().map(|x| *x as f64),
    Item::F8(v) => v.first().copied(),
    _ => None,
  }
}

/// Outcome of an S2F15 Equipment Constant Send for a single `(ECID, ECV)`
/// pair (S2F16 EAC).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EquipmentConstantAck {
  Ok = 0,
  DenyUnknownId = 1,
  DenyBusy = 2,
  DenyInvalidValue = 3,
}

/// ## COLLECTION EVENT
/// **Based on SEMI E30§7.5, SEMI E5§10.3 (CEID)**
#[derive(Clone)]
pub struct CollectionEvent {
  pub id: u32,
  pub name: String,
  /// Status/data variable IDs this event's reports may draw from.
  pub linked_variables: Vec<u32>,
}

/// ## REPORT
/// **Based on SEMI E30§7.6 (RPTID, defined by S2F33)**
#[derive(Clone)]
pub struct Report {
  pub id: u32,
  pub variables: Vec<u32>,
}

/// ## COLLECTION EVENT LINK
/// **Based on SEMI E30§7.6 (defined by S2F35)**
///
/// Associates a [CollectionEvent] with the set of [Report]s that should be
/// included in the S6F11 sent when it fires.
#[derive(Clone, Default)]
pub struct CeLink {
  pub reports: Vec<u32>,
}

/// ## ALARM
/// **Based on SEMI E30§7.7, SEMI E5§10.3 (ALID)**
#[derive(Clone)]
pub struct Alarm {
  pub id: u32,
  pub text: String,
  pub code: u8,
  pub enabled: bool,
  pub set: bool,
  /// Collection event fired when the alarm transitions to set.
  pub ce_on: Option<u32>,
  /// Collection event fired when the alarm transitions to cleared.
  pub ce_off: Option<u32>,
}

/// Outcome of dispatching a [RemoteCommand].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoteCommandAck {
  Ok,
  InvalidCommand,
  CouldNotBePerformed,
  ParameterInvalid,
  AlreadyActive,
  FinishLater,
  RejectedNoSuchObject,
}

/// Signature a remote command handler must implement: parameter name/value
/// pairs in, an acknowledge code out. Long-running commands should return
/// [RemoteCommandAck::FinishLater] and later complete by firing the
/// command's configured completion event through the handler's
/// [EventProducer][crate::callback::EventProducer].
pub type RemoteCommandBody = Arc<dyn Fn(&HashMap<String, String>) -> RemoteCommandAck + Send + Sync>;

/// ## REMOTE COMMAND
/// **Based on SEMI E30§7.8, SEMI E5§10.3 (RCMD)**
#[derive(Clone)]
pub struct RemoteCommand {
  pub name: String,
  pub required_parameters: Vec<String>,
  pub body: RemoteCommandBody,
  /// Collection event fired once this command finishes, if any.
  pub completion_event: Option<u32>,
}

/// ## CATALOG
///
/// Thread-safe registry of every entity a [Handler][crate::handler::Handler]
/// exposes. Entries are inserted once at startup (typically) and looked up
/// frequently from the receive thread, so reads take a shared lock and
/// writes (`define_*`) take an exclusive one.
#[derive(Default)]
pub struct Catalog {
  status_variables: RwLock<HashMap<u32, StatusVariable>>,
  data_values: RwLock<HashMap<u32, DataValue>>,
  equipment_constants: RwLock<HashMap<u32, EquipmentConstant>>,
  collection_events: RwLock<HashMap<u32, CollectionEvent>>,
  reports: RwLock<HashMap<u32, Report>>,
  ce_links: RwLock<HashMap<u32, CeLink>>,
  alarms: RwLock<HashMap<u32, Alarm>>,
  remote_commands: RwLock<HashMap<String, RemoteCommand>>,
  /// Incremented on every S2F33 Define Report and consulted for DATAID on
  /// outbound S6F11; not a [Mutex] because it only ever needs fetch-and-add,
  /// but kept separate from the report map itself for clarity.
  next_data_id: Mutex<u32>,
}

impl Catalog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn define_status_variable(&self, sv: StatusVariable) {
    self.status_variables.write().unwrap().insert(sv.id, sv);
  }

  pub fn define_data_value(&self, dv: DataValue) {
    self.data_values.write().unwrap().insert(dv.id, dv);
  }

  pub fn define_equipment_constant(&self, ec: EquipmentConstant) {
    self.equipment_constants.write().unwrap().insert(ec.id, ec);
  }

  pub fn define_collection_event(&self, ce: CollectionEvent) {
    self.collection_events.write().unwrap().insert(ce.id, ce);
  }

  pub fn define_alarm(&self, alarm: Alarm) {
    self.alarms.write().unwrap().insert(alarm.id, alarm);
  }

  pub fn define_remote_command(&self, rcmd: RemoteCommand) {
    self.remote_commands.write().unwrap().insert(rcmd.name.clone(), rcmd);
  }

  pub fn status_variable(&self, id: u32) -> Option<StatusVariable> {
    self.status_variables.read().unwrap().get(&id).cloned()
  }

  pub fn data_value(&self, id: u32) -> Option<DataValue> {
    self.data_values.read().unwrap().get(&id).cloned()
  }

  pub fn equipment_constant(&self, id: u32) -> Option<EquipmentConstant> {
    self.equipment_constants.read().unwrap().get(&id).cloned()
  }

  /// ## WRITE EQUIPMENT CONSTANT
  /// **Based on SEMI E30§7.4 (S2F15/S2F16)**
  ///
  /// Validates `value` against `id`'s `[min, max]` bounds before invoking
  /// its sink, so a rejected write never disturbs the stored value: unknown
  /// `id` and an unwritable (no sink) constant both yield
  /// [EquipmentConstantAck::DenyUnknownId]/[EquipmentConstantAck::DenyInvalidValue]
  /// without calling anything, and an in-range value is only committed once
  /// the sink itself accepts it.
  pub fn write_equipment_constant(&self, id: u32, value: &Item) -> EquipmentConstantAck {
    let Some(ec) = self.equipment_constant(id) else { return EquipmentConstantAck::DenyUnknownId };
    if !ec.accepts(value) {
      return EquipmentConstantAck::DenyInvalidValue;
    }
    match &ec.sink {
      Some(sink) if sink(value) => EquipmentConstantAck::Ok,
      _ => EquipmentConstantAck::DenyInvalidValue,
    }
  }

  pub fn collection_event(&self, id: u32) -> Option<CollectionEvent> {
    self.collection_events.read().unwrap().get(&id).cloned()
  }

  pub fn remote_command(&self, name: &str) -> Option<RemoteCommand> {
    self.remote_commands.read().unwrap().get(name).cloned()
  }

  pub fn alarm(&self, id: u32) -> Option<Alarm> {
    self.alarms.read().unwrap().get(&id).cloned()
  }

  pub fn alarm_ids(&self) -> Vec<u32> {
    self.alarms.read().unwrap().keys().copied().collect()
  }

  /// Sets `id`'s `set` flag to `set`, returning the alarm's new state
  /// alongside whether it was already in that state (for the alarm flag
  /// monotonicity invariant in [crate::alarm]).
  pub fn set_alarm_state(&self, id: u32, set: bool) -> Option<(bool, Alarm)> {
    let mut alarms = self.alarms.write().unwrap();
    let alarm = alarms.get_mut(&id)?;
    let was_already = alarm.set == set;
    alarm.set = set;
    Some((was_already, alarm.clone()))
  }

  pub fn set_alarm_enabled(&self, id: u32, enabled: bool) -> Option<Alarm> {
    let mut alarms = self.alarms.write().unwrap();
    let alarm = alarms.get_mut(&id)?;
    alarm.enabled = enabled;
    Some(alarm.clone())
  }

  pub fn alarms_set_count(&self) -> usize {
    self.alarms.read().unwrap().values().filter(|a| a.set).count()
  }

  /// Resolve a variable (status variable or data value) by ID, regardless
  /// of which catalog it lives in. Status variables take priority in the
  /// unlikely case an ID collides across both spaces.
  pub fn sample_variable(&self, id: u32) -> Option<Item> {
    if let Some(sv) = self.status_variable(id) {
      return Some((sv.source)());
    }
    if let Some(dv) = self.data_value(id) {
      return Some((dv.source)());
    }
    None
  }

  pub fn define_report(&self, report: Report) {
    self.reports.write().unwrap().insert(report.id, report);
  }

  /// Removes `id` from the report table and from every [CeLink] it is
  /// currently attached to, per SEMI E30§8.1's "delete this report" form of
  /// S2F33 (an `RPTID` with an empty `VID` list).
  pub fn delete_report(&self, id: u32) -> bool {
    let removed = self.reports.write().unwrap().remove(&id).is_some();
    for link in self.ce_links.write().unwrap().values_mut() {
      link.reports.retain(|report_id| *report_id != id);
    }
    removed
  }

  pub fn clear_reports(&self) {
    self.reports.write().unwrap().clear();
    self.ce_links.write().unwrap().clear();
  }

  pub fn report(&self, id: u32) -> Option<Report> {
    self.reports.read().unwrap().get(&id).cloned()
  }

  pub fn report_exists(&self, id: u32) -> bool {
    self.reports.read().unwrap().contains_key(&id)
  }

  pub fn link_reports(&self, ce_id: u32, report_ids: Vec<u32>) {
    self.ce_links.write().unwrap().entry(ce_id).or_default().reports.extend(report_ids);
  }

  pub fn unlink_reports(&self, ce_id: u32, report_ids: &[u32]) {
    if let Some(link) = self.ce_links.write().unwrap().get_mut(&ce_id) {
      link.reports.retain(|r| !report_ids.contains(r));
    }
  }

  pub fn unlink_all(&self, ce_id: u32) {
    self.ce_links.write().unwrap().remove(&ce_id);
  }

  pub fn linked_reports(&self, ce_id: u32) -> Vec<u32> {
    self.ce_links.read().unwrap().get(&ce_id).map(|l| l.reports.clone()).unwrap_or_default()
  }

  pub fn next_data_id(&self) -> u32 {
    let mut guard = self.next_data_id.lock().unwrap();
    *guard = guard.wrapping_add(1);
    *guard
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_variable_roundtrip() {
    let catalog = Catalog::new();
    catalog.define_status_variable(StatusVariable {
      id: 100,
      name: "PPExecName".into(),
      unit: None,
      source: Arc::new(|| Item::Ascii(b"RECIPE1".to_vec())),
    });
    let sv = catalog.status_variable(100).expect("defined above");
    match (sv.source)() {
      Item::Ascii(bytes) => assert_eq!(bytes, b"RECIPE1"),
      other => panic!("unexpected item: {other:?}"),
    }
  }

  #[test]
  fn ce_link_add_and_remove() {
    let catalog = Catalog::new();
    catalog.define_report(Report { id: 1000, variables: vec![100] });
    catalog.link_reports(100025, vec![1000]);
    assert_eq!(catalog.linked_reports(100025), vec![1000]);
    catalog.unlink_reports(100025, &[1000]);
    assert!(catalog.linked_reports(100025).is_empty());
  }

  #[test]
  fn equipment_constant_write_rejects_unknown_id() {
    let catalog = Catalog::new();
    assert_eq!(
      catalog.write_equipment_constant(20, &Item::I4(vec![321])),
      EquipmentConstantAck::DenyUnknownId,
    );
  }

  #[test]
  fn equipment_constant_write_rejects_out_of_range_and_keeps_prior_value() {
    let catalog = Catalog::new();
    let stored = Arc::new(Mutex::new(321i32));
    let read = stored.clone();
    let write = stored.clone();
    catalog.define_equipment_constant(EquipmentConstant {
      id: 20,
      name: "MaxLotSize".into(),
      unit: None,
      min: Some(Item::I4(vec![0])),
      max: Some(Item::I4(vec![500])),
      default: Some(Item::I4(vec![321])),
      source: Arc::new(move || Item::I4(vec![*read.lock().unwrap()])),
      sink: Some(Arc::new(move |value| {
        let Some(v) = item_as_f64(value) else { return false };
        *write.lock().unwrap() = v as i32;
        true
      })),
    });
    let ack = catalog.write_equipment_constant(20, &Item::I4(vec![501]));
    assert_eq!(ack, EquipmentConstantAck::DenyInvalidValue);
    assert_eq!(*stored.lock().unwrap(), 321);
  }

  #[test]
  fn equipment_constant_write_in_range_commits() {
    let catalog = Catalog::new();
    let stored = Arc::new(Mutex::new(321i32));
    let read = stored.clone();
    let write = stored.clone();
    catalog.define_equipment_constant(EquipmentConstant {
      id: 20,
      name: "MaxLotSize".into(),
      unit: None,
      min: Some(Item::I4(vec![0])),
      max: Some(Item::I4(vec![500])),
      default: Some(Item::I4(vec![321])),
      source: Arc::new(move || Item::I4(vec![*read.lock().unwrap()])),
      sink: Some(Arc::new(move |value| {
        let Some(v) = item_as_f64(value) else { return false };
        *write.lock().unwrap() = v as i32;
        true
      })),
    });
    let ack = catalog.write_equipment_constant(20, &Item::I4(vec![400]));
    assert_eq!(ack, EquipmentConstantAck::Ok);
    assert_eq!(*stored.lock().unwrap(), 400);
  }

  #[test]
  fn alarm_set_and_clear() {
    let catalog = Catalog::new();
    catalog.define_alarm(Alarm {
      id: 1, text: "Door Open".into(), code: 0x80, enabled: true, set: false,
      ce_on: Some(1), ce_off: Some(2),
    });
    let (was_already_set, alarm) = catalog.set_alarm_state(1, true).unwrap();
    assert!(!was_already_set);
    assert!(alarm.set);
    assert_eq!(catalog.alarms_set_count(), 1);
  }
}
