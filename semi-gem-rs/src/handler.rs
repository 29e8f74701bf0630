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

//! # GEM HANDLER
//! **Based on secsgem's `GemEquipmentHandler`**
//!
//! Ties the [Catalog], the two state machines, the report engine, the alarm
//! engine, the remote command dispatcher, and the callback/event fabric to
//! an [hsms::single::Client] connection. [Handler::handle_inbound] is the
//! single dispatch point an application calls with every primary message the
//! HSMS layer hands back from its receive channel; everything else in this
//! crate is reachable but passive until this function, a timer, or the
//! application calls into it.
//!
//! Each `s<stream>f<function>` case below first tries
//! [Handler::s_callbacks], mirroring secsgem's own handler lookup order —
//! an application may override the default behavior for a given
//! stream/function entirely by binding it — and only falls back to this
//! crate's built-in GEM semantics when nothing is bound.

use crate::alarm;
use crate::callback::{CallbackHandler, EventProducer};
use crate::catalog::{Catalog, EquipmentConstantAck, RemoteCommandAck};
use crate::comm_state::CommunicationStateMachine;
use crate::control_state::ControlStateMachine;
use crate::predefined;
use crate::remote_command;
use crate::report::{self, ReportEnablement};
use secs_ii::{Item, Message};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Name used for [CallbackHandler] and [EventProducer] slots:
/// `"s<stream>f<function>"`, e.g. `"s2f41"`.
pub fn sf_name(stream: u8, function: u8) -> String {
  format!("s{stream}f{function}")
}

/// Name used for a collection event's [EventProducer] slot:
/// `"ce<CEID>"`.
pub fn ce_name(ce_id: u32) -> String {
  format!("ce{ce_id}")
}

/// ## GEM HANDLER
pub struct Handler {
  pub catalog: Catalog,
  pub communication_state: CommunicationStateMachine,
  pub control_state: ControlStateMachine,
  pub report_enablement: ReportEnablement,
  /// Bound per stream/function; given the inbound [Message] and returning
  /// `Some` body to reply with, or `None` to fall back to built-in handling.
  pub s_callbacks: CallbackHandler<Message, Option<Item>>,
  /// Fired whenever a collection event occurs, keyed by [ce_name], carrying
  /// the S6F11 body that was (or would have been) sent.
  pub events: EventProducer<Item>,
}

impl Default for Handler {
  fn default() -> Self {
    Self::new()
  }
}

impl Handler {
  pub fn new() -> Self {
    Self {
      catalog: Catalog::new(),
      communication_state: CommunicationStateMachine::new(),
      control_state: ControlStateMachine::new(),
      report_enablement: ReportEnablement::new(),
      s_callbacks: CallbackHandler::new(),
      events: EventProducer::new(),
    }
  }

  /// Fire `ce_id` through [Handler::events] and, if it is currently linked
  /// and enabled, build its S6F11 body. Applications needing to actually
  /// transmit the report should call this, then send the returned body as
  /// an S6F11 primary message over their [hsms::single::Client].
  pub fn trigger(self: &Arc<Self>, ce_id: u32) -> Option<Item> {
    let body = report::trigger_collection_event(&self.catalog, &self.report_enablement, ce_id);
    if let Some(body) = &body {
      self.events.fire(&ce_name(ce_id), body);
    }
    body
  }

  /// Sets an alarm, firing `ce_on` unconditionally (see [alarm] module doc)
  /// and returning the S5F1 body to send if alarm reporting is enabled.
  /// Fails with [crate::Error::UnknownAlarm] if `id` was never defined.
  pub fn set_alarm(self: &Arc<Self>, id: u32) -> Result<Option<Item>, crate::Error> {
    let transition = alarm::set_alarm(&self.catalog, id)?;
    if let Some(ce_id) = transition.fire_event {
      let body = alarm::build_bare_report(&self.catalog, ce_id);
      self.events.fire(&ce_name(ce_id), &body);
    }
    Ok(transition.send_report.then(|| alarm::build_alarm_report(&self.catalog, id)).flatten())
  }

  pub fn clear_alarm(self: &Arc<Self>, id: u32) -> Result<Option<Item>, crate::Error> {
    let transition = alarm::clear_alarm(&self.catalog, id)?;
    if let Some(ce_id) = transition.fire_event {
      let body = alarm::build_bare_report(&self.catalog, ce_id);
      self.events.fire(&ce_name(ce_id), &body);
    }
    Ok(transition.send_report.then(|| alarm::build_alarm_report(&self.catalog, id)).flatten())
  }

  /// ## HANDLE INBOUND MESSAGE
  ///
  /// Dispatches a primary message received from the HSMS layer and, if a
  /// reply is warranted, returns it as a [Message] ready to hand back to
  /// [hsms::single::Client::data] with the same system bytes. Returns `None`
  /// both for messages needing no reply and for messages this handler does
  /// not recognize (the latter is logged).
  pub fn handle_inbound(self: &Arc<Self>, message: Message) -> Option<Message> {
    let name = sf_name(message.stream, message.function);
    if let Some(overridden) = self.s_callbacks.fire(&name, message.clone()) {
      return overridden.map(|text| self.reply(message.stream, message.function + 1, Some(text)));
    }

    match (message.stream, message.function) {
      (1, 1) => Some(self.reply(1, 2, None)),
      (1, 13) => Some(self.on_establish_communications()),
      (1, 15) => { self.control_state.request_offline(); Some(self.reply_bin(1, 16, 0)) },
      (1, 17) => {
        let result = self.control_state.request_online();
        Some(self.reply_bin(1, 18, result.onlack()))
      },
      (2, 13) => Some(self.on_equipment_constant_request(&message)),
      (2, 15) => Some(self.on_equipment_constant_send(&message)),
      (2, 33) => Some(self.on_define_report(&message)),
      (2, 35) => Some(self.on_link_report(&message)),
      (2, 37) => Some(self.on_enable_report(&message)),
      (2, 41) => Some(self.on_host_command_send(&message)),
      (5, 3) => Some(self.on_enable_disable_alarm(&message)),
      _ => {
        warn!(stream = message.stream, function = message.function, "unhandled GEM message");
        None
      },
    }
  }

  fn reply(&self, stream: u8, function: u8, text: Option<Item>) -> Message {
    Message { stream, function, w: false, text }
  }

  /// Builds a reply carrying a single [Item::Bin] byte.
  fn reply_bin(&self, stream: u8, function: u8, value: u8) -> Message {
    Message { stream, function, w: false, text: Some(Item::bin(value)) }
  }

  fn on_establish_communications(self: &Arc<Self>) -> Message {
    self.communication_state.establish_communications_succeeded();
    debug!("communication state -> Communicating");
    Message {
      stream: 1,
      function: 14,
      w: false,
      text: Some(Item::List(vec![
        Item::bin(0),
        Item::List(vec![]),
      ])),
    }
  }

  fn on_equipment_constant_request(&self, message: &Message) -> Message {
    let ids = item_as_u32_list(message.text.as_ref());
    let values = if ids.is_empty() {
      vec![Item::List(vec![])]
    } else {
      ids.iter().map(|id| {
        self.catalog.equipment_constant(*id).map(|ec| (ec.source)())
          .unwrap_or(Item::List(vec![]))
      }).collect()
    };
    Message { stream: 2, function: 14, w: false, text: Some(Item::List(values)) }
  }

  fn on_equipment_constant_send(&self, message: &Message) -> Message {
    let pairs = match &message.text {
      Some(Item::List(items)) => items.clone(),
      _ => vec![],
    };
    let mut ack = EquipmentConstantAck::Ok;
    for pair in &pairs {
      let Item::List(fields) = pair else { ack = EquipmentConstantAck::DenyUnknownId; continue };
      let (Some(id), Some(value)) = (item_as_u32(fields.first()), fields.get(1)) else {
        ack = EquipmentConstantAck::DenyUnknownId;
        continue;
      };
      let result = self.catalog.write_equipment_constant(id, value);
      if result != EquipmentConstantAck::Ok {
        ack = result;
      }
    }
    self.reply_bin(2, 16, ack as u8)
  }

  fn on_define_report(&self, message: &Message) -> Message {
    let Item::List(fields) = message.text.clone().unwrap_or(Item::List(vec![])) else {
      return self.reply_bin(2, 34, report::DefineReportAck::DenyInvalidFormat as u8);
    };
    let data_id = fields.first().and_then(item_as_u32).unwrap_or(0);
    let reports = fields.get(1).map(|item| parse_report_groups(item)).unwrap_or_default();
    let ack = report::define_reports(&self.catalog, &report::ReportDefinition { data_id, reports });
    self.reply_bin(2, 34, ack as u8)
  }

  fn on_link_report(&self, message: &Message) -> Message {
    let Item::List(fields) = message.text.clone().unwrap_or(Item::List(vec![])) else {
      return self.reply_bin(2, 36, report::LinkReportAck::DenyInvalidFormat as u8);
    };
    let links = fields.get(1).map(|item| parse_report_groups(item)).unwrap_or_default();
    let ack = report::link_reports(&self.catalog, &links);
    self.reply_bin(2, 36, ack as u8)
  }

  fn on_enable_report(&self, message: &Message) -> Message {
    let Item::List(fields) = message.text.clone().unwrap_or(Item::List(vec![])) else {
      return self.reply_bin(2, 38, report::EnableReportAck::DenyUnknownCollectionEvent as u8);
    };
    let enabled = matches!(fields.first(), Some(Item::Bool(flags)) if flags.first().copied().unwrap_or(false));
    let ids = fields.get(1).map(|item| item_as_u32_list(Some(item))).unwrap_or_default();
    let ack = self.report_enablement.set_enabled(&self.catalog, enabled, &ids);
    self.reply_bin(2, 38, ack as u8)
  }

  fn on_host_command_send(self: &Arc<Self>, message: &Message) -> Message {
    let reject = |ack: RemoteCommandAck| Message {
      stream: 2, function: 42, w: false,
      text: Some(Item::List(vec![Item::bin(ack as u8), Item::List(vec![])])),
    };
    let Item::List(fields) = message.text.clone().unwrap_or(Item::List(vec![])) else {
      return reject(RemoteCommandAck::ParameterInvalid);
    };
    let name = match fields.first() {
      Some(Item::Ascii(bytes)) => String::from_utf8_lossy(bytes).to_string(),
      _ => return reject(RemoteCommandAck::ParameterInvalid),
    };
    let mut parameters = HashMap::new();
    if let Some(Item::List(groups)) = fields.get(1) {
      for group in groups {
        if let Item::List(pair) = group {
          if let (Some(Item::Ascii(key)), Some(value)) = (pair.first(), pair.get(1)) {
            parameters.insert(String::from_utf8_lossy(key).to_string(), item_as_string(value));
          }
        }
      }
    }

    let result = remote_command::dispatch(&self.catalog, &name, &parameters);
    if let Some(ce_id) = result.completion_event {
      self.trigger(ce_id);
    }
    let param_items: Vec<Item> = result.parameter_acks.iter().map(|(cp_name, ack)| {
      Item::List(vec![
        Item::Ascii(cp_name.clone().into_bytes()),
        Item::bin(*ack as u8),
      ])
    }).collect();
    Message {
      stream: 2,
      function: 42,
      w: false,
      text: Some(Item::List(vec![Item::bin(result.ack as u8), Item::List(param_items)])),
    }
  }

  fn on_enable_disable_alarm(&self, message: &Message) -> Message {
    let Item::List(fields) = message.text.clone().unwrap_or(Item::List(vec![])) else {
      return self.reply_bin(5, 4, alarm::AlarmAck::DenyUnknownAlarm as u8);
    };
    let enabled = matches!(fields.first(), Some(Item::Bin(aled)) if aled.first().copied().unwrap_or(0) & 0x80 != 0);
    let id = fields.get(1).and_then(item_as_u32).unwrap_or(0);
    let ack = alarm::set_alarm_enabled(&self.catalog, id, enabled);
    self.reply_bin(5, 4, ack as u8)
  }

  /// Current [`CLOCK`][predefined::CLOCK] text for the equipment's
  /// configured [`TIME_FORMAT`][predefined::TIME_FORMAT].
  pub fn clock(&self) -> String {
    let time_format = self.catalog.equipment_constant(predefined::TIME_FORMAT)
      .and_then(|ec| item_as_u32(Some(&(ec.source)())))
      .unwrap_or(1);
    predefined::format_clock(time_format)
  }
}

fn item_as_u32(item: Option<&Item>) -> Option<u32> {
  match item? {
    Item::U1(v) => v.first().map(|x| *x as u32),
    Item::U2(v) => v.first().map(|x| *x as u32),
    Item::U4(v) => v.first().copied(),
    Item::U8(v) => v.first().map(|x| *x as u32),
    Item::I1(v) => v.first().map(|x| *x as u32),
    Item::I2(v) => v.first().map(|x| *x as u32),
    Item::I4(v) => v.first().map(|x| *x as u32),
    Item::I8(v) => v.first().map(|x| *x as u32),
    _ => None,
  }
}

fn item_as_u32_list(item: Option<&Item>) -> Vec<u32> {
  match item {
    Some(Item::List(items)) => items.iter().filter_map(|i| item_as_u32(Some(i))).collect(),
    Some(other) => item_as_u32(Some(other)).into_iter().collect(),
    None => vec![],
  }
}

fn item_as_string(item: &Item) -> String {
  match item {
    Item::Ascii(bytes) => String::from_utf8_lossy(bytes).to_string(),
    other => format!("{other:?}"),
  }
}

/// Parses a `RepeatingGroup` of `(id, [member...])` pairs, as used by both
/// S2F33's `(RPTID, [VID...])` and S2F35's `(CEID, [RPTID...])` bodies.
fn parse_report_groups(item: &Item) -> Vec<(u32, Vec<u32>)> {
  match item {
    Item::List(groups) => groups.iter().filter_map(|group| {
      let Item::List(fields) = group else { return None };
      let id = item_as_u32(fields.first())?;
      let members = fields.get(1).map(|m| item_as_u32_list(Some(m))).unwrap_or_default();
      Some((id, members))
    }).collect(),
    _ => vec![],
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::{CollectionEvent, StatusVariable};

  fn new_handler() -> Arc<Handler> {
    let handler = Arc::new(Handler::new());
    handler.catalog.define_status_variable(StatusVariable {
      id: 100, name: "Temp".into(), unit: None, source: Arc::new(|| Item::F4(vec![1.0])),
    });
    handler.catalog.define_collection_event(CollectionEvent {
      id: 100025, name: "ProcessComplete".into(), linked_variables: vec![100],
    });
    handler
  }

  #[test]
  fn equipment_constant_send_rejects_out_of_range_value() {
    use crate::catalog::EquipmentConstant;
    let handler = new_handler();
    let stored = Arc::new(std::sync::Mutex::new(321i32));
    let read = stored.clone();
    let write = stored.clone();
    handler.catalog.define_equipment_constant(EquipmentConstant {
      id: 20, name: "MaxLotSize".into(), unit: None,
      min: Some(Item::I4(vec![0])), max: Some(Item::I4(vec![500])),
      default: Some(Item::I4(vec![321])),
      source: Arc::new(move || Item::I4(vec![*read.lock().unwrap()])),
      sink: Some(Arc::new(move |value| {
        let Item::I4(v) = value else { return false };
        *write.lock().unwrap() = v[0];
        true
      })),
    });

    let message = Message {
      stream: 2, function: 15, w: true,
      text: Some(Item::List(vec![Item::List(vec![Item::U4(vec![20]), Item::I4(vec![501])])])),
    };
    let reply = handler.handle_inbound(message).unwrap();
    assert!(matches!(reply.text, Some(Item::Bin(ref b)) if b == &vec![3]));
    assert_eq!(*stored.lock().unwrap(), 321);
  }

  #[test]
  fn enable_disable_alarm_reads_aled_as_binary() {
    use crate::catalog::Alarm;
    let handler = new_handler();
    handler.catalog.define_alarm(Alarm {
      id: 1, text: "Door Open".into(), code: 0x01, enabled: false, set: false,
      ce_on: None, ce_off: None,
    });

    let message = Message {
      stream: 5, function: 3, w: true,
      text: Some(Item::List(vec![Item::Bin(vec![0x80]), Item::U4(vec![1])])),
    };
    let reply = handler.handle_inbound(message).unwrap();
    assert!(matches!(reply.text, Some(Item::Bin(ref b)) if b == &vec![0]));
    assert!(handler.catalog.alarm(1).unwrap().enabled);
  }

  #[test]
  fn are_you_there_replies_with_empty_s1f2() {
    let handler = new_handler();
    let reply = handler.handle_inbound(Message { stream: 1, function: 1, w: true, text: None }).unwrap();
    assert_eq!((reply.stream, reply.function), (1, 2));
  }

  #[test]
  fn establish_communications_moves_to_communicating() {
    let handler = new_handler();
    handler.handle_inbound(Message { stream: 1, function: 13, w: true, text: None });
    assert!(handler.communication_state.is_communicating());
  }

  #[test]
  fn define_link_enable_round_trip() {
    let handler = new_handler();
    let define = Message {
      stream: 2, function: 33, w: true,
      text: Some(Item::List(vec![
        Item::U4(vec![1]),
        Item::List(vec![Item::List(vec![Item::U4(vec![1000]), Item::List(vec![Item::U4(vec![100])])])]),
      ])),
    };
    let reply = handler.handle_inbound(define).unwrap();
    assert!(matches!(reply.text, Some(Item::Bin(ref b)) if b == &vec![0]));

    let link = Message {
      stream: 2, function: 35, w: true,
      text: Some(Item::List(vec![
        Item::U4(vec![1]),
        Item::List(vec![Item::List(vec![Item::U4(vec![100025]), Item::List(vec![Item::U4(vec![1000])])])]),
      ])),
    };
    handler.handle_inbound(link);

    let enable = Message {
      stream: 2, function: 37, w: true,
      text: Some(Item::List(vec![Item::Bool(vec![true]), Item::List(vec![])])),
    };
    handler.handle_inbound(enable);

    let body = handler.trigger(100025).expect("linked and enabled");
    match body {
      Item::List(items) => assert_eq!(items.len(), 3),
      other => panic!("unexpected item: {other:?}"),
    }
  }

  #[test]
  fn unknown_remote_command_is_rejected_over_the_wire() {
    let handler = new_handler();
    let message = Message {
      stream: 2, function: 41, w: true,
      text: Some(Item::List(vec![Item::Ascii(b"BOGUS".to_vec()), Item::List(vec![])])),
    };
    let reply = handler.handle_inbound(message).unwrap();
    match reply.text {
      Some(Item::List(fields)) => assert!(matches!(&fields[0], Item::Bin(b) if b[0] == RemoteCommandAck::InvalidCommand as u8)),
      other => panic!("unexpected reply text: {other:?}"),
    }
  }
}
