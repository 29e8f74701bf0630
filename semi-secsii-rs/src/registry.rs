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

//! # STREAM/FUNCTION REGISTRY
//!
//! A static catalog of [FunctionDescriptor]s, one per stream/function this
//! crate exercises, keyed by `(stream, function)`. Where the standard
//! overloads a single stream/function with two distinct bodies depending on
//! which side sends it (S1F13/S1F14's Communication Request), the direction
//! is folded into the key.
//!
//! The registry exists so that a caller which has only a wire-level
//! `(stream, function, bytes)` triple — a generic trace tool, or the
//! [callback fabric][crate] dispatch path before it has downcast to a
//! specific message type — can answer "is this a known message, does it
//! require a reply, may it span multiple blocks" without a giant match
//! statement of its own. [decode] resolves a descriptor and parses the body
//! against its [Template]; the concrete per-message types in
//! [messages][crate::messages] remain the ergonomic, typed way to build and
//! read a particular message once the stream/function is known statically.

use crate::template::{ItemKind, Template};
use crate::{Item, Message};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// ## MESSAGE DIRECTION
///
/// Which side of the H/E connection *sends* a given body shape. Most
/// stream/functions have a single shape regardless of direction; S1F13 and
/// S1F14 (Communication Request/Acknowledge) are the exception, carrying no
/// data from the host and `(MDLN, SOFTREV)` from the equipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
  ToHost,
  ToEquipment,
  /// Sent identically regardless of which side originates it.
  Either,
}

/// ## FUNCTION DESCRIPTOR
///
/// An immutable record describing one stream/function this catalog
/// recognizes.
#[derive(Clone, Debug)]
pub struct FunctionDescriptor {
  pub stream: u8,
  pub function: u8,
  pub name: &'static str,
  /// W-bit expected on the primary message (reply required by the sender).
  pub w: bool,
  pub direction: Direction,
  pub has_reply: bool,
  pub is_multi_block: bool,
  pub template: Template,
}

/// ## REGISTRY ERROR
#[derive(Clone, Debug, PartialEq)]
pub enum RegistryError {
  /// No descriptor is registered for this `(stream, function)`.
  UnknownFunction { stream: u8, function: u8 },
  /// The message's `w` bit did not match the descriptor.
  WrongReplyBit { expected: bool, found: bool },
  /// The body failed template validation.
  Template(crate::template::TemplateError),
  /// The body could not be parsed as an [Item] at all.
  Malformed,
}

fn key(stream: u8, function: u8) -> (u8, u8) {
  (stream, function)
}

macro_rules! descriptor {
  ($map:expr, $stream:expr, $function:expr, $name:expr, $w:expr, $direction:expr, $has_reply:expr, $multi_block:expr, $template:expr) => {
    $map.insert(key($stream, $function), FunctionDescriptor {
      stream: $stream,
      function: $function,
      name: $name,
      w: $w,
      direction: $direction,
      has_reply: $has_reply,
      is_multi_block: $multi_block,
      template: $template,
    });
  };
}

fn u4_leaf() -> Template { Template::leaf(&[ItemKind::U1, ItemKind::U2, ItemKind::U4, ItemKind::U8, ItemKind::Ascii]) }
fn ascii_leaf() -> Template { Template::leaf(&[ItemKind::Ascii]) }
fn any_leaf() -> Template {
  Template::leaf(&[
    ItemKind::Bin, ItemKind::Bool, ItemKind::Ascii, ItemKind::Jis8,
    ItemKind::I1, ItemKind::I2, ItemKind::I4, ItemKind::I8,
    ItemKind::U1, ItemKind::U2, ItemKind::U4, ItemKind::U8,
    ItemKind::F4, ItemKind::F8,
  ])
}

/// The full registered catalog, built once on first access.
pub static REGISTRY: Lazy<HashMap<(u8, u8), FunctionDescriptor>> = Lazy::new(|| {
  let mut m = HashMap::new();

  // ---- Stream 1: Equipment Status ----
  descriptor!(m, 1, 1, "Are You There", true, Direction::Either, true, false,
    Template::List { name: None, children: vec![] });
  descriptor!(m, 1, 2, "On Line Data", false, Direction::Either, false, false,
    Template::List { name: None, children: vec![] });
  descriptor!(m, 1, 13, "Establish Communications Request", true, Direction::Either, true, false,
    Template::List { name: None, children: vec![] });
  descriptor!(m, 1, 14, "Establish Communications Request Acknowledge", false, Direction::Either, false, false,
    Template::List { name: None, children: vec![
      Template::leaf(&[ItemKind::Bin]).named("COMMACK"),
      // Empty from the host, (MDLN, SOFTREV) from the equipment.
      Template::RepeatingGroup { name: "DATA", child: Box::new(ascii_leaf()), count: None },
    ] });
  descriptor!(m, 1, 15, "Request OFF-LINE", true, Direction::ToEquipment, true, false,
    Template::List { name: None, children: vec![] });
  descriptor!(m, 1, 16, "OFF-LINE Acknowledge", false, Direction::ToHost, false, false,
    Template::leaf(&[ItemKind::Bin]).named("OFLACK"));
  descriptor!(m, 1, 17, "Request ON-LINE", true, Direction::ToEquipment, true, false,
    Template::List { name: None, children: vec![] });
  descriptor!(m, 1, 18, "ON-LINE Acknowledge", false, Direction::ToHost, false, false,
    Template::leaf(&[ItemKind::Bin]).named("ONLACK"));

  // ---- Stream 2: Equipment Control ----
  descriptor!(m, 2, 13, "Equipment Constant Request", true, Direction::ToEquipment, true, false,
    Template::RepeatingGroup { name: "ECID", child: Box::new(u4_leaf()), count: None });
  descriptor!(m, 2, 14, "Equipment Constant Data", false, Direction::ToHost, false, true,
    Template::RepeatingGroup { name: "ECV", child: Box::new(any_leaf()), count: None });
  descriptor!(m, 2, 15, "New Equipment Constant Send", true, Direction::ToEquipment, true, true,
    Template::RepeatingGroup { name: "EC", child: Box::new(Template::List { name: None, children: vec![
      u4_leaf().named("ECID"),
      any_leaf().named("ECV"),
    ] }), count: None });
  descriptor!(m, 2, 16, "New Equipment Constant Acknowledge", false, Direction::ToHost, false, false,
    Template::leaf(&[ItemKind::Bin]).named("EAC"));
  descriptor!(m, 2, 29, "Equipment Constant Namelist Request", true, Direction::ToEquipment, true, false,
    Template::RepeatingGroup { name: "ECID", child: Box::new(u4_leaf()), count: None });
  descriptor!(m, 2, 30, "Equipment Constant Namelist", false, Direction::ToHost, false, true,
    Template::RepeatingGroup { name: "EC", child: Box::new(Template::List { name: None, children: vec![
      u4_leaf().named("ECID"),
      ascii_leaf().named("ECNAME"),
      any_leaf().named("ECMIN"),
      any_leaf().named("ECMAX"),
      ascii_leaf().named("UNITS"),
    ] }), count: None });
  descriptor!(m, 2, 33, "Define Report", true, Direction::ToEquipment, true, true,
    Template::List { name: None, children: vec![
      u4_leaf().named("DATAID"),
      Template::RepeatingGroup { name: "DATA", child: Box::new(Template::List { name: None, children: vec![
        u4_leaf().named("RPTID"),
        Template::RepeatingGroup { name: "VID", child: Box::new(u4_leaf()), count: None },
      ] }), count: None },
    ] });
  descriptor!(m, 2, 34, "Define Report Acknowledge", false, Direction::ToHost, false, false,
    Template::leaf(&[ItemKind::Bin]).named("DRACK"));
  descriptor!(m, 2, 35, "Link Event Report", true, Direction::ToEquipment, true, true,
    Template::List { name: None, children: vec![
      u4_leaf().named("DATAID"),
      Template::RepeatingGroup { name: "DATA", child: Box::new(Template::List { name: None, children: vec![
        u4_leaf().named("CEID"),
        Template::RepeatingGroup { name: "RPTID", child: Box::new(u4_leaf()), count: None },
      ] }), count: None },
    ] });
  descriptor!(m, 2, 36, "Link Event Report Acknowledge", false, Direction::ToHost, false, false,
    Template::leaf(&[ItemKind::Bin]).named("LRACK"));
  descriptor!(m, 2, 37, "Enable/Disable Event Report", true, Direction::ToEquipment, true, false,
    Template::List { name: None, children: vec![
      Template::leaf(&[ItemKind::Bool]).named("CEED"),
      Template::RepeatingGroup { name: "CEID", child: Box::new(u4_leaf()), count: None },
    ] });
  descriptor!(m, 2, 38, "Enable/Disable Event Report Acknowledge", false, Direction::ToHost, false, false,
    Template::leaf(&[ItemKind::Bin]).named("ERACK"));
  descriptor!(m, 2, 41, "Host Command Send", true, Direction::ToEquipment, true, true,
    Template::List { name: None, children: vec![
      ascii_leaf().named("RCMD"),
      Template::RepeatingGroup { name: "PARAMS", child: Box::new(Template::List { name: None, children: vec![
        ascii_leaf().named("CPNAME"),
        any_leaf().named("CPVAL"),
      ] }), count: None },
    ] });
  descriptor!(m, 2, 42, "Host Command Acknowledge", false, Direction::ToHost, false, true,
    Template::List { name: None, children: vec![
      Template::leaf(&[ItemKind::Bin]).named("HCACK"),
      Template::RepeatingGroup { name: "PARAMS", child: Box::new(Template::List { name: None, children: vec![
        ascii_leaf().named("CPNAME"),
        Template::leaf(&[ItemKind::Bin]).named("CPACK"),
      ] }), count: None },
    ] });

  // ---- Stream 3: Material Status ----
  descriptor!(m, 3, 1, "Material Status Request", true, Direction::ToEquipment, true, false,
    Template::leaf(&[ItemKind::Bin]).named("MF"));
  descriptor!(m, 3, 2, "Material Status Data", false, Direction::ToHost, false, false,
    Template::List { name: None, children: vec![
      Template::RepeatingGroup { name: "LOC_I", child: Box::new(Template::List { name: None, children: vec![
        Template::leaf(&[ItemKind::Bin]).named("LOC"),
        ascii_leaf().named("MID"),
      ] }), count: None },
      Template::RepeatingGroup { name: "LOC_O", child: Box::new(Template::List { name: None, children: vec![
        Template::leaf(&[ItemKind::Bin]).named("LOC"),
        ascii_leaf().named("MID"),
      ] }), count: None },
    ] });

  // ---- Stream 5: Alarms ----
  descriptor!(m, 5, 1, "Alarm Report Send", true, Direction::ToHost, true, false,
    Template::List { name: None, children: vec![
      Template::leaf(&[ItemKind::Bin]).named("ALCD"),
      u4_leaf().named("ALID"),
      ascii_leaf().named("ALTX"),
    ] });
  descriptor!(m, 5, 2, "Alarm Report Acknowledge", false, Direction::ToEquipment, false, false,
    Template::leaf(&[ItemKind::Bin]).named("ACKC5"));
  descriptor!(m, 5, 3, "Enable/Disable Alarm Send", true, Direction::ToEquipment, true, false,
    Template::List { name: None, children: vec![
      Template::leaf(&[ItemKind::Bin]).named("ALED"),
      u4_leaf().named("ALID"),
    ] });
  descriptor!(m, 5, 4, "Enable/Disable Alarm Acknowledge", false, Direction::ToHost, false, false,
    Template::leaf(&[ItemKind::Bin]).named("ACKC5"));
  descriptor!(m, 5, 5, "List Alarms Request", true, Direction::ToEquipment, true, false,
    Template::RepeatingGroup { name: "ALID", child: Box::new(u4_leaf()), count: None });
  descriptor!(m, 5, 6, "List Alarms Data", false, Direction::ToHost, false, true,
    Template::RepeatingGroup { name: "ALARM", child: Box::new(Template::List { name: None, children: vec![
      Template::leaf(&[ItemKind::Bin]).named("ALCD"),
      u4_leaf().named("ALID"),
      ascii_leaf().named("ALTX"),
    ] }), count: None });
  descriptor!(m, 5, 7, "List Enabled Alarms Request", true, Direction::ToEquipment, true, false,
    Template::List { name: None, children: vec![] });
  descriptor!(m, 5, 8, "List Enabled Alarms Data", false, Direction::ToHost, false, true,
    Template::RepeatingGroup { name: "ALARM", child: Box::new(Template::List { name: None, children: vec![
      Template::leaf(&[ItemKind::Bin]).named("ALCD"),
      u4_leaf().named("ALID"),
      ascii_leaf().named("ALTX"),
    ] }), count: None });

  // ---- Stream 6: Data Collection ----
  descriptor!(m, 6, 11, "Event Report Send", true, Direction::ToHost, true, true,
    Template::List { name: None, children: vec![
      u4_leaf().named("DATAID"),
      u4_leaf().named("CEID"),
      Template::RepeatingGroup { name: "RPT", child: Box::new(Template::List { name: None, children: vec![
        u4_leaf().named("RPTID"),
        Template::RepeatingGroup { name: "V", child: Box::new(any_leaf()), count: None },
      ] }), count: None },
    ] });
  descriptor!(m, 6, 12, "Event Report Acknowledge", false, Direction::ToEquipment, false, false,
    Template::leaf(&[ItemKind::Bin]).named("ACKC6"));
  descriptor!(m, 6, 15, "Event Report Request", true, Direction::ToEquipment, true, false,
    u4_leaf().named("CEID"));
  descriptor!(m, 6, 16, "Event Report Data", false, Direction::ToHost, false, true,
    Template::List { name: None, children: vec![
      u4_leaf().named("DATAID"),
      Template::RepeatingGroup { name: "RPT", child: Box::new(Template::List { name: None, children: vec![
        u4_leaf().named("RPTID"),
        Template::RepeatingGroup { name: "V", child: Box::new(any_leaf()), count: None },
      ] }), count: None },
    ] });

  // ---- Stream 7: Process Program Management ----
  descriptor!(m, 7, 17, "Delete Process Program Send", true, Direction::ToEquipment, true, false,
    Template::RepeatingGroup { name: "PPID", child: Box::new(ascii_leaf()), count: None });
  descriptor!(m, 7, 18, "Delete Process Program Acknowledge", false, Direction::ToHost, false, false,
    Template::leaf(&[ItemKind::Bin]).named("ACKC7"));
  descriptor!(m, 7, 19, "Current Equipment Process Program Dir. Request", true, Direction::ToEquipment, true, false,
    Template::List { name: None, children: vec![] });
  descriptor!(m, 7, 20, "Current Equipment Process Program Dir. Data", false, Direction::ToHost, false, true,
    Template::RepeatingGroup { name: "PPID", child: Box::new(ascii_leaf()), count: None });

  // ---- Stream 10: Terminal Services ----
  descriptor!(m, 10, 1, "Terminal Request", true, Direction::ToHost, true, false,
    Template::List { name: None, children: vec![
      Template::leaf(&[ItemKind::Bin]).named("TID"),
      ascii_leaf().named("TEXT"),
    ] });
  descriptor!(m, 10, 2, "Terminal Acknowledge", false, Direction::ToEquipment, false, false,
    Template::leaf(&[ItemKind::Bin]).named("ACK10"));

  m
});

/// Resolve the [FunctionDescriptor] for `(stream, function)`, if registered.
pub fn lookup(stream: u8, function: u8) -> Option<&'static FunctionDescriptor> {
  REGISTRY.get(&key(stream, function))
}

/// Decode a raw body against the descriptor registered for `(stream,
/// function)`, returning the generic [Message] and a reference to the
/// descriptor used.
pub fn decode(
  stream: u8,
  function: u8,
  w: bool,
  body: Vec<u8>,
) -> Result<(Message, &'static FunctionDescriptor), RegistryError> {
  let descriptor = lookup(stream, function)
    .ok_or(RegistryError::UnknownFunction { stream, function })?;

  let text = if body.is_empty() {
    None
  } else {
    Some(Item::try_from(body).map_err(|_| RegistryError::Malformed)?)
  };

  if let Some(item) = &text {
    descriptor.template.validate(item).map_err(RegistryError::Template)?;
  }

  Ok((Message { stream, function, w, text }, descriptor))
}

/// Inverse of [decode]: validate `message.text` against its registered
/// template and serialize it to wire bytes.
pub fn encode(message: Message) -> Result<Vec<u8>, RegistryError> {
  let descriptor = lookup(message.stream, message.function)
    .ok_or(RegistryError::UnknownFunction { stream: message.stream, function: message.function })?;
  if let Some(item) = &message.text {
    descriptor.template.validate(item).map_err(RegistryError::Template)?;
  }
  Ok(match message.text {
    Some(item) => item.into(),
    None => vec![],
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resolves_known_function() {
    let descriptor = lookup(1, 1).expect("S1F1 must be registered");
    assert_eq!(descriptor.name, "Are You There");
    assert!(descriptor.has_reply);
  }

  #[test]
  fn equipment_constant_namelist_registered() {
    let descriptor = lookup(2, 30).expect("S2F30 must be registered");
    assert!(descriptor.is_multi_block);
    assert!(!descriptor.has_reply);
  }

  #[test]
  fn unknown_function_rejected() {
    assert!(lookup(99, 99).is_none());
    let err = decode(99, 99, true, vec![]).unwrap_err();
    assert_eq!(err, RegistryError::UnknownFunction { stream: 99, function: 99 });
  }

  #[test]
  fn offline_ack_round_trips() {
    let body: Vec<u8> = Item::bin(0).into();
    let (message, descriptor) = decode(1, 16, false, body.clone()).unwrap();
    assert_eq!(descriptor.stream, 1);
    let re_encoded = encode(message).unwrap();
    assert_eq!(re_encoded, body);
  }
}
