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

//! # CONTROL STATE MACHINE
//! **Based on SEMI E30§6.4 (GEM Control State Model)**
//!
//! Governs who may issue process-affecting remote commands: the host
//! (Online/Remote), a local operator (Online/Local), or nobody
//! (Equipment Offline, Host Offline).
//!
//! ```text
//!                 Init
//!                  |
//!                  v
//!          EquipmentOffline <--------- RequestOffline (any online state)
//!            |          ^
//!  switch on |          | switch off
//!            v          |
//!          HostOffline --+
//!            |
//!  RequestOnline (S1F17), host grants
//!            v
//!     +-- OnlineLocal <--> OnlineRemote --+
//!     |   (operator switch)               |
//!     +------------------------------------+
//! ```
//!
//! SEMI E30 numbers the online/offline states 1 through 5 for reporting
//! through [`CONTROL_STATE`][crate::predefined::CONTROL_STATE]; [as_id]
//! returns that numbering.

use std::sync::atomic::{AtomicU8, Ordering::SeqCst};

/// ## CONTROL STATE
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlState {
  Init = 1,
  EquipmentOffline = 2,
  HostOffline = 3,
  OnlineLocal = 4,
  OnlineRemote = 5,
}

impl ControlState {
  fn from_u8(value: u8) -> Self {
    match value {
      1 => Self::Init,
      2 => Self::EquipmentOffline,
      3 => Self::HostOffline,
      4 => Self::OnlineLocal,
      _ => Self::OnlineRemote,
    }
  }

  /// The value reported as [`CONTROL_STATE`][crate::predefined::CONTROL_STATE].
  pub fn as_id(self) -> u8 {
    self as u8
  }

  pub fn is_online(self) -> bool {
    matches!(self, Self::OnlineLocal | Self::OnlineRemote)
  }
}

/// Outcome of [ControlStateMachine::request_online], naming SEMI E30's
/// ONLACK values: 0 (Granted), 2 (AlreadyOnline); any other denial
/// (requested while still Equipment Offline / Init) reports `Denied`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestOnlineResult {
  Granted,
  AlreadyOnline,
  Denied,
}

impl RequestOnlineResult {
  /// The `ONLACK` byte sent in S1F18.
  pub fn onlack(self) -> u8 {
    match self {
      Self::Granted => 0,
      Self::Denied => 1,
      Self::AlreadyOnline => 2,
    }
  }
}

#[derive(Default)]
pub struct ControlStateMachine {
  state: AtomicU8,
}

impl ControlStateMachine {
  pub fn new() -> Self {
    Self { state: AtomicU8::new(ControlState::Init as u8) }
  }

  pub fn state(&self) -> ControlState {
    ControlState::from_u8(self.state.load(SeqCst))
  }

  fn set(&self, state: ControlState) {
    self.state.store(state as u8, SeqCst);
  }

  /// Equipment power-on / initialization complete: starts Offline, in the
  /// local operator's hands until an S1F17 Request On-Line arrives.
  pub fn initialize(&self) {
    self.set(ControlState::EquipmentOffline);
  }

  /// S1F15 Request OFF-LINE: valid from any online state, always granted.
  pub fn request_offline(&self) {
    self.set(ControlState::EquipmentOffline);
  }

  /// S1F17 Request ON-LINE: granted only from [ControlState::HostOffline],
  /// entering [ControlState::OnlineRemote]. Already being online is reported
  /// distinctly from any other denial per SEMI E30's ONLACK semantics.
  pub fn request_online(&self) -> RequestOnlineResult {
    match self.state() {
      ControlState::HostOffline => {
        self.set(ControlState::OnlineRemote);
        RequestOnlineResult::Granted
      },
      state if state.is_online() => RequestOnlineResult::AlreadyOnline,
      _ => RequestOnlineResult::Denied,
    }
  }

  /// Local operator switches the equipment from Equipment Offline to Host
  /// Offline, making it available for the host to bring online.
  pub fn switch_online(&self) {
    if self.state() == ControlState::EquipmentOffline {
      self.set(ControlState::HostOffline);
    }
  }

  /// Local operator takes local control back from the host.
  pub fn switch_local(&self) {
    if self.state() == ControlState::OnlineRemote {
      self.set(ControlState::OnlineLocal);
    }
  }

  /// Local operator returns control to the host.
  pub fn switch_remote(&self) {
    if self.state() == ControlState::OnlineLocal {
      self.set(ControlState::OnlineRemote);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn online_request_denied_while_equipment_offline() {
    let machine = ControlStateMachine::new();
    machine.initialize();
    assert_eq!(machine.request_online(), RequestOnlineResult::Denied);
    assert_eq!(machine.state(), ControlState::EquipmentOffline);
  }

  #[test]
  fn online_request_granted_from_host_offline() {
    let machine = ControlStateMachine::new();
    machine.initialize();
    machine.switch_online();
    assert_eq!(machine.state(), ControlState::HostOffline);
    assert_eq!(machine.request_online(), RequestOnlineResult::Granted);
    assert_eq!(machine.state(), ControlState::OnlineRemote);
  }

  #[test]
  fn online_request_already_online_leaves_state_unchanged() {
    let machine = ControlStateMachine::new();
    machine.initialize();
    machine.switch_online();
    machine.request_online();
    assert_eq!(machine.request_online(), RequestOnlineResult::AlreadyOnline);
    assert_eq!(machine.state(), ControlState::OnlineRemote);
    assert_eq!(RequestOnlineResult::AlreadyOnline.onlack(), 2);
  }

  #[test]
  fn local_remote_toggle() {
    let machine = ControlStateMachine::new();
    machine.initialize();
    machine.switch_online();
    machine.request_online();
    machine.switch_local();
    assert_eq!(machine.state(), ControlState::OnlineLocal);
    machine.switch_remote();
    assert_eq!(machine.state(), ControlState::OnlineRemote);
  }
}
