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

//! # COMMUNICATION STATE MACHINE
//! **Based on SEMI E30§6.3 (GEM Communication State Model)**
//!
//! Tracks whether the host and equipment have completed the Establish
//! Communications handshake (S1F13/S1F14) independently of the lower HSMS
//! Selection State: HSMS Selected only means a TCP session exists, not that
//! either side is ready to exchange application-level messages.
//!
//! ```text
//!            connect               S1F14 COMMACK=0
//!   DISABLED -------> WAIT-CR-FROM-HOST -------------> COMMUNICATING
//!                           |    ^                           |
//!                 timeout   |    | timeout elapses            | disconnect
//!                elapses    v    |                            v
//!                       WAIT-DELAY ------------------------ DISABLED
//! ```
//!
//! WAIT-DELAY's timeout is the [`ESTABLISH_COMMUNICATIONS_TIMEOUT`]
//! equipment constant; on expiry the state machine loops back to
//! WAIT-CR-FROM-HOST and retries indefinitely, exactly as SEMI E30
//! prescribes ("until Establish Communications succeeds").
//!
//! [`ESTABLISH_COMMUNICATIONS_TIMEOUT`]: crate::predefined::ESTABLISH_COMMUNICATIONS_TIMEOUT

use std::sync::atomic::{AtomicU8, Ordering::SeqCst};

/// ## COMMUNICATION STATE
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommunicationState {
  Disabled = 0,
  WaitCrFromHost = 1,
  WaitDelay = 2,
  Communicating = 3,
}

impl CommunicationState {
  fn from_u8(value: u8) -> Self {
    match value {
      0 => Self::Disabled,
      1 => Self::WaitCrFromHost,
      2 => Self::WaitDelay,
      _ => Self::Communicating,
    }
  }
}

/// Thread-safe holder for the current [CommunicationState]; transitions are
/// driven by the handler's receive loop and its T3/retry timer, not by this
/// type itself, which only stores and reports the current state.
#[derive(Default)]
pub struct CommunicationStateMachine {
  state: AtomicU8,
}

impl CommunicationStateMachine {
  pub fn new() -> Self {
    Self { state: AtomicU8::new(CommunicationState::Disabled as u8) }
  }

  pub fn state(&self) -> CommunicationState {
    CommunicationState::from_u8(self.state.load(SeqCst))
  }

  fn set(&self, state: CommunicationState) {
    self.state.store(state as u8, SeqCst);
  }

  /// HSMS connection established: enter WAIT-CR-FROM-HOST and the equipment
  /// may now send S1F13.
  pub fn enable(&self) {
    self.set(CommunicationState::WaitCrFromHost);
  }

  /// The host's S1F14 COMMACK granted communications.
  pub fn establish_communications_succeeded(&self) {
    self.set(CommunicationState::Communicating);
  }

  /// The host's S1F14 COMMACK denied communications, or no reply arrived
  /// before T3 elapsed: wait [`ESTABLISH_COMMUNICATIONS_TIMEOUT`][super::predefined::ESTABLISH_COMMUNICATIONS_TIMEOUT]
  /// before retrying.
  pub fn establish_communications_failed(&self) {
    self.set(CommunicationState::WaitDelay);
  }

  /// WAIT-DELAY's retry timer elapsed: try S1F13 again.
  pub fn retry(&self) {
    self.set(CommunicationState::WaitCrFromHost);
  }

  /// The HSMS connection dropped.
  pub fn disable(&self) {
    self.set(CommunicationState::Disabled);
  }

  pub fn is_communicating(&self) -> bool {
    self.state() == CommunicationState::Communicating
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn happy_path_reaches_communicating() {
    let machine = CommunicationStateMachine::new();
    assert_eq!(machine.state(), CommunicationState::Disabled);
    machine.enable();
    assert_eq!(machine.state(), CommunicationState::WaitCrFromHost);
    machine.establish_communications_succeeded();
    assert!(machine.is_communicating());
  }

  #[test]
  fn failure_loops_back_through_wait_delay() {
    let machine = CommunicationStateMachine::new();
    machine.enable();
    machine.establish_communications_failed();
    assert_eq!(machine.state(), CommunicationState::WaitDelay);
    machine.retry();
    assert_eq!(machine.state(), CommunicationState::WaitCrFromHost);
  }
}
