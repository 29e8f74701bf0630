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

//! # GENERIC EQUIPMENT MODEL (GEM)
//!
//! This software is created by a third-party and not endorsed or supported by
//! SEMI.
//!
//! ---------------------------------------------------------------------------
//!
//! **Based on:**
//! - **[SEMI E30]-1102**
//!
//! ---------------------------------------------------------------------------
//!
//! GEM is the behavioral layer built on top of [SECS-II] messages carried
//! over [HSMS]: the equipment's status/data/equipment-constant variables,
//! collection events, the dynamic [report] engine that links them together,
//! alarms, remote commands, and the Communication/Control state machines
//! that govern when the equipment will talk to a host at all.
//!
//! This crate does not open sockets itself — [handler::Handler] consumes
//! decoded [secs_ii::Message]s and produces the [secs_ii::Message] replies,
//! leaving the actual HSMS session to the application (see the `example`
//! crate at the workspace root for a worked demonstration wiring a
//! [handler::Handler] to an [hsms::single::Client]).
//!
//! The catalog, state machines, report engine, alarm handling, and remote
//! command dispatch are deliberately kept free of callback-attribute magic:
//! application code hooks in via explicit `bind`/`subscribe` calls on
//! [callback::CallbackHandler]/[callback::EventProducer], or by implementing
//! [callback::CallbackTarget]/[callback::EventTarget] as a fallback target.
//!
//! [SEMI E30]: https://store-us.semi.org/products/e03000-semi-e30-generic-model-for-communications-and-control-of-manufacturing-equipment-gem
//! [SECS-II]:  secs_ii
//! [HSMS]:     hsms

pub mod callback;
pub mod predefined;
pub mod catalog;
pub mod comm_state;
pub mod control_state;
pub mod report;
pub mod alarm;
pub mod remote_command;
pub mod handler;

pub use callback::{CallbackHandler, CallbackTarget, EventProducer, EventTarget};
pub use catalog::Catalog;
pub use comm_state::{CommunicationState, CommunicationStateMachine};
pub use control_state::{ControlState, ControlStateMachine, RequestOnlineResult};
pub use handler::Handler;
pub use report::ReportEnablement;

/// ## ERROR
///
/// Failures this crate's callers need to handle explicitly: a malformed
/// [secs_ii::Item] where a well-formed one was required, an I/O failure from
/// the underlying [hsms] session, or a caller passing an `ALID` this
/// equipment never [defined][Catalog::define_alarm] — the latter a
/// programmer error, not a wire-driven ack, so it surfaces here instead of
/// as an ordinary SEMI E5 acknowledge code.
#[derive(Debug)]
pub enum Error {
  Item(secs_ii::Error),
  Hsms(std::io::Error),
  UnknownAlarm(u32),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Error::Item(e) => write!(f, "malformed SECS-II item: {e:?}"),
      Error::Hsms(e) => write!(f, "HSMS session error: {e}"),
      Error::UnknownAlarm(id) => write!(f, "unknown alarm id: {id}"),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Hsms(e) => Some(e),
      Error::Item(_) | Error::UnknownAlarm(_) => None,
    }
  }
}

impl From<secs_ii::Error> for Error {
  fn from(e: secs_ii::Error) -> Self {
    Error::Item(e)
  }
}

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    Error::Hsms(e)
  }
}
