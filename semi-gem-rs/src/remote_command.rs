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

//! # REMOTE COMMAND DISPATCH
//! **Based on SEMI E30§10 (S2F41/42), secsgem's `GemHostHandler.send_remote_command`
//! and `GemEquipmentHandler._on_s02f41`**
//!
//! S2F41 Host Command Send carries a command name (`RCMD`) and a list of
//! `(CPNAME, CPVAL)` parameter pairs; S2F42 replies with a command-level
//! `HCACK` plus a per-parameter `CPACK` so the host can tell exactly which
//! parameter was rejected. `START` and `STOP` are reserved command names in
//! this implementation: they do not need to be registered in the
//! [Catalog]'s remote command table, and their completion fires the fixed
//! [`CMD_START_DONE`][crate::predefined::CMD_START_DONE] /
//! [`CMD_STOP_DONE`][crate::predefined::CMD_STOP_DONE] collection events
//! rather than a per-command `completion_event`.

use crate::catalog::{Catalog, RemoteCommandAck};
use crate::predefined::{CMD_START_DONE, CMD_STOP_DONE};
use std::collections::HashMap;

/// Per-parameter acknowledge code for S2F42.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterAck {
  Ok = 0,
  Invalid = 1,
}

/// Outcome of [dispatch]: the command-level `HCACK`, the per-parameter
/// `CPACK` list in the same order as the caller's parameters, and the
/// collection event (if any) to trigger now that the command has completed.
/// A [RemoteCommandAck::FinishLater] outcome leaves `completion_event` unset
/// here — the equipment-specific code is expected to fire that command's
/// configured event itself once the long-running work finishes.
pub struct DispatchResult {
  pub ack: RemoteCommandAck,
  pub parameter_acks: Vec<(String, ParameterAck)>,
  pub completion_event: Option<u32>,
}

/// ## DISPATCH REMOTE COMMAND
/// **Based on SEMI E30§10.1**
pub fn dispatch(catalog: &Catalog, name: &str, parameters: &HashMap<String, String>) -> DispatchResult {
  match name {
    "START" => DispatchResult { ack: RemoteCommandAck::Ok, parameter_acks: vec![], completion_event: Some(CMD_START_DONE) },
    "STOP" => DispatchResult { ack: RemoteCommandAck::Ok, parameter_acks: vec![], completion_event: Some(CMD_STOP_DONE) },
    _ => {
      let Some(command) = catalog.remote_command(name) else {
        return DispatchResult { ack: RemoteCommandAck::InvalidCommand, parameter_acks: vec![], completion_event: None };
      };

      let mut parameter_acks = Vec::new();
      let mut any_invalid = false;
      for required in &command.required_parameters {
        let ack = if parameters.contains_key(required) { ParameterAck::Ok } else { any_invalid = true; ParameterAck::Invalid };
        parameter_acks.push((required.clone(), ack));
      }
      for supplied in parameters.keys() {
        if !command.required_parameters.contains(supplied) {
          any_invalid = true;
          parameter_acks.push((supplied.clone(), ParameterAck::Invalid));
        }
      }
      if any_invalid {
        return DispatchResult { ack: RemoteCommandAck::ParameterInvalid, parameter_acks, completion_event: None };
      }

      let ack = (command.body)(parameters);
      let completion_event = match ack {
        RemoteCommandAck::Ok => command.completion_event,
        _ => None,
      };
      DispatchResult { ack, parameter_acks, completion_event }
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::RemoteCommand;
  use std::sync::Arc;

  #[test]
  fn unknown_command_rejected() {
    let catalog = Catalog::new();
    let result = dispatch(&catalog, "FOO", &HashMap::new());
    assert_eq!(result.ack, RemoteCommandAck::InvalidCommand);
  }

  #[test]
  fn missing_required_parameter_rejected() {
    let catalog = Catalog::new();
    catalog.define_remote_command(RemoteCommand {
      name: "PP_SELECT".into(),
      required_parameters: vec!["PPID".into()],
      body: Arc::new(|_| RemoteCommandAck::Ok),
      completion_event: None,
    });
    let result = dispatch(&catalog, "PP_SELECT", &HashMap::new());
    assert_eq!(result.ack, RemoteCommandAck::ParameterInvalid);
  }

  #[test]
  fn reserved_start_fires_fixed_event() {
    let catalog = Catalog::new();
    let result = dispatch(&catalog, "START", &HashMap::new());
    assert_eq!(result.ack, RemoteCommandAck::Ok);
    assert_eq!(result.completion_event, Some(CMD_START_DONE));
  }

  #[test]
  fn finish_later_suppresses_completion_event() {
    let catalog = Catalog::new();
    catalog.define_remote_command(RemoteCommand {
      name: "ETCH".into(),
      required_parameters: vec![],
      body: Arc::new(|_| RemoteCommandAck::FinishLater),
      completion_event: Some(500),
    });
    let result = dispatch(&catalog, "ETCH", &HashMap::new());
    assert_eq!(result.ack, RemoteCommandAck::FinishLater);
    assert_eq!(result.completion_event, None);
  }
}
