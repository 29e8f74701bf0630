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

//! # HIGH-SPEED SECS MESSAGE SERVICES (HSMS)
//!
//! This software is created by a third-party and not endorsed or supported by
//! SEMI.
//!
//! ---------------------------------------------------------------------------
//!
//! **Based on:**
//! - **[SEMI E37]-1109**
//! - **[SEMI E37].1-0702**
//!
//! ---------------------------------------------------------------------------
//!
//! HSMS is a protocol designed to facilitate the reliable transmission of
//! [SECS-II] messages between semiconductor equipment over TCP/IP.
//!
//! The functionality of the protocol is divided into three layers:
//!
//! - [Primitive Services][primitive], which manage the TCP/IP connection and
//!   the framing of messages into properly headered blocks.
//! - [Generic Services][generic], which manage the Select/Deselect/Linktest
//!   control procedures, the timers which bound them, and the correlation of
//!   outgoing transactions with their replies.
//! - [Single Selected-Session Services][single], which restrict the protocol
//!   to the common case of a single host/equipment pair in communication.
//!
//! [SEMI E37]:  https://store-us.semi.org/products/e03700-semi-e37-high-speed-secs-message-services-hsms-generic-services
//! [SECS-II]:   secs_ii

pub mod primitive;
pub mod generic;
pub mod single;

pub use primitive::ConnectionMode;
pub use generic::{Client, ParameterSettings};
pub use single::{Client as SingleClient};

/// ## PRESENTATION TYPE
/// **Based on SEMI E37-1109§8.2.6.4**
///
/// Defines the Presentation Layer content of [Primitive Message Text].
///
/// Values 1-127 are reserved for Subsidiary Standards.
///
/// Values 128-255 are reserved and may not be used.
///
/// [Primitive Message Text]: primitive::PrimitiveMessage::text
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PresentationType {
  /// ### SECS II ENCODING
  ///
  /// Denotes an HSMS Message which carries a [SECS-II] formatted Data
  /// Message body.
  ///
  /// [SECS-II]: secs_ii
  SecsII = 0,
}
