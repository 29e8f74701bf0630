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

//! # STREAM 5: EXCEPTION HANDLING
//! **Based on SEMI E5§10.9**
//!
//! ---------------------------------------------------------------------------
//!
//! [Message]s which deal with binary and analog equipment exceptions,
//! classified as Alarms.
//!
//! [Message]: crate::Message

use crate::*;
use crate::Error::*;
use crate::items::*;

/// ## S5F0
///
/// **Abort Transaction**
///
/// - **SINGLE-BLOCK**
/// - **HOST <-> EQUIPMENT**
/// - **REPLY FORBIDDEN**
///
/// ---------------------------------------------------------------------------
///
/// Used in lieu of an expected reply to abort a transaction.
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// Header only.
pub struct Abort;
message_headeronly!{Abort, false, 5, 0}

/// ## S5F1
///
/// **Alarm Report Send (AR)**
///
/// - **SINGLE-BLOCK**
/// - **HOST <- EQUIPMENT**
/// - **REPLY REQUIRED**
///
/// ---------------------------------------------------------------------------
///
/// Report the set or clear transition of an alarm condition.
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// - List - 3
///    1. [ALCD]
///    2. [ALID]
///    3. [ALTX]
///
/// [ALCD]: AlarmCode
/// [ALID]: AlarmID
/// [ALTX]: AlarmText
pub struct AlarmReportSend(pub (AlarmCode, AlarmID, AlarmText));
message_data!{AlarmReportSend, true, 5, 1}

/// ## S5F2
///
/// **Alarm Report Acknowledge (ARA)**
///
/// - **SINGLE-BLOCK**
/// - **HOST -> EQUIPMENT**
/// - **REPLY FORBIDDEN**
///
/// ---------------------------------------------------------------------------
///
/// Acknowledge receipt of [S5F1].
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// - [ACKC5]
///
/// [S5F1]:  AlarmReportSend
/// [ACKC5]: AcknowledgeCode5
pub struct AlarmReportAcknowledge(pub AcknowledgeCode5);
message_data!{AlarmReportAcknowledge, false, 5, 2}

/// ## S5F3
///
/// **Enable/Disable Alarm Send (EAC)**
///
/// - **SINGLE-BLOCK**
/// - **HOST -> EQUIPMENT**
/// - **REPLY REQUIRED**
///
/// ---------------------------------------------------------------------------
///
/// Enable or disable reporting of the named alarm.
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// - List - 2
///    1. [ALED]
///    2. [ALID]
///
/// [ALED]: AlarmEnableDisable
/// [ALID]: AlarmID
pub struct EnableDisableAlarmSend(pub (AlarmEnableDisable, AlarmID));
message_data!{EnableDisableAlarmSend, true, 5, 3}

/// ## S5F4
///
/// **Enable/Disable Alarm Acknowledge (EAA)**
///
/// - **SINGLE-BLOCK**
/// - **HOST <- EQUIPMENT**
/// - **REPLY FORBIDDEN**
///
/// ---------------------------------------------------------------------------
///
/// Acknowledge or error for [S5F3].
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// - [ACKC5]
///
/// [S5F3]:  EnableDisableAlarmSend
/// [ACKC5]: AcknowledgeCode5
pub struct EnableDisableAlarmAcknowledge(pub AcknowledgeCode5);
message_data!{EnableDisableAlarmAcknowledge, false, 5, 4}

/// ## S5F5
///
/// **List Alarms Request (LAR)**
///
/// - **SINGLE-BLOCK**
/// - **HOST -> EQUIPMENT**
/// - **REPLY REQUIRED**
///
/// ---------------------------------------------------------------------------
///
/// Request the status of the named alarms. An empty list requests every
/// known alarm.
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// - List - N
///    - [ALID]
///
/// [ALID]: AlarmID
pub struct ListAlarmsRequest(pub VecList<AlarmID>);
message_data!{ListAlarmsRequest, true, 5, 5}

/// ## S5F6
///
/// **List Alarms Data (LAD)**
///
/// - **MULTI-BLOCK**
/// - **HOST <- EQUIPMENT**
/// - **REPLY FORBIDDEN**
///
/// ---------------------------------------------------------------------------
///
/// Report the status of the alarms requested by [S5F5].
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// - List - N
///    - List - 3
///       1. [ALCD]
///       2. [ALID]
///       3. [ALTX]
///
/// [S5F5]: ListAlarmsRequest
/// [ALCD]: AlarmCode
/// [ALID]: AlarmID
/// [ALTX]: AlarmText
pub struct ListAlarmsData(pub VecList<(AlarmCode, AlarmID, AlarmText)>);
message_data!{ListAlarmsData, false, 5, 6}

/// ## S5F7
///
/// **List Enabled Alarms Request (LEAR)**
///
/// - **SINGLE-BLOCK**
/// - **HOST -> EQUIPMENT**
/// - **REPLY REQUIRED**
///
/// ---------------------------------------------------------------------------
///
/// Request the identity of every currently enabled alarm.
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// Header only.
pub struct ListEnabledAlarmsRequest;
message_headeronly!{ListEnabledAlarmsRequest, true, 5, 7}

/// ## S5F8
///
/// **List Enabled Alarms Data (LEAD)**
///
/// - **MULTI-BLOCK**
/// - **HOST <- EQUIPMENT**
/// - **REPLY FORBIDDEN**
///
/// ---------------------------------------------------------------------------
///
/// Report the status of every enabled alarm.
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// - List - N
///    - List - 3
///       1. [ALCD]
///       2. [ALID]
///       3. [ALTX]
///
/// [S5F7]: ListEnabledAlarmsRequest
/// [ALCD]: AlarmCode
/// [ALID]: AlarmID
/// [ALTX]: AlarmText
pub struct ListEnabledAlarmsData(pub VecList<(AlarmCode, AlarmID, AlarmText)>);
message_data!{ListEnabledAlarmsData, false, 5, 8}
