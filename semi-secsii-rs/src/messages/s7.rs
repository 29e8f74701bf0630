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

//! # STREAM 7: PROCESS PROGRAM MANAGEMENT
//! **Based on SEMI E5§10.11**
//!
//! ---------------------------------------------------------------------------
//!
//! [Message]s which deal with the management and transfer of Process
//! Programs.
//!
//! Only the deletion and directory-query subset (S7F17 through S7F20) is
//! implemented here.
//!
//! [Message]: crate::Message

use crate::*;
use crate::Error::*;
use crate::items::*;

/// ## S7F0
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
message_headeronly!{Abort, false, 7, 0}

/// ## S7F17
///
/// **Delete Process Program Send (PPD)**
///
/// - **MULTI-BLOCK**
/// - **HOST -> EQUIPMENT**
/// - **REPLY REQUIRED**
///
/// ---------------------------------------------------------------------------
///
/// Delete the named process programs. An empty list deletes every process
/// program currently stored.
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// - List - N
///    - [PPID]
///
/// [PPID]: ProcessProgramID
pub struct DeleteProcessProgramSend(pub VecList<ProcessProgramID>);
message_data!{DeleteProcessProgramSend, true, 7, 17}

/// ## S7F18
///
/// **Delete Process Program Acknowledge (PPA)**
///
/// - **SINGLE-BLOCK**
/// - **HOST <- EQUIPMENT**
/// - **REPLY FORBIDDEN**
///
/// ---------------------------------------------------------------------------
///
/// Acknowledge or error for [S7F17].
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// - [ACKC7]
///
/// [S7F17]: DeleteProcessProgramSend
/// [ACKC7]: AcknowledgeCode7
pub struct DeleteProcessProgramAcknowledge(pub AcknowledgeCode7);
message_data!{DeleteProcessProgramAcknowledge, false, 7, 18}

/// ## S7F19
///
/// **Current EPPD Request (CEPPD)**
///
/// - **SINGLE-BLOCK**
/// - **HOST -> EQUIPMENT**
/// - **REPLY REQUIRED**
///
/// ---------------------------------------------------------------------------
///
/// Request the identity of every process program currently stored by the
/// equipment.
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// Header only.
pub struct CurrentEppdRequest;
message_headeronly!{CurrentEppdRequest, true, 7, 19}

/// ## S7F20
///
/// **Current EPPD Data (CEPPD)**
///
/// - **MULTI-BLOCK**
/// - **HOST <- EQUIPMENT**
/// - **REPLY FORBIDDEN**
///
/// ---------------------------------------------------------------------------
///
/// Report the identity of every process program currently stored.
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// - List - N
///    - [PPID]
///
/// [S7F19]: CurrentEppdRequest
/// [PPID]:  ProcessProgramID
pub struct CurrentEppdData(pub VecList<ProcessProgramID>);
message_data!{CurrentEppdData, false, 7, 20}
