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

//! # STREAM 3: MATERIAL STATUS
//! **Based on SEMI E5§10.7**
//!
//! ---------------------------------------------------------------------------
//!
//! [Message]s which deal with communicating information and actions related
//! to material, including carriers and material-in-process.
//!
//! [Message]: crate::Message

use crate::*;
use crate::Error::*;
use crate::items::*;

/// ## S3F0
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
message_headeronly!{Abort, false, 3, 0}

/// ## S3F1
///
/// **Material Status Request (MSR)**
///
/// - **SINGLE-BLOCK**
/// - **HOST <-> EQUIPMENT**
/// - **REPLY REQUIRED**
///
/// ---------------------------------------------------------------------------
///
/// Request current material status for the named locations.
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// - [MF]
///
/// [MF]: MaterialFormat
pub struct MaterialStatusRequest(pub MaterialFormat);
message_data!{MaterialStatusRequest, true, 3, 1}

/// ## S3F2
///
/// **Material Status Data (MSD)**
///
/// - **MULTI-BLOCK**
/// - **HOST <-> EQUIPMENT**
/// - **REPLY FORBIDDEN**
///
/// ---------------------------------------------------------------------------
///
/// Report current material status.
///
/// ---------------------------------------------------------------------------
///
/// #### Structure
///
/// - List - 2
///    1. [MF]
///    2. List - N
///       - List - 2
///          1. [LOC]
///          2. [MID]
///
/// N is the number of reported locations.
///
/// [S3F1]: MaterialStatusRequest
/// [MF]:   MaterialFormat
/// [LOC]:  LocationCode
/// [MID]:  MaterialID
pub struct MaterialStatusData(pub (MaterialFormat, VecList<(LocationCode, MaterialID)>));
message_data!{MaterialStatusData, false, 3, 2}
