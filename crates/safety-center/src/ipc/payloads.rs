//! # IPC Payloads
//!
//! Requests and replies for the two Safety Center operations.
//!
//! The package and user fields name whose data is addressed. They are
//! claims, checked against the envelope's uid before use.

use serde::{Deserialize, Serialize};
use shared_types::{CallingIdentity, Uid, UserId};

use crate::domain::{SafetyCenterErrorPayload, SafetySourceData};

// ============================================================
// ENVELOPE
// ============================================================

/// A request as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerEnvelope<T> {
    /// Uid of the calling process, as reported by the transport.
    pub calling_uid: Uid,
    /// Pid of the calling process, for logs only.
    pub calling_pid: u32,
    pub payload: T,
}

impl<T> CallerEnvelope<T> {
    pub fn new(caller: CallingIdentity, payload: T) -> Self {
        Self {
            calling_uid: caller.uid,
            calling_pid: caller.pid,
            payload,
        }
    }

    pub fn caller(&self) -> CallingIdentity {
        CallingIdentity::new(self.calling_uid, self.calling_pid)
    }
}

// ============================================================
// INCOMING REQUESTS
// ============================================================

/// Submit the latest data for one safety source.
///
/// The source id is `data.id`; there is no separate source id field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendSafetyCenterUpdatePayload {
    pub package_name: String,
    pub user_id: UserId,
    pub data: SafetySourceData,
}

/// Read back the latest data for one safety source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLastSafetyCenterUpdatePayload {
    pub package_name: String,
    pub user_id: UserId,
    pub source_id: String,
}

/// Any request the stub accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SafetyCenterRequest {
    SendSafetyCenterUpdate(SendSafetyCenterUpdatePayload),
    GetLastSafetyCenterUpdate(GetLastSafetyCenterUpdatePayload),
}

// ============================================================
// OUTGOING REPLIES
// ============================================================

/// Reply to `GetLastSafetyCenterUpdatePayload`.
///
/// `data: None` means no data was ever submitted. Rejections are carried
/// as errors, never as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLastSafetyCenterUpdateResponse {
    pub data: Option<SafetySourceData>,
}

/// Reply to any [`SafetyCenterRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SafetyCenterReply {
    /// The update was stored.
    Updated,
    LastUpdate(GetLastSafetyCenterUpdateResponse),
    Error(SafetyCenterErrorPayload),
}

impl SafetyCenterReply {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
