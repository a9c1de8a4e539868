//! # IPC Message Handler
//!
//! Turns transport envelopes into [`SafetyCenterApi`] calls.
//!
//! ## Security
//!
//! The caller identity handed to the service is built from the envelope
//! (`calling_uid`, `calling_pid`) and nothing else. Whatever package or user
//! the payload names is only a claim for the access guard to check.

use std::sync::Arc;
use tracing::debug;

use crate::domain::SafetyCenterErrorPayload;
use crate::ipc::payloads::*;
use crate::ports::SafetyCenterApi;

/// Binder-style entry point in front of a Safety Center implementation.
pub struct SafetyCenterStub<A: SafetyCenterApi> {
    api: Arc<A>,
}

impl<A: SafetyCenterApi> Clone for SafetyCenterStub<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: SafetyCenterApi> SafetyCenterStub<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Handle a `sendSafetyCenterUpdate` call.
    pub fn handle_send_update(
        &self,
        msg: CallerEnvelope<SendSafetyCenterUpdatePayload>,
    ) -> Result<(), SafetyCenterErrorPayload> {
        let caller = msg.caller();
        let SendSafetyCenterUpdatePayload {
            package_name,
            user_id,
            data,
        } = msg.payload;

        self.api
            .send_safety_center_update(&caller, &package_name, user_id, data)
            .map_err(SafetyCenterErrorPayload::from)
    }

    /// Handle a `getLastSafetyCenterUpdate` call.
    pub fn handle_get_last_update(
        &self,
        msg: CallerEnvelope<GetLastSafetyCenterUpdatePayload>,
    ) -> Result<GetLastSafetyCenterUpdateResponse, SafetyCenterErrorPayload> {
        let caller = msg.caller();
        let payload = &msg.payload;

        let data = self
            .api
            .get_last_safety_center_update(
                &caller,
                &payload.package_name,
                payload.user_id,
                &payload.source_id,
            )
            .map_err(SafetyCenterErrorPayload::from)?;

        Ok(GetLastSafetyCenterUpdateResponse { data })
    }

    /// Dispatch any request. Errors are folded into the reply.
    pub fn handle(&self, msg: CallerEnvelope<SafetyCenterRequest>) -> SafetyCenterReply {
        let caller = msg.caller();
        let reply = match msg.payload {
            SafetyCenterRequest::SendSafetyCenterUpdate(payload) => self
                .handle_send_update(CallerEnvelope::new(caller, payload))
                .map(|()| SafetyCenterReply::Updated),
            SafetyCenterRequest::GetLastSafetyCenterUpdate(payload) => self
                .handle_get_last_update(CallerEnvelope::new(caller, payload))
                .map(SafetyCenterReply::LastUpdate),
        };

        let reply = reply.unwrap_or_else(SafetyCenterReply::Error);
        debug!(
            uid = %caller.uid,
            error = reply.is_error(),
            "[sc] Handled IPC request"
        );
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{AllowAllGuard, DenyAllGuard};
    use crate::domain::{SafetyCenterErrorType, SafetySourceData};
    use crate::service::SafetyCenterService;
    use shared_types::{CallingIdentity, Uid, UserId};

    fn allow_stub() -> SafetyCenterStub<SafetyCenterService<AllowAllGuard>> {
        SafetyCenterStub::new(Arc::new(SafetyCenterService::new(AllowAllGuard)))
    }

    fn caller() -> CallingIdentity {
        CallingIdentity::new(Uid(10057), 77)
    }

    fn send(id: &str) -> SafetyCenterRequest {
        SafetyCenterRequest::SendSafetyCenterUpdate(SendSafetyCenterUpdatePayload {
            package_name: "com.app.a".into(),
            user_id: UserId(0),
            data: SafetySourceData::new(id),
        })
    }

    fn get(id: &str) -> SafetyCenterRequest {
        SafetyCenterRequest::GetLastSafetyCenterUpdate(GetLastSafetyCenterUpdatePayload {
            package_name: "com.app.a".into(),
            user_id: UserId(0),
            source_id: id.into(),
        })
    }

    #[test]
    fn test_dispatch_send_then_get() {
        let stub = allow_stub();

        assert_eq!(
            stub.handle(CallerEnvelope::new(caller(), send("s1"))),
            SafetyCenterReply::Updated
        );

        match stub.handle(CallerEnvelope::new(caller(), get("s1"))) {
            SafetyCenterReply::LastUpdate(resp) => {
                assert_eq!(resp.data, Some(SafetySourceData::new("s1")));
            }
            other => panic!("unexpected reply {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_get_unknown_is_empty_not_error() {
        let stub = allow_stub();

        let reply = stub.handle(CallerEnvelope::new(caller(), get("never")));
        assert_eq!(
            reply,
            SafetyCenterReply::LastUpdate(GetLastSafetyCenterUpdateResponse { data: None })
        );
    }

    #[test]
    fn test_rejection_becomes_error_reply() {
        let stub = SafetyCenterStub::new(Arc::new(SafetyCenterService::new(DenyAllGuard)));

        match stub.handle(CallerEnvelope::new(caller(), send("s1"))) {
            SafetyCenterReply::Error(payload) => {
                assert_eq!(payload.error_type, SafetyCenterErrorType::PermissionDenied);
            }
            other => panic!("unexpected reply {:?}", other),
        }
    }

    #[test]
    fn test_request_json_shape() {
        let json = serde_json::to_value(send("s1")).unwrap();
        assert_eq!(json["type"], "SendSafetyCenterUpdate");
        assert_eq!(json["package_name"], "com.app.a");
        assert_eq!(json["data"]["id"], "s1");

        let back: SafetyCenterRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, send("s1"));
    }
}
