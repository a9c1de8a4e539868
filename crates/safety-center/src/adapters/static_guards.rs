//! Fixed-answer access guards.

use shared_types::{CallingIdentity, SecurityError, SEND_SAFETY_CENTER_UPDATE};

use crate::ports::{AccessGuard, AccessRequest};

/// Approves every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAllGuard;

impl AccessGuard for AllowAllGuard {
    fn enforce(
        &self,
        _caller: &CallingIdentity,
        _request: &AccessRequest<'_>,
    ) -> Result<(), SecurityError> {
        Ok(())
    }
}

/// Rejects every request as lacking the report permission.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAllGuard;

impl AccessGuard for DenyAllGuard {
    fn enforce(
        &self,
        caller: &CallingIdentity,
        request: &AccessRequest<'_>,
    ) -> Result<(), SecurityError> {
        Err(SecurityError::PermissionDenied {
            operation: request.operation.name(),
            uid: caller.uid,
            permission: SEND_SAFETY_CENTER_UPDATE,
        })
    }
}
