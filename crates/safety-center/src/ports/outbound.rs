//! # Outbound Ports (Driven Ports)
//!
//! What the Safety Center needs from the platform to authorize callers.

use shared_types::{CallingIdentity, Permission, SecurityError, Uid, UserId};
use std::fmt;

/// The two operations the Safety Center exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SendUpdate,
    GetLastUpdate,
}

impl Operation {
    /// Name used in rejections and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::SendUpdate => "sendSafetyCenterUpdate",
            Self::GetLastUpdate => "getLastSafetyCenterUpdate",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a caller is asking to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRequest<'a> {
    pub operation: Operation,
    /// Package the caller claims to act as.
    pub package_name: &'a str,
    /// User whose data is addressed.
    pub user_id: UserId,
}

/// Decides whether a caller may perform a request.
///
/// Returning `Ok(())` means the store may be touched. Implementations must
/// not have side effects on rejection.
pub trait AccessGuard: Send + Sync {
    fn enforce(
        &self,
        caller: &CallingIdentity,
        request: &AccessRequest<'_>,
    ) -> Result<(), SecurityError>;
}

/// Resolves which packages a uid runs.
pub trait PackageManager: Send + Sync {
    /// True if `package_name` is installed under `uid`.
    fn check_package(&self, uid: Uid, package_name: &str) -> bool;
}

/// Answers permission queries for a uid.
pub trait PermissionChecker: Send + Sync {
    /// True if `uid` has been granted `permission`.
    fn has_permission(&self, uid: Uid, permission: &Permission) -> bool;
}

impl<T: AccessGuard + ?Sized> AccessGuard for std::sync::Arc<T> {
    fn enforce(
        &self,
        caller: &CallingIdentity,
        request: &AccessRequest<'_>,
    ) -> Result<(), SecurityError> {
        (**self).enforce(caller, request)
    }
}

impl<T: PackageManager + ?Sized> PackageManager for std::sync::Arc<T> {
    fn check_package(&self, uid: Uid, package_name: &str) -> bool {
        (**self).check_package(uid, package_name)
    }
}

impl<T: PermissionChecker + ?Sized> PermissionChecker for std::sync::Arc<T> {
    fn has_permission(&self, uid: Uid, permission: &Permission) -> bool {
        (**self).has_permission(uid, permission)
    }
}
