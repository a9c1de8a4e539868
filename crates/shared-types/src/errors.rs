//! # Error Types
//!
//! Access-control rejections shared across crates.

use crate::identity::{Uid, UserId};
use crate::permissions::Permission;
use thiserror::Error;

/// Why a caller was refused.
///
/// Rejections are final for the call. Retrying with the same identity
/// yields the same answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecurityError {
    /// The calling uid does not own the package it claims to act as.
    #[error("{operation}: uid {uid} does not own package {package_name}")]
    PackageMismatch {
        operation: &'static str,
        uid: Uid,
        package_name: String,
    },

    /// The caller targeted another user without the cross-user permission.
    #[error("{operation}: uid {uid} (user {caller_user}) may not act for user {target_user}; requires {permission}")]
    CrossUserDenied {
        operation: &'static str,
        uid: Uid,
        caller_user: UserId,
        target_user: UserId,
        permission: Permission,
    },

    /// The target is a pseudo-user (`ALL`, `CURRENT`) or another negative
    /// id. Refused even for callers holding the cross-user permission.
    #[error("{operation}: uid {uid} targeted invalid user {target_user}")]
    InvalidTargetUser {
        operation: &'static str,
        uid: Uid,
        target_user: UserId,
    },

    /// The caller lacks the permission the operation requires.
    #[error("{operation}: uid {uid} does not hold {permission}")]
    PermissionDenied {
        operation: &'static str,
        uid: Uid,
        permission: Permission,
    },
}

impl SecurityError {
    /// The operation that was refused.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::PackageMismatch { operation, .. }
            | Self::CrossUserDenied { operation, .. }
            | Self::InvalidTargetUser { operation, .. }
            | Self::PermissionDenied { operation, .. } => operation,
        }
    }
}
