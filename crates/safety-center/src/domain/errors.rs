//! # Domain Errors
//!
//! - `SafetyCenterError`: what the service returns
//! - `SafetyCenterErrorPayload`: the serializable form sent back over IPC
//!
//! The store itself cannot fail. Every error here originates in access
//! control, before the store is reached.

use serde::{Deserialize, Serialize};
use shared_types::SecurityError;
use thiserror::Error;

/// Errors returned by Safety Center operations.
///
/// A missing report is NOT an error; fetches return `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SafetyCenterError {
    /// The access guard refused the caller.
    #[error("Security violation: {0}")]
    Security(#[from] SecurityError),
}

/// Serializable error for IPC responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyCenterErrorPayload {
    pub error_type: SafetyCenterErrorType,
    pub message: String,
}

impl From<SafetyCenterError> for SafetyCenterErrorPayload {
    fn from(err: SafetyCenterError) -> Self {
        let message = err.to_string();
        let error_type = match err {
            SafetyCenterError::Security(SecurityError::PackageMismatch { .. }) => {
                SafetyCenterErrorType::PackageMismatch
            }
            SafetyCenterError::Security(SecurityError::CrossUserDenied { .. }) => {
                SafetyCenterErrorType::CrossUserDenied
            }
            SafetyCenterError::Security(SecurityError::InvalidTargetUser { .. }) => {
                SafetyCenterErrorType::InvalidTargetUser
            }
            SafetyCenterError::Security(SecurityError::PermissionDenied { .. }) => {
                SafetyCenterErrorType::PermissionDenied
            }
        };
        Self {
            error_type,
            message,
        }
    }
}

/// Error type enumeration for IPC serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyCenterErrorType {
    PackageMismatch,
    CrossUserDenied,
    InvalidTargetUser,
    PermissionDenied,
}
