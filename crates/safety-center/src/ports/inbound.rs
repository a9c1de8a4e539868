//! # Inbound Ports (Driving Ports)
//!
//! Public API exposed by the Safety Center.

use shared_types::{CallingIdentity, UserId};

use crate::domain::{SafetyCenterError, SafetySourceData};

/// Primary API for the Safety Center.
///
/// Both operations authorize `caller` before touching any stored data. A
/// rejected call has no effect.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait SafetyCenterApi: Send + Sync {
    /// Store `data` as the latest report from `package_name` for `user_id`.
    ///
    /// The report is filed under the source id embedded in `data`. Any
    /// earlier report for the same package, user and source id is replaced.
    ///
    /// ## Errors
    ///
    /// - `Err(Security)`: package not owned by the caller, cross-user access
    ///   without permission, or missing submit permission
    fn send_safety_center_update(
        &self,
        caller: &CallingIdentity,
        package_name: &str,
        user_id: UserId,
        data: SafetySourceData,
    ) -> Result<(), SafetyCenterError>;

    /// Read back the latest report `package_name` submitted for `user_id`
    /// under `source_id`.
    ///
    /// ## Returns
    ///
    /// - `Ok(Some(data))`: the last report written for that key
    /// - `Ok(None)`: nothing was ever written for that key
    /// - `Err(Security)`: same rejections as `send_safety_center_update`
    fn get_last_safety_center_update(
        &self,
        caller: &CallingIdentity,
        package_name: &str,
        user_id: UserId,
        source_id: &str,
    ) -> Result<Option<SafetySourceData>, SafetyCenterError>;
}
