//! # Platform Access Guard
//!
//! Authorizes Safety Center calls against the platform's package and
//! permission state.
//!
//! ## Checks (in order, first failure wins)
//!
//! 1. **Identity binding**: the calling uid owns the claimed package
//! 2. **Cross-user**: pseudo-users are never valid targets; acting for another
//!    user requires the cross-user permission
//! 3. **Capability**: the caller holds the permission the operation requires

use shared_types::{CallingIdentity, SecurityError};
use tracing::{trace, warn};

use crate::config::{ConfigError, SafetyCenterConfig};
use crate::ports::{AccessGuard, AccessRequest, PackageManager, PermissionChecker};

/// Access guard backed by a [`PackageManager`] and a [`PermissionChecker`].
pub struct PlatformAccessGuard<P: PackageManager, C: PermissionChecker> {
    packages: P,
    permissions: C,
    policy: SafetyCenterConfig,
}

impl<P: PackageManager, C: PermissionChecker> PlatformAccessGuard<P, C> {
    /// Create a guard enforcing the permissions named in `config`.
    ///
    /// Fails if `config` would leave an operation ungated.
    pub fn new(
        packages: P,
        permissions: C,
        config: SafetyCenterConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            packages,
            permissions,
            policy: config,
        })
    }

    /// The permission policy this guard enforces.
    pub fn policy(&self) -> &SafetyCenterConfig {
        &self.policy
    }

    fn check_identity(
        &self,
        caller: &CallingIdentity,
        request: &AccessRequest<'_>,
    ) -> Result<(), SecurityError> {
        if self.packages.check_package(caller.uid, request.package_name) {
            return Ok(());
        }
        Err(SecurityError::PackageMismatch {
            operation: request.operation.name(),
            uid: caller.uid,
            package_name: request.package_name.to_string(),
        })
    }

    fn check_cross_user(
        &self,
        caller: &CallingIdentity,
        request: &AccessRequest<'_>,
    ) -> Result<(), SecurityError> {
        if request.user_id.is_pseudo() {
            return Err(SecurityError::InvalidTargetUser {
                operation: request.operation.name(),
                uid: caller.uid,
                target_user: request.user_id,
            });
        }

        let caller_user = caller.user_id();
        if request.user_id == caller_user
            || self
                .permissions
                .has_permission(caller.uid, &self.policy.cross_user_permission)
        {
            return Ok(());
        }
        Err(SecurityError::CrossUserDenied {
            operation: request.operation.name(),
            uid: caller.uid,
            caller_user,
            target_user: request.user_id,
            permission: self.policy.cross_user_permission.clone(),
        })
    }

    fn check_capability(
        &self,
        caller: &CallingIdentity,
        request: &AccessRequest<'_>,
    ) -> Result<(), SecurityError> {
        let permission = self.policy.required_permission(request.operation);
        if self.permissions.has_permission(caller.uid, permission) {
            return Ok(());
        }
        Err(SecurityError::PermissionDenied {
            operation: request.operation.name(),
            uid: caller.uid,
            permission: permission.clone(),
        })
    }
}

impl<P: PackageManager, C: PermissionChecker> AccessGuard for PlatformAccessGuard<P, C> {
    fn enforce(
        &self,
        caller: &CallingIdentity,
        request: &AccessRequest<'_>,
    ) -> Result<(), SecurityError> {
        let result = self
            .check_identity(caller, request)
            .and_then(|()| self.check_cross_user(caller, request))
            .and_then(|()| self.check_capability(caller, request));

        match &result {
            Ok(()) => trace!(
                operation = %request.operation,
                uid = %caller.uid,
                package = request.package_name,
                user = %request.user_id,
                "[sc] Caller authorized"
            ),
            Err(e) => warn!(
                operation = %request.operation,
                uid = %caller.uid,
                pid = caller.pid,
                package = request.package_name,
                user = %request.user_id,
                "[sc] Rejected caller: {}",
                e
            ),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryPackageManager, InMemoryPermissionChecker};
    use crate::ports::Operation;
    use shared_types::{
        Permission, Uid, UserId, INTERACT_ACROSS_USERS_FULL, SEND_SAFETY_CENTER_UPDATE,
    };

    const APP_UID: Uid = Uid(10057);
    const PKG: &str = "com.app.a";

    fn make_guard(
        permissions: &[Permission],
    ) -> PlatformAccessGuard<InMemoryPackageManager, InMemoryPermissionChecker> {
        let packages = InMemoryPackageManager::new();
        packages.install_package(APP_UID, PKG);
        let checker = InMemoryPermissionChecker::new();
        for p in permissions {
            checker.grant(APP_UID, p.clone());
        }
        PlatformAccessGuard::new(packages, checker, SafetyCenterConfig::default()).unwrap()
    }

    fn request(operation: Operation, package_name: &str, user_id: UserId) -> AccessRequest<'_> {
        AccessRequest {
            operation,
            package_name,
            user_id,
        }
    }

    #[test]
    fn test_own_package_own_user_with_permission_passes() {
        let guard = make_guard(&[SEND_SAFETY_CENTER_UPDATE]);
        let caller = CallingIdentity::from_uid(APP_UID);

        for op in [Operation::SendUpdate, Operation::GetLastUpdate] {
            assert!(guard
                .enforce(&caller, &request(op, PKG, UserId(0)))
                .is_ok());
        }
    }

    #[test]
    fn test_foreign_package_rejected() {
        let guard = make_guard(&[SEND_SAFETY_CENTER_UPDATE]);
        let caller = CallingIdentity::from_uid(APP_UID);

        let err = guard
            .enforce(&caller, &request(Operation::SendUpdate, "com.app.b", UserId(0)))
            .unwrap_err();
        assert!(matches!(err, SecurityError::PackageMismatch { .. }));
    }

    #[test]
    fn test_identity_is_checked_before_capability() {
        // No permissions at all, wrong package: the identity failure is reported.
        let guard = make_guard(&[]);
        let caller = CallingIdentity::from_uid(APP_UID);

        let err = guard
            .enforce(&caller, &request(Operation::GetLastUpdate, "com.app.b", UserId(10)))
            .unwrap_err();
        assert!(matches!(err, SecurityError::PackageMismatch { .. }));
    }

    #[test]
    fn test_cross_user_requires_permission() {
        let guard = make_guard(&[SEND_SAFETY_CENTER_UPDATE]);
        let caller = CallingIdentity::from_uid(APP_UID);

        let err = guard
            .enforce(&caller, &request(Operation::SendUpdate, PKG, UserId(10)))
            .unwrap_err();
        match err {
            SecurityError::CrossUserDenied {
                caller_user,
                target_user,
                permission,
                ..
            } => {
                assert_eq!(caller_user, UserId(0));
                assert_eq!(target_user, UserId(10));
                assert_eq!(permission, INTERACT_ACROSS_USERS_FULL);
            }
            other => panic!("expected CrossUserDenied, got {:?}", other),
        }
    }

    #[test]
    fn test_cross_user_with_permission_passes() {
        let guard = make_guard(&[SEND_SAFETY_CENTER_UPDATE, INTERACT_ACROSS_USERS_FULL]);
        let caller = CallingIdentity::from_uid(APP_UID);

        assert!(guard
            .enforce(&caller, &request(Operation::SendUpdate, PKG, UserId(10)))
            .is_ok());
    }

    #[test]
    fn test_pseudo_user_is_never_a_valid_target() {
        for granted in [
            vec![SEND_SAFETY_CENTER_UPDATE],
            vec![SEND_SAFETY_CENTER_UPDATE, INTERACT_ACROSS_USERS_FULL],
        ] {
            let guard = make_guard(&granted);
            let caller = CallingIdentity::from_uid(APP_UID);

            for user in [UserId::ALL, UserId::CURRENT, UserId(-77)] {
                for op in [Operation::SendUpdate, Operation::GetLastUpdate] {
                    let err = guard.enforce(&caller, &request(op, PKG, user)).unwrap_err();
                    assert_eq!(
                        err,
                        SecurityError::InvalidTargetUser {
                            operation: op.name(),
                            uid: APP_UID,
                            target_user: user,
                        }
                    );
                }
            }
        }
    }

    #[test]
    fn test_new_rejects_blank_permission() {
        let config = SafetyCenterConfig {
            fetch_permission: Permission::new("  "),
            ..SafetyCenterConfig::default()
        };

        let result = PlatformAccessGuard::new(
            InMemoryPackageManager::new(),
            InMemoryPermissionChecker::new(),
            config,
        );
        assert!(matches!(
            result,
            Err(ConfigError::EmptyPermission {
                field: "fetch_permission"
            })
        ));
    }

    #[test]
    fn test_missing_capability_rejected() {
        let guard = make_guard(&[]);
        let caller = CallingIdentity::from_uid(APP_UID);

        let err = guard
            .enforce(&caller, &request(Operation::SendUpdate, PKG, UserId(0)))
            .unwrap_err();
        assert_eq!(
            err,
            SecurityError::PermissionDenied {
                operation: "sendSafetyCenterUpdate",
                uid: APP_UID,
                permission: SEND_SAFETY_CENTER_UPDATE,
            }
        );
    }

    #[test]
    fn test_asymmetric_permissions() {
        let config = SafetyCenterConfig {
            fetch_permission: Permission::new("com.vendor.READ_SAFETY"),
            ..SafetyCenterConfig::default()
        };
        let packages = InMemoryPackageManager::new();
        packages.install_package(APP_UID, PKG);
        let checker = InMemoryPermissionChecker::new();
        checker.grant(APP_UID, SEND_SAFETY_CENTER_UPDATE);
        let guard = PlatformAccessGuard::new(packages, checker, config).unwrap();
        let caller = CallingIdentity::from_uid(APP_UID);

        assert!(guard
            .enforce(&caller, &request(Operation::SendUpdate, PKG, UserId(0)))
            .is_ok());
        assert!(matches!(
            guard.enforce(&caller, &request(Operation::GetLastUpdate, PKG, UserId(0))),
            Err(SecurityError::PermissionDenied { .. })
        ));
    }
}
