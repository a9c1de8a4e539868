//! In-memory uid → granted permissions table.

use parking_lot::RwLock;
use shared_types::{Permission, Uid};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::ports::PermissionChecker;

/// Permission grants kept in memory.
#[derive(Debug, Default)]
pub struct InMemoryPermissionChecker {
    grants: RwLock<HashMap<Uid, HashSet<Permission>>>,
}

impl InMemoryPermissionChecker {
    pub fn new() -> Self {
        Self {
            grants: RwLock::new(HashMap::new()),
        }
    }

    pub fn grant(&self, uid: Uid, permission: Permission) {
        debug!("[sc] Granting {} to uid {}", permission, uid);
        self.grants.write().entry(uid).or_default().insert(permission);
    }

    /// Returns false if the permission was not granted.
    pub fn revoke(&self, uid: Uid, permission: &Permission) -> bool {
        debug!("[sc] Revoking {} from uid {}", permission, uid);
        self.grants
            .write()
            .get_mut(&uid)
            .is_some_and(|granted| granted.remove(permission))
    }
}

impl PermissionChecker for InMemoryPermissionChecker {
    fn has_permission(&self, uid: Uid, permission: &Permission) -> bool {
        self.grants
            .read()
            .get(&uid)
            .is_some_and(|granted| granted.contains(permission))
    }
}
