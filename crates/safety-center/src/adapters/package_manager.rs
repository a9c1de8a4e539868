//! In-memory uid → package table.

use parking_lot::RwLock;
use shared_types::Uid;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::ports::PackageManager;

/// Package ownership table kept in memory.
///
/// Several packages may share a uid.
#[derive(Debug, Default)]
pub struct InMemoryPackageManager {
    packages: RwLock<HashMap<Uid, HashSet<String>>>,
}

impl InMemoryPackageManager {
    pub fn new() -> Self {
        Self {
            packages: RwLock::new(HashMap::new()),
        }
    }

    /// Record that `package_name` runs as `uid`.
    pub fn install_package(&self, uid: Uid, package_name: impl Into<String>) {
        let package_name = package_name.into();
        debug!("[sc] Installing {} for uid {}", package_name, uid);
        self.packages
            .write()
            .entry(uid)
            .or_default()
            .insert(package_name);
    }

    /// Forget `package_name` under `uid`. Returns false if it was not installed.
    pub fn uninstall_package(&self, uid: Uid, package_name: &str) -> bool {
        let mut packages = self.packages.write();
        let Some(owned) = packages.get_mut(&uid) else {
            return false;
        };
        let removed = owned.remove(package_name);
        if owned.is_empty() {
            packages.remove(&uid);
        }
        removed
    }

    /// Packages installed under `uid`, sorted.
    pub fn packages_for_uid(&self, uid: Uid) -> Vec<String> {
        let mut names: Vec<String> = self
            .packages
            .read()
            .get(&uid)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }
}

impl PackageManager for InMemoryPackageManager {
    fn check_package(&self, uid: Uid, package_name: &str) -> bool {
        self.packages
            .read()
            .get(&uid)
            .is_some_and(|owned| owned.contains(package_name))
    }
}
