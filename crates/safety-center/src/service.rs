//! # Safety Center Service
//!
//! Application service implementing [`SafetyCenterApi`].
//!
//! Every call goes guard first, store second. A rejected call returns before
//! the store is touched, so it leaves no trace in stored data.
//!
//! The service is built once by whoever hosts it and shared by handle
//! (`Arc<SafetyCenterService<_>>`). There is no process-wide instance.

use shared_types::{CallingIdentity, UserId};
use tracing::debug;

use crate::domain::{SafetyCenterError, SafetySourceData, SafetySourceDataStore, SafetySourceKey};
use crate::ports::{AccessGuard, AccessRequest, Operation, SafetyCenterApi};

/// The Safety Center: an access guard in front of the report store.
///
/// Which permissions gate which operation is decided by the guard alone.
pub struct SafetyCenterService<G: AccessGuard> {
    guard: G,
    store: SafetySourceDataStore,
}

impl<G: AccessGuard> SafetyCenterService<G> {
    /// Create a service with an empty store.
    pub fn new(guard: G) -> Self {
        Self {
            guard,
            store: SafetySourceDataStore::new(),
        }
    }

    pub fn guard(&self) -> &G {
        &self.guard
    }

    /// Number of report slots currently filled.
    pub fn report_count(&self) -> usize {
        self.store.len()
    }

    fn authorize(
        &self,
        caller: &CallingIdentity,
        operation: Operation,
        package_name: &str,
        user_id: UserId,
    ) -> Result<(), SafetyCenterError> {
        let request = AccessRequest {
            operation,
            package_name,
            user_id,
        };
        self.guard.enforce(caller, &request)?;
        Ok(())
    }
}

impl<G: AccessGuard> SafetyCenterApi for SafetyCenterService<G> {
    fn send_safety_center_update(
        &self,
        caller: &CallingIdentity,
        package_name: &str,
        user_id: UserId,
        data: SafetySourceData,
    ) -> Result<(), SafetyCenterError> {
        self.authorize(caller, Operation::SendUpdate, package_name, user_id)?;

        // TODO: merge per-source reports into an aggregate status.
        let key = SafetySourceKey::for_data(package_name, user_id, &data);
        debug!("[sc] Storing safety source data for {}", key);
        self.store.put(key, data);

        Ok(())
    }

    fn get_last_safety_center_update(
        &self,
        caller: &CallingIdentity,
        package_name: &str,
        user_id: UserId,
        source_id: &str,
    ) -> Result<Option<SafetySourceData>, SafetyCenterError> {
        self.authorize(caller, Operation::GetLastUpdate, package_name, user_id)?;

        let key = SafetySourceKey::of(package_name, user_id, source_id);
        let data = self.store.get(&key);
        debug!(
            found = data.is_some(),
            "[sc] Fetched safety source data for {}", key
        );

        Ok(data)
    }
}
