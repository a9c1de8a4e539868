//! # Safety Center Configuration
//!
//! Which permissions gate which operation.
//!
//! Submitting and fetching are gated by the same permission unless
//! overridden; the read path can be narrowed independently.

use shared_types::{Permission, INTERACT_ACROSS_USERS_FULL, SEND_SAFETY_CENTER_UPDATE};
use std::env;
use thiserror::Error;
use tracing::info;

use crate::ports::Operation;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A permission name was empty or whitespace.
    #[error("Permission for {field} must not be empty")]
    EmptyPermission { field: &'static str },
}

/// Complete Safety Center configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyCenterConfig {
    /// Required to submit safety source data.
    pub submit_permission: Permission,
    /// Required to read back the last submitted data.
    pub fetch_permission: Permission,
    /// Required to act for a user other than the caller's own.
    pub cross_user_permission: Permission,
}

impl Default for SafetyCenterConfig {
    fn default() -> Self {
        Self {
            submit_permission: SEND_SAFETY_CENTER_UPDATE,
            fetch_permission: SEND_SAFETY_CENTER_UPDATE,
            cross_user_permission: INTERACT_ACROSS_USERS_FULL,
        }
    }
}

impl SafetyCenterConfig {
    /// Load configuration from environment, falling back to defaults.
    ///
    /// The result is validated; a blank override is an error.
    ///
    /// # Environment Variables
    ///
    /// - `SC_SUBMIT_PERMISSION`
    /// - `SC_FETCH_PERMISSION`
    /// - `SC_CROSS_USER_PERMISSION`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`SafetyCenterConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("SC_SUBMIT_PERMISSION") {
            info!("[sc] Submit permission overridden: {}", name);
            config.submit_permission = Permission::new(name);
        }
        if let Some(name) = lookup("SC_FETCH_PERMISSION") {
            info!("[sc] Fetch permission overridden: {}", name);
            config.fetch_permission = Permission::new(name);
        }
        if let Some(name) = lookup("SC_CROSS_USER_PERMISSION") {
            info!("[sc] Cross-user permission overridden: {}", name);
            config.cross_user_permission = Permission::new(name);
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would leave an operation ungated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("submit_permission", &self.submit_permission),
            ("fetch_permission", &self.fetch_permission),
            ("cross_user_permission", &self.cross_user_permission),
        ];
        for (field, permission) in fields {
            if permission.as_str().trim().is_empty() {
                return Err(ConfigError::EmptyPermission { field });
            }
        }
        Ok(())
    }

    /// The permission an operation requires.
    pub fn required_permission(&self, operation: Operation) -> &Permission {
        match operation {
            Operation::SendUpdate => &self.submit_permission,
            Operation::GetLastUpdate => &self.fetch_permission,
        }
    }
}
