//! # Permissions
//!
//! Named capabilities a caller may hold. The platform grants them per uid.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A named capability.
///
/// Well-known permissions are `'static`; configured ones are owned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    /// Wraps a well-known permission name.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Permission {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

/// Allows a source to push safety data to, and read it back from, the
/// Safety Center.
pub const SEND_SAFETY_CENTER_UPDATE: Permission =
    Permission::from_static("android.permission.SEND_SAFETY_CENTER_UPDATE");

/// Allows a caller to act on behalf of any device user.
pub const INTERACT_ACROSS_USERS_FULL: Permission =
    Permission::from_static("android.permission.INTERACT_ACROSS_USERS_FULL");
