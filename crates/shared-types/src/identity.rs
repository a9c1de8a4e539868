//! # Caller Identity
//!
//! Execution identities as the platform reports them.
//!
//! - **Uid**: the kernel-level identity of a calling process. It encodes both
//!   the user the process runs as and the application id within that user.
//! - **UserId**: a device user (profile). Reports are partitioned by user.
//! - **CallingIdentity**: what the transport tells us about the caller. It is
//!   the ONLY trusted description of who is calling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of uids reserved for each device user.
///
/// `uid = user_id * PER_USER_RANGE + app_id`
pub const PER_USER_RANGE: u32 = 100_000;

/// Kernel-level identity of a calling process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Uid(pub u32);

impl Uid {
    /// Builds the uid an application id gets inside the given user.
    ///
    /// `None` for pseudo-users, which have no uid range, and for users whose
    /// range lies past `u32::MAX`.
    pub fn of(user_id: UserId, app_id: u32) -> Option<Self> {
        let user = u32::try_from(user_id.0).ok()?;
        let base = user.checked_mul(PER_USER_RANGE)?;
        base.checked_add(app_id % PER_USER_RANGE).map(Uid)
    }

    /// The device user this uid runs as.
    pub fn user_id(self) -> UserId {
        // Fits: u32::MAX / PER_USER_RANGE < i32::MAX
        UserId((self.0 / PER_USER_RANGE) as i32)
    }

    /// The per-user application id.
    pub fn app_id(self) -> u32 {
        self.0 % PER_USER_RANGE
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A device user.
///
/// Signed because the platform reserves negative values for pseudo-users
/// (`ALL`, `CURRENT`). They never match a real caller's user and are not
/// valid targets for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub i32);

impl UserId {
    /// The primary user.
    pub const SYSTEM: UserId = UserId(0);
    /// Pseudo-user addressing every user.
    pub const ALL: UserId = UserId(-1);
    /// Pseudo-user addressing whichever user is in the foreground.
    pub const CURRENT: UserId = UserId(-2);

    /// True for `ALL`, `CURRENT` and any other negative id.
    pub fn is_pseudo(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for UserId {
    fn from(raw: i32) -> Self {
        UserId(raw)
    }
}

/// Identity of the process on the other side of a call.
///
/// Produced by the transport, never by the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallingIdentity {
    pub uid: Uid,
    pub pid: u32,
}

impl CallingIdentity {
    pub fn new(uid: Uid, pid: u32) -> Self {
        Self { uid, pid }
    }

    /// Identity for a caller where only the uid is known.
    pub fn from_uid(uid: Uid) -> Self {
        Self { uid, pid: 0 }
    }

    /// The user the caller runs as.
    pub fn user_id(&self) -> UserId {
        self.uid.user_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uid_user_split() {
        let uid = Uid(10_10057);
        assert_eq!(uid.user_id(), UserId(10));
        assert_eq!(uid.app_id(), 10057);
    }

    #[test]
    fn test_uid_of_round_trips_components() {
        let uid = Uid::of(UserId(11), 10123).unwrap();
        assert_eq!(uid, Uid(1_110_123));
        assert_eq!(uid.user_id(), UserId(11));
        assert_eq!(uid.app_id(), 10123);
    }

    #[test]
    fn test_uid_of_rejects_pseudo_and_out_of_range_users() {
        assert_eq!(Uid::of(UserId::ALL, 10057), None);
        assert_eq!(Uid::of(UserId(50_000), 10057), None);
        assert_eq!(Uid::of(UserId(42_949), 67_295), Some(Uid(u32::MAX)));
    }

    #[test]
    fn test_pseudo_users() {
        assert!(UserId::ALL.is_pseudo());
        assert!(UserId::CURRENT.is_pseudo());
        assert!(UserId(-77).is_pseudo());
        assert!(!UserId::SYSTEM.is_pseudo());
        assert!(!UserId(10).is_pseudo());
    }

    #[test]
    fn test_pseudo_users_never_match_a_real_caller() {
        let caller = CallingIdentity::from_uid(Uid(10057));
        assert_ne!(caller.user_id(), UserId::ALL);
        assert_ne!(caller.user_id(), UserId::CURRENT);
    }

    #[test]
    fn test_user_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&UserId(10)).unwrap();
        assert_eq!(json, "10");
    }
}
