//! # Shared Types Crate
//!
//! Platform identity primitives and security errors used across the
//! Safety Center workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Caller identity (`CallingIdentity`) and the
//!   permission vocabulary are defined here and nowhere else.
//! - **Uid Authority**: A caller's user is always derived from its uid. Callers
//!   never declare their own user.
//! - **Typed Rejections**: Every access-control failure is a `SecurityError`
//!   variant naming the check that failed.

pub mod errors;
pub mod identity;
pub mod permissions;

pub use errors::*;
pub use identity::*;
pub use permissions::*;
