//! # Adapters Layer
//!
//! Implementations of the outbound ports.
//!
//! - `InMemoryPackageManager`, `InMemoryPermissionChecker`: runtime-mutable
//!   platform tables
//! - `AllowAllGuard`, `DenyAllGuard`: fixed-answer guards for tests and tools

pub mod package_manager;
pub mod permission_checker;
pub mod static_guards;

pub use package_manager::InMemoryPackageManager;
pub use permission_checker::InMemoryPermissionChecker;
pub use static_guards::{AllowAllGuard, DenyAllGuard};
