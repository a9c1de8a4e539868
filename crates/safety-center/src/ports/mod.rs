//! # Ports Layer
//!
//! Hexagonal architecture ports (interfaces) for the Safety Center.
//!
//! - **Driving Ports (Inbound)**: `SafetyCenterApi`, consumed by the IPC stub
//! - **Driven Ports (Outbound)**: `PackageManager`, `PermissionChecker` and
//!   `AccessGuard`, implemented by adapters

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
