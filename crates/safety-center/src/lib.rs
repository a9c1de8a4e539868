//! # Safety Center
//!
//! Keeps the most recent safety report each trusted source submitted and
//! serves it back to callers allowed to see it.
//!
//! ## Request Flow
//!
//! ```text
//! transport ──CallerEnvelope──→ SafetyCenterStub ──→ SafetyCenterService
//!                                                        │
//!                                                        ↓
//!                                                  [AccessGuard]
//!                                     identity → cross-user → capability
//!                                                        │ ok
//!                                                        ↓
//!                                              SafetySourceDataStore
//!                                        (one mutex, last write wins)
//! ```
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement | Location |
//! |-----------|-------------|----------|
//! | One report per (package, user, source id) | `HashMap` keyed by `SafetySourceKey` | domain/store.rs |
//! | Writes replace whole reports atomically | Single `parking_lot::Mutex` | domain/store.rs |
//! | Key source id comes from the payload | `SafetySourceKey::for_data` | service.rs |
//! | No store access without authorization | Guard runs before store | service.rs |
//! | Unknown key is absence, not an error | `Ok(None)` | service.rs |
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): report model, key, store, errors
//! - **Ports Layer** (`ports/`): inbound API, outbound platform lookups and guard
//! - **Guard** (`guard.rs`): the platform access guard
//! - **Service** (`service.rs`): wires guard and store behind the API
//! - **Adapters Layer** (`adapters/`): in-memory platform tables, fixed guards
//! - **IPC Layer** (`ipc/`): envelope-identity request handling
//!
//! ## Not Provided
//!
//! Reports are kept in memory only and are lost on restart. Reports from
//! different sources are not merged.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod guard;
pub mod ipc;
pub mod ports;
pub mod service;

// Re-export main types for convenience
pub use config::{ConfigError, SafetyCenterConfig};

pub use domain::{
    SafetyCenterError, SafetyCenterErrorPayload, SafetyCenterErrorType, SafetySourceData,
    SafetySourceDataStore, SafetySourceIssue, SafetySourceKey, SafetySourceStatus, SeverityLevel,
};

pub use ports::{
    AccessGuard, AccessRequest, Operation, PackageManager, PermissionChecker, SafetyCenterApi,
};

pub use guard::PlatformAccessGuard;
pub use service::SafetyCenterService;

pub use adapters::{AllowAllGuard, DenyAllGuard, InMemoryPackageManager, InMemoryPermissionChecker};

pub use ipc::{
    CallerEnvelope, GetLastSafetyCenterUpdatePayload, GetLastSafetyCenterUpdateResponse,
    SafetyCenterReply, SafetyCenterRequest, SafetyCenterStub, SendSafetyCenterUpdatePayload,
};
