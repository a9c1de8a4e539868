//! # Domain Layer
//!
//! Pure domain logic for the Safety Center: the report model, its storage
//! key, the in-memory store and the error taxonomy.
//!
//! This module performs no access control and no I/O. Authorization lives
//! behind the `AccessGuard` port.

pub mod entities;
pub mod errors;
pub mod store;

pub use entities::*;
pub use errors::*;
pub use store::*;
