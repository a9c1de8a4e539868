//! # IPC Layer
//!
//! Request payloads and the dispatch stub for the Safety Center.
//!
//! ## Security (Envelope-Only Identity)
//!
//! Payloads contain NO caller identity. The caller's uid is taken SOLELY
//! from the `CallerEnvelope`, which the transport fills in.

pub mod handler;
pub mod payloads;

pub use handler::*;
pub use payloads::*;
