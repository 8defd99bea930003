//! Shared types used across all modules.
//!
//! The user entity and the per-request envelope live here so that the
//! transport and directory layers depend on this module rather than on
//! each other's internals.

pub mod envelope;
pub mod user;

pub use envelope::ResponseEnvelope;
pub use user::{MalformedRecordError, User};
