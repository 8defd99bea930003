//! userdir — user directory API client (library crate).
//!
//! Re-exports public modules for the binary, integration tests and
//! external use.

pub mod config;
pub mod constants;
pub mod directory;
pub mod env;
pub mod logging;
pub mod models;
pub mod output;
pub mod transport;
