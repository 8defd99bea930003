//! Configuration loading and layering.
//!
//! Handles `.userdir.toml` loading, environment variable resolution,
//! and leaves CLI flag overrides to the binary.

pub mod loader;

pub use loader::{ApiConfig, Config, ConfigError, LogConfig};
