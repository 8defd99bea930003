//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "userdir";

/// Crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` header sent with every request.
pub const USER_AGENT: &str = concat!("userdir/", env!("CARGO_PKG_VERSION"));

/// Local config filename (e.g. `.userdir.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".userdir.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "userdir";

/// Directory API used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "USERDIR_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "USERDIR_TIMEOUT_SECS";
pub const ENV_LOG: &str = "USERDIR_LOG";
