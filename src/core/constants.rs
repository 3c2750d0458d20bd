//! Constants used throughout veil.
//!
//! Centralizes magic strings and configuration values.

/// Placeholder written in place of every masked value.
pub const MASK: &str = "******";

/// Secret store file name, relative to the project root.
///
/// Holds plaintext originals. Must stay out of version control.
pub const STORE_FILE: &str = ".secrets.json";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "VEIL_LOG";

/// Service definition file (`KEY=value` assignments).
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// Structured settings file (`key: "value"` fields).
pub const SETTINGS_FILE: &str = "configs/config.yaml";
