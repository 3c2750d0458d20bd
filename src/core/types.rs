//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A target file path as written in the file table (e.g. `configs/config.yaml`).
///
/// Also the key of the secret store, so it is kept relative to the project root.
pub type TargetPath = String;

/// An original secret value captured from a target file.
pub type SecretValue = String;
