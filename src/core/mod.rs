//! Core library components.
//!
//! This module contains the masking engine: the compiled file table, the
//! pure text transforms, the secret store and the file-level operations
//! built on top of them.

pub mod config;
pub mod constants;
pub mod engine;
pub mod pattern;
pub mod store;
pub mod transform;
pub mod types;
