//! Veil - Mask secrets in project config files before they reach git.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mask          # Mask secrets in configured files
//! │   ├── unmask        # Restore secrets from the store
//! │   ├── status        # Per-file overview
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # Built-in file table and runtime paths
//!     ├── pattern       # prefix/value/suffix match rules
//!     ├── transform     # Pure mask/unmask over text
//!     ├── store         # .secrets.json persistence
//!     └── engine        # File-level operations
//! ```
//!
//! # Round trip
//!
//! `mask` replaces each secret with `******` and records the original, in
//! scan order, in `.secrets.json`. `unmask` walks the same patterns in the
//! same order and hands the recorded values back out front to back. The
//! store holds plaintext and must stay out of version control.

pub mod cli;
pub mod core;
pub mod error;
