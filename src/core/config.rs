//! File table and runtime settings.
//!
//! The file table maps each target path to the ordered patterns applied to
//! it. It is compiled in and passed around as an immutable [`Config`]; the
//! only runtime knobs are the project root and the store location.

use std::path::{Path, PathBuf};

use crate::core::constants::{COMPOSE_FILE, SETTINGS_FILE, STORE_FILE};
use crate::core::pattern::Pattern;
use crate::core::types::TargetPath;
use crate::error::Result;

/// Value zone for `KEY=value` assignments: anything up to whitespace or `-`.
const ASSIGNMENT_VALUE: &str = r"[^\s-]+";

/// Value zone for `key: "value"` fields: anything up to the closing quote.
const QUOTED_VALUE: &str = r#"[^"]*"#;

/// One file and the patterns applied to it, in order.
#[derive(Debug, Clone)]
pub struct Target {
    /// Path relative to the project root; also the store key.
    pub path: TargetPath,
    pub patterns: Vec<Pattern>,
}

impl Target {
    pub fn new(path: impl Into<TargetPath>, patterns: Vec<Pattern>) -> Self {
        Self {
            path: path.into(),
            patterns,
        }
    }

    /// `KEY=value` assignments for each key, in order.
    fn assignments(path: &str, keys: &[&str]) -> Result<Self> {
        let patterns = keys
            .iter()
            .map(|key| Pattern::new(&format!("{key}="), ASSIGNMENT_VALUE, ""))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(path, patterns))
    }

    /// `key: "value"` fields for each key, in order.
    fn quoted_fields(path: &str, keys: &[&str]) -> Result<Self> {
        let patterns = keys
            .iter()
            .map(|key| Pattern::new(&format!(r#"{key}:\s*""#), QUOTED_VALUE, r#"""#))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(path, patterns))
    }
}

/// Everything an operation needs to know, fixed at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory that target and store paths are relative to.
    pub root: PathBuf,
    /// Secret store location (relative paths resolve against `root`).
    pub store: PathBuf,
    /// Target files, processed in this order.
    pub targets: Vec<Target>,
}

impl Config {
    /// A config over an explicit file table, using the default store file.
    pub fn new(root: impl Into<PathBuf>, targets: Vec<Target>) -> Self {
        Self {
            root: root.into(),
            store: PathBuf::from(STORE_FILE),
            targets,
        }
    }

    /// The built-in file table.
    ///
    /// # Errors
    ///
    /// Only if a built-in pattern fails to compile, which would be a bug.
    pub fn builtin(root: impl Into<PathBuf>) -> Result<Self> {
        let targets = vec![
            Target::assignments(COMPOSE_FILE, &["DATABASE_PASSWORD", "MYSQL_ROOT_PASSWORD"])?,
            Target::quoted_fields(
                SETTINGS_FILE,
                &["password", "oss_access_key", "oss_secret_key", "api_key"],
            )?,
        ];
        Ok(Self::new(root, targets))
    }

    /// Override the store location.
    pub fn with_store(mut self, store: impl Into<PathBuf>) -> Self {
        self.store = store.into();
        self
    }

    /// Absolute (or root-relative) path of the store file.
    pub fn store_path(&self) -> PathBuf {
        self.resolve(&self.store)
    }

    /// On-disk location of a target.
    pub fn target_path(&self, target: &Target) -> PathBuf {
        self.resolve(Path::new(&target.path))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
