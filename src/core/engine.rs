//! File-level mask, unmask and status operations.
//!
//! Each target is read whole, transformed in memory and written back in
//! place. Targets are processed one after another in table order; a failure
//! aborts the run but leaves earlier targets as already rewritten.

use std::path::Path;

use tracing::debug;

use crate::core::config::Config;
use crate::core::store::SecretStore;
use crate::core::transform;
use crate::core::types::TargetPath;
use crate::error::{Result, TargetError};

/// Values masked in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: TargetPath,
    pub count: usize,
}

/// Values restored in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmaskReport {
    pub path: TargetPath,
    pub restored: usize,
    /// Stored values that found no mask token to fill.
    pub remaining: usize,
}

/// Outcome of an unmask run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnmaskOutcome {
    /// The store is missing, unreadable or empty; no file was touched.
    NothingStored,
    /// One report per present target that had a store entry.
    Restored(Vec<UnmaskReport>),
}

/// Snapshot of one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetStatus {
    pub path: TargetPath,
    pub present: bool,
    /// Mask tokens currently in the file.
    pub masked: usize,
    /// Values held in the store, if it has an entry.
    pub stored: Option<usize>,
}

/// Mask every configured target and record the originals.
///
/// Targets that don't exist are skipped. Targets with nothing to capture are
/// left untouched and keep whatever store entry they had. The store is
/// written before each target is rewritten, so originals are on disk before
/// they disappear from the file, and once more at the end so a first run
/// always leaves a store behind.
///
/// # Errors
///
/// Returns `TargetError` or `StoreError` on I/O failure.
pub fn mask_files(config: &Config) -> Result<Vec<FileReport>> {
    let store_path = config.store_path();
    let mut store = SecretStore::load(&store_path);
    let mut reports = Vec::new();

    for target in &config.targets {
        let path = config.target_path(target);
        let Some(content) = read_target(&path)? else {
            debug!(path = %path.display(), "target absent, skipping");
            continue;
        };

        let masked = transform::mask(&content, &target.patterns);
        if masked.secrets.is_empty() {
            debug!(path = %path.display(), "nothing to mask");
            continue;
        }

        let count = masked.secrets.len();
        store.insert(target.path.clone(), masked.secrets);
        store.save(&store_path)?;
        write_target(&path, &masked.content)?;

        debug!(path = %path.display(), count, "masked");
        reports.push(FileReport {
            path: target.path.clone(),
            count,
        });
    }

    store.save(&store_path)?;
    Ok(reports)
}

/// Restore masked values in every configured target from the store.
///
/// The store on disk is left as is.
///
/// # Errors
///
/// Returns `TargetError` on I/O failure.
pub fn unmask_files(config: &Config) -> Result<UnmaskOutcome> {
    let store = SecretStore::load(&config.store_path());
    if store.is_empty() {
        return Ok(UnmaskOutcome::NothingStored);
    }

    let mut reports = Vec::new();
    for target in &config.targets {
        let Some(secrets) = store.queue(&target.path) else {
            debug!(path = %target.path, "no store entry, skipping");
            continue;
        };
        let path = config.target_path(target);
        let Some(content) = read_target(&path)? else {
            debug!(path = %path.display(), "target absent, skipping");
            continue;
        };

        let unmasked = transform::unmask(&content, &target.patterns, secrets);
        if unmasked.restored > 0 {
            write_target(&path, &unmasked.content)?;
        }

        debug!(
            path = %path.display(),
            restored = unmasked.restored,
            remaining = unmasked.remaining.len(),
            "unmasked"
        );
        reports.push(UnmaskReport {
            path: target.path.clone(),
            restored: unmasked.restored,
            remaining: unmasked.remaining.len(),
        });
    }

    Ok(UnmaskOutcome::Restored(reports))
}

/// Report mask tokens and stored values per target without changing anything.
///
/// # Errors
///
/// Returns `TargetError` if a present target can't be read.
pub fn status(config: &Config) -> Result<Vec<TargetStatus>> {
    let store = SecretStore::load(&config.store_path());

    config
        .targets
        .iter()
        .map(|target| -> Result<TargetStatus> {
            let content = read_target(&config.target_path(target))?;
            Ok(TargetStatus {
                path: target.path.clone(),
                present: content.is_some(),
                masked: content
                    .as_deref()
                    .map_or(0, |text| transform::count_masked(text, &target.patterns)),
                stored: store.get(&target.path).map(<[_]>::len),
            })
        })
        .collect()
}

/// Read a target, or `None` if it doesn't exist.
fn read_target(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|source| TargetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(content))
}

fn write_target(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| TargetError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
