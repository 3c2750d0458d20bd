//! Unmask command.

use tracing::debug;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::engine::{self, UnmaskOutcome};
use crate::error::Result;

/// Restore recorded secrets in every configured file.
pub fn execute(config: &Config) -> Result<()> {
    debug!(root = %config.root.display(), "unmask");

    let reports = match engine::unmask_files(config)? {
        UnmaskOutcome::NothingStored => {
            output::warn("no secrets found to restore");
            output::hint(&format!("make sure {} exists", config.store.display()));
            return Ok(());
        }
        UnmaskOutcome::Restored(reports) => reports,
    };

    for report in &reports {
        output::success(&format!(
            "unmasked {} in {}",
            super::secrets(report.restored),
            output::path(&report.path)
        ));
        if report.remaining > 0 {
            output::dimmed(&format!(
                "  {} stored with no ****** left to fill",
                super::secrets(report.remaining)
            ));
        }
    }
    Ok(())
}
