//! Mask command.

use tracing::debug;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::engine;
use crate::error::Result;

/// Mask secrets in every configured file.
pub fn execute(config: &Config) -> Result<()> {
    debug!(root = %config.root.display(), "mask");
    let reports = engine::mask_files(config)?;

    if reports.is_empty() {
        output::dimmed("no secrets found in configured files");
        return Ok(());
    }

    for report in &reports {
        output::success(&format!(
            "masked {} in {}",
            super::secrets(report.count),
            output::path(&report.path)
        ));
    }
    output::hint(&format!(
        "originals saved to {} (do not commit it)",
        config.store.display()
    ));
    Ok(())
}
