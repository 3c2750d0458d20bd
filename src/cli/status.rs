//! Status command.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::engine;
use crate::error::Result;

/// Show how many values are masked and stored for each configured file.
pub fn execute(config: &Config) -> Result<()> {
    let targets = engine::status(config)?;

    output::section("Veil Status");
    output::kv("store", config.store.display());

    for target in &targets {
        let summary = if !target.present {
            "absent".to_string()
        } else {
            match target.stored {
                Some(stored) => format!("{} masked, {} stored", target.masked, stored),
                None => format!("{} masked, nothing stored", target.masked),
            }
        };
        output::kv(&target.path, summary);
    }

    let unbacked = targets
        .iter()
        .filter(|t| t.masked > t.stored.unwrap_or(0))
        .count();
    if unbacked > 0 {
        output::warn("some masked values have no stored original");
    }
    Ok(())
}
