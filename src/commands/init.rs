//! Write a default config file

use std::path::Path;

use namescreen::config::ScreenConfig;
use namescreen::output::{OperationResult, OutputMode};

/// Write the default configuration to `path`
pub fn init(path: &Path, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to overwrite.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    ScreenConfig::default().save_to(path)?;
    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);
    Ok(())
}
