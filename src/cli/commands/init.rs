use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default config into the current directory.
///
/// An existing config file is never overwritten; that case is reported as
/// a failed init rather than an internal error.
pub fn init() -> Result<CommandResult> {
    let summary = write_default_config(Path::new(CONFIG_FILE_NAME))?;
    Ok(finish(CommandSummary::Init(summary), Vec::new(), 0))
}

fn write_default_config(config_path: &Path) -> Result<InitSummary> {
    if config_path.exists() {
        return Ok(InitSummary {
            created: false,
            error: Some(format!("{} already exists", CONFIG_FILE_NAME)),
        });
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(InitSummary {
        created: true,
        error: None,
    })
}
