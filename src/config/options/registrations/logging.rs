//! Logging options registration

use crate::config::options::{OptionDefBuilder, OptionsRegistry};
use anyhow::Result;

pub const LOG_FILE: &str = "logfile";
pub const LOG_OVERWRITE: &str = "logoverwrite";

/// Register all logging-related options
pub fn register(registry: &OptionsRegistry) -> Result<()> {
    let before = registry.count();

    registry.register(
        OptionDefBuilder::new(LOG_FILE)
            .description("Path of the log file; empty logs to standard error")
            .string_type()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new(LOG_OVERWRITE)
            .description("Truncate the log file on startup instead of appending")
            .bool_type()
            .build()?,
    )?;

    log::debug!("Registered {} logging options", registry.count() - before);
    Ok(())
}
