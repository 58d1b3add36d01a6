//! Song list and topbar options registration

use crate::config::options::{OptionDefBuilder, OptionsRegistry};
use anyhow::Result;

pub const CENTER: &str = "center";
pub const COLUMNS: &str = "columns";
pub const LIMIT: &str = "limit";
pub const SORT: &str = "sort";
pub const TOPBAR: &str = "topbar";

/// Register all display-related options
pub fn register(registry: &OptionsRegistry) -> Result<()> {
    let before = registry.count();

    registry.register(
        OptionDefBuilder::new(CENTER)
            .description("Keep the cursor vertically centered in the song list")
            .bool_type()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new(COLUMNS)
            .description("Comma-separated list of tags shown as song list columns")
            .string_type()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new(LIMIT)
            .description("Maximum number of results fetched for searches and listings")
            .int_type()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new(SORT)
            .description("Comma-separated tag order used by the sort command")
            .string_type()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new(TOPBAR)
            .description("Topbar layout; rows separated by ';', columns by '|'")
            .string_type()
            .build()?,
    )?;

    log::debug!("Registered {} display options", registry.count() - before);
    Ok(())
}
