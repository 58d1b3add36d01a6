//! Registration of all application options

pub mod display;
pub mod logging;
pub mod spotify;

use super::OptionsRegistry;
use anyhow::Result;

pub use display::{CENTER, COLUMNS, LIMIT, SORT, TOPBAR};
pub use logging::{LOG_FILE, LOG_OVERWRITE};
pub use spotify::{SPOTIFY_CLIENT_ID, SPOTIFY_CLIENT_SECRET};

/// Register all options from all modules
///
/// Default values are not set here; they come from the default document.
pub fn register_all(registry: &OptionsRegistry) -> Result<()> {
    display::register(registry)?;
    logging::register(registry)?;
    spotify::register(registry)?;
    Ok(())
}
