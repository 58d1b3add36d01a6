//! Spotify API options registration

use crate::config::options::{OptionDefBuilder, OptionsRegistry};
use anyhow::Result;

pub const SPOTIFY_CLIENT_ID: &str = "spotifyclientid";
pub const SPOTIFY_CLIENT_SECRET: &str = "spotifyclientsecret";

/// Register the Spotify application credentials
///
/// These have no entry in the default document and stay empty until the
/// user sets them.
pub fn register(registry: &OptionsRegistry) -> Result<()> {
    let before = registry.count();

    registry.register(
        OptionDefBuilder::new(SPOTIFY_CLIENT_ID)
            .description("Client ID of the Spotify application used for authentication")
            .string_type()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new(SPOTIFY_CLIENT_SECRET)
            .description("Client secret of the Spotify application used for authentication")
            .string_type()
            .build()?,
    )?;

    log::debug!("Registered {} Spotify options", registry.count() - before);
    Ok(())
}
