//! `pms auth`

use crate::commands::{Api, Session};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Stand-in for builds without a remote API client
///
/// Reports that nothing was done instead of pretending to authenticate.
pub struct OfflineApi;

#[async_trait]
impl Api for OfflineApi {
    async fn authenticate(&self) {
        log::warn!("Authentication requested but no remote API client is available");
        println!(
            "  {}",
            "⚠️  No remote API client is available in this build; nothing to authenticate".bright_yellow()
        );
    }
}

/// Run the auth command through the session
///
/// The API client reports the outcome of the flow itself.
pub async fn auth_command(session: &mut Session) -> Result<()> {
    if let Some(output) = session.run_line("auth").await? {
        println!("{}", output);
    }
    log::info!("Auth command finished");
    Ok(())
}
