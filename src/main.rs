use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use pms::cli::commands::{
    auth_command, defaults_command, dump_command, options_command, shell_command, OfflineApi,
};
use pms::cli::{Cli, Commands};
use pms::commands::{Api, Session};
use pms::config::Config;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Registration and defaults failures are fatal
    let config = Config::with_defaults().context("Failed to initialize configuration")?;
    for token in &cli.set {
        config
            .set(token)
            .with_context(|| format!("Invalid --set option '{}'", token))?;
    }

    // Logging is configured by the options, so it starts after they are loaded
    pms::logging::init(&config.options)?;
    info!("Starting pms");
    debug!(
        "Loaded {} options, {} styles, {} bindings",
        config.options.count(),
        config.styles.len(),
        config.bindings.len()
    );

    let api: Arc<dyn Api> = Arc::new(OfflineApi);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Options(args) => options_command(args, &config)?,
        Commands::Defaults => defaults_command()?,
        Commands::Dump => dump_command(&config)?,
        Commands::Auth => {
            let mut session = Session::new(config, api);
            auth_command(&mut session).await?;
        }
        Commands::Shell => {
            shell_command(Session::new(config, api)).await?;
        }
    }

    Ok(())
}
