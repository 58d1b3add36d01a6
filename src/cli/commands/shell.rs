//! Interactive command loop

use crate::commands::Session;
use anyhow::{Context, Result};
use colored::*;
use is_terminal::IsTerminal;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Read command lines from stdin until EOF or `quit`
///
/// Errors are shown and the loop continues.
pub async fn shell_command(mut session: Session) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if interactive {
            print!("{} ", ":".bright_blue().bold());
            let _ = std::io::stdout().flush();
        }

        let Some(line) = lines.next_line().await.context("Failed to read command")? else {
            break;
        };

        if matches!(line.trim(), "quit" | "q") {
            break;
        }

        match session.run_line(&line).await {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => {}
            Err(e) => {
                log::warn!("Command failed: {}: {}", line.trim(), e);
                eprintln!("{} {}", "✗".bright_red().bold(), e.to_string().red());
            }
        }
    }

    log::info!("Command loop finished");
    Ok(())
}
