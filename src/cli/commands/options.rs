//! Configuration dump commands

use crate::config::options::{self, OptionValue};
use crate::config::{Config, DEFAULTS};
use anyhow::{Context, Result};
use clap::Args;
use std::collections::BTreeMap;

#[derive(Args)]
pub struct OptionsCommands {
    /// Print a JSON object instead of set directives
    #[arg(long)]
    pub json: bool,

    /// Precede each directive with a comment holding the option's kind and description
    #[arg(long, conflicts_with = "json")]
    pub describe: bool,
}

/// Render options as set directives or JSON
pub fn render_options(args: &OptionsCommands, config: &Config) -> Result<String> {
    if args.json {
        let values: BTreeMap<String, OptionValue> = config.options.list().into_iter().collect();
        let json = serde_json::to_string_pretty(&values).context("Failed to serialize options")?;
        Ok(json + "\n")
    } else if args.describe {
        let mut out = String::new();
        for def in config.options.definitions() {
            let value = config.options.get(&def.key)?;
            out.push_str(&format!("# {} ({})\n", def.description, def.kind));
            out.push_str(&options::print_set(&def.key, &value));
            out.push('\n');
        }
        Ok(out)
    } else {
        Ok(options::dump(&config.options))
    }
}

/// Print every option
pub fn options_command(args: OptionsCommands, config: &Config) -> Result<()> {
    print!("{}", render_options(&args, config)?);
    Ok(())
}

/// Print the built-in default document
pub fn defaults_command() -> Result<()> {
    print!("{}", DEFAULTS.trim_start());
    Ok(())
}

/// Print the active configuration
pub fn dump_command(config: &Config) -> Result<()> {
    print!("{}", config.dump());
    Ok(())
}
