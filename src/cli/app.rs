use super::commands::OptionsCommands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pms")]
#[command(about = "Configuration tools for the pms terminal music player")]
pub struct Cli {
    /// Apply a set token after the defaults, e.g. --set limit=25 or --set center
    #[arg(long = "set", value_name = "OPTION", global = true)]
    pub set: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every option as a set directive
    Options(OptionsCommands),
    /// Print the built-in default configuration
    Defaults,
    /// Print the active configuration: options, styles and key bindings
    Dump,
    /// Authenticate against the music service
    Auth,
    /// Read commands from standard input (default)
    Shell,
}
