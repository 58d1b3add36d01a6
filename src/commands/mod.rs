//! Commands available in the interactive command loop
//!
//! Every command is parsed before it runs: `parse` consumes the arguments
//! following the command name and `exec` is only called when parsing
//! succeeded.

pub mod api;
pub mod auth;
pub mod print;
pub mod session;
pub mod set;

pub use api::Api;
pub use auth::Auth;
pub use print::Print;
pub use session::Session;
pub use set::Set;

use crate::config::directive::SyntaxError;
use crate::config::options::OptionError;
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced to the user at the command boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("unknown command '{name}'")]
    UnknownCommand { name: String },

    #[error("'{command}' takes no arguments, got '{argument}'")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },

    #[error("'{command}' requires {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error(transparent)]
    Option(#[from] OptionError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// A command that can be parsed from tokens and executed
#[async_trait]
pub trait Command: Send {
    /// Consume the tokens following the command name
    fn parse(&mut self, args: &[String]) -> Result<(), CommandError>;

    /// Run the command; an optional message is shown to the user
    async fn exec(&mut self) -> Result<Option<String>, CommandError>;
}

/// Fail with `UnexpectedArgument` if any token is left
pub fn parse_end(command: &'static str, args: &[String]) -> Result<(), CommandError> {
    match args.first() {
        Some(argument) => Err(CommandError::UnexpectedArgument {
            command,
            argument: argument.clone(),
        }),
        None => Ok(()),
    }
}
