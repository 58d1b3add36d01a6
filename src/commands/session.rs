//! Line dispatcher for the command loop

use super::{Api, Auth, Command, CommandError, Print, Set};
use crate::config::directive::{parse_line, tokenize};
use crate::config::Config;
use std::sync::Arc;

/// Owns the live configuration and runs one command line at a time
pub struct Session {
    config: Config,
    api: Arc<dyn Api>,
}

impl Session {
    pub fn new(config: Config, api: Arc<dyn Api>) -> Self {
        Self { config, api }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and run one line
    ///
    /// `style` and `bind` lines go straight to the configuration tables; all
    /// other names dispatch to a [`Command`]. Blank lines and comments are
    /// ignored.
    pub async fn run_line(&mut self, line: &str) -> Result<Option<String>, CommandError> {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let tokens = tokenize(trimmed)?;
        let Some((name, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let mut command: Box<dyn Command> = match name.as_str() {
            "auth" => Box::new(Auth::new(self.api.clone())),
            "set" => Box::new(Set::new(self.config.options.clone())),
            "print" => Box::new(Print::new(self.config.options.clone())),
            "style" | "bind" => {
                if let Some(directive) = parse_line(trimmed)? {
                    self.config.apply(&directive)?;
                }
                return Ok(None);
            }
            _ => return Err(CommandError::UnknownCommand { name: name.clone() }),
        };

        command.parse(args)?;
        log::debug!("Running command: {}", name);
        command.exec().await
    }
}
