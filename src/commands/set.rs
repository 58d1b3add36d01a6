//! `set`: change or show options

use super::{Command, CommandError};
use crate::config::directive::SetToken;
use crate::config::options::{print, OptionsRegistry};
use crate::config::{apply_set, SetOutcome};
use async_trait::async_trait;
use std::sync::Arc;

/// Applies `set` tokens left to right
///
/// A bare non-boolean key shows its current value in directive form.
pub struct Set {
    registry: Arc<OptionsRegistry>,
    tokens: Vec<SetToken>,
}

impl Set {
    pub fn new(registry: Arc<OptionsRegistry>) -> Self {
        Self {
            registry,
            tokens: Vec::new(),
        }
    }
}

#[async_trait]
impl Command for Set {
    fn parse(&mut self, args: &[String]) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::MissingArgument {
                command: "set",
                expected: "at least one option",
            });
        }
        self.tokens = args.iter().map(|arg| SetToken::from(arg.as_str())).collect();
        Ok(())
    }

    async fn exec(&mut self) -> Result<Option<String>, CommandError> {
        let mut shown = Vec::new();
        for token in &self.tokens {
            if let SetOutcome::Query(key) = apply_set(&self.registry, token)? {
                shown.push(print(&key, &self.registry.get(&key)?));
            }
        }
        Ok((!shown.is_empty()).then(|| shown.join(" ")))
    }
}
