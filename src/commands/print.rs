//! `print`: show options in directive form

use super::{Command, CommandError};
use crate::config::options::{self, OptionsRegistry};
use async_trait::async_trait;
use std::sync::Arc;

pub struct Print {
    registry: Arc<OptionsRegistry>,
    keys: Vec<String>,
}

impl Print {
    pub fn new(registry: Arc<OptionsRegistry>) -> Self {
        Self {
            registry,
            keys: Vec::new(),
        }
    }
}

#[async_trait]
impl Command for Print {
    fn parse(&mut self, args: &[String]) -> Result<(), CommandError> {
        self.keys = args.to_vec();
        Ok(())
    }

    async fn exec(&mut self) -> Result<Option<String>, CommandError> {
        if self.keys.is_empty() {
            return Ok(Some(options::dump(&self.registry).trim_end().to_string()));
        }

        let lines = self
            .keys
            .iter()
            .map(|key| -> Result<String, CommandError> {
                let value = self.registry.get(key)?;
                Ok(options::print_set(&options::normalize_key(key), &value))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(lines.join("\n")))
    }
}
