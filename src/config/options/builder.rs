//! Fluent builder API for creating option definitions

use super::types::{normalize_key, OptionDefinition, OptionKind};
use anyhow::Result;

/// Builder for creating option definitions with a fluent API
pub struct OptionDefBuilder {
    key: String,
    description: Option<String>,
    kind: Option<OptionKind>,
}

impl OptionDefBuilder {
    /// Create a new builder for an option key
    pub fn new(key: &str) -> Self {
        Self {
            key: normalize_key(key),
            description: None,
            kind: None,
        }
    }

    /// Set the description (help text)
    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Define as a boolean option
    pub fn bool_type(mut self) -> Self {
        self.kind = Some(OptionKind::Bool);
        self
    }

    /// Define as a signed integer option
    pub fn int_type(mut self) -> Self {
        self.kind = Some(OptionKind::Int);
        self
    }

    /// Define as a string option
    pub fn string_type(mut self) -> Self {
        self.kind = Some(OptionKind::String);
        self
    }

    /// Build the option definition
    ///
    /// Returns an error if the key is empty or no type was chosen
    pub fn build(self) -> Result<OptionDefinition> {
        if self.key.is_empty() {
            anyhow::bail!("option key is required");
        }
        if self.key.contains(|c: char| c.is_whitespace() || c == '=' || c == '"') {
            anyhow::bail!("option key '{}' contains characters not allowed in a set directive", self.key);
        }
        let kind = self
            .kind
            .ok_or_else(|| anyhow::anyhow!("type is required (use bool_type, int_type or string_type)"))?;

        Ok(OptionDefinition {
            key: self.key,
            description: self.description.unwrap_or_default(),
            kind,
        })
    }
}
