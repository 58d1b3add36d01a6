//! Core types for the options system

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors raised by the option registry and value parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionError {
    /// Key was never registered
    #[error("unknown option '{key}'")]
    UnknownKey { key: String },

    /// Text does not have the shape required by the option's kind
    #[error("invalid value '{text}' for option '{key}': expected {expected}")]
    InvalidFormat {
        key: String,
        expected: OptionKind,
        text: String,
    },

    /// Registration pass tried to register the same key twice
    #[error("option '{key}' is already registered")]
    AlreadyRegistered { key: String },
}

/// Kind of an option. Fixed at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Bool,
    Int,
    String,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Bool => write!(f, "boolean"),
            OptionKind::Int => write!(f, "integer"),
            OptionKind::String => write!(f, "string"),
        }
    }
}

impl OptionKind {
    /// Zero value used when a key is first registered
    pub fn zero(&self) -> OptionValue {
        match self {
            OptionKind::Bool => OptionValue::Bool(false),
            OptionKind::Int => OptionValue::Int(0),
            OptionKind::String => OptionValue::String(String::new()),
        }
    }

    /// Parse text into a value of this kind
    ///
    /// Only integers can fail. Booleans treat `false`, `no`, `off`, `0` and the
    /// empty string as false and anything else as true.
    pub fn parse(&self, key: &str, text: &str) -> Result<OptionValue, OptionError> {
        match self {
            OptionKind::Bool => {
                let value = !matches!(
                    text.to_ascii_lowercase().as_str(),
                    "" | "false" | "no" | "off" | "0"
                );
                Ok(OptionValue::Bool(value))
            }
            OptionKind::Int => text
                .parse::<i64>()
                .map(OptionValue::Int)
                .map_err(|_| OptionError::InvalidFormat {
                    key: key.to_string(),
                    expected: *self,
                    text: text.to_string(),
                }),
            OptionKind::String => Ok(OptionValue::String(text.to_string())),
        }
    }
}

/// A strongly-typed option value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl OptionValue {
    /// Kind of this value
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Bool(_) => OptionKind::Bool,
            OptionValue::Int(_) => OptionKind::Int,
            OptionValue::String(_) => OptionKind::String,
        }
    }

    /// Display form of the value. Not directive syntax, see [`super::print`].
    pub fn as_text(&self) -> String {
        match self {
            OptionValue::Bool(v) => v.to_string(),
            OptionValue::Int(v) => v.to_string(),
            OptionValue::String(v) => v.clone(),
        }
    }

    /// Get as bool, returning error if wrong type
    pub fn as_bool(&self) -> anyhow::Result<bool> {
        match self {
            OptionValue::Bool(v) => Ok(*v),
            _ => anyhow::bail!("Expected Bool, got {:?}", self),
        }
    }

    /// Get as int, returning error if wrong type
    pub fn as_int(&self) -> anyhow::Result<i64> {
        match self {
            OptionValue::Int(v) => Ok(*v),
            _ => anyhow::bail!("Expected Int, got {:?}", self),
        }
    }

    /// Get as string, returning error if wrong type
    pub fn as_string(&self) -> anyhow::Result<String> {
        match self {
            OptionValue::String(v) => Ok(v.clone()),
            _ => anyhow::bail!("Expected String, got {:?}", self),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// Complete definition of an option including metadata for help output
#[derive(Debug, Clone)]
pub struct OptionDefinition {
    /// Normalized key (e.g., "limit")
    pub key: String,

    /// Detailed description for help text
    pub description: String,

    /// Kind, fixed for the lifetime of the registry
    pub kind: OptionKind,
}

/// Normalize an option key: trimmed and lower-cased
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}
