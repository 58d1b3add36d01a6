//! Runtime configuration for pms
//!
//! This module provides:
//! - The typed option registry (`options`)
//! - The configuration language lexer and parser (`directive`, `keys`)
//! - Loading documents into the registry and the style/bind tables (`loader`)
//! - The built-in default document (`defaults`)

use anyhow::Result;
use std::sync::Arc;

pub mod defaults;
pub mod directive;
pub mod keys;
pub mod loader;
pub mod options;

pub use defaults::DEFAULTS;
pub use loader::{
    apply_set, BindSink, BindTable, LineError, LoadReport, Loader, SetError, SetOutcome,
    StyleSink, StyleTable,
};

use directive::{tokenize, Directive, SetToken, SyntaxError};
use options::{OptionError, OptionsRegistry};

/// Live configuration: option values plus the forwarded styles and bindings
#[derive(Debug)]
pub struct Config {
    /// Options registry shared with every reader
    pub options: Arc<OptionsRegistry>,

    /// `style` directives seen so far
    pub styles: StyleTable,

    /// `bind` directives seen so far
    pub bindings: BindTable,
}

impl Config {
    /// Registry with every known option at its zero value; nothing loaded
    pub fn new() -> Result<Self> {
        let registry = OptionsRegistry::new();
        options::registrations::register_all(&registry)?;
        log::debug!("Initialized options registry with {} options", registry.count());

        Ok(Self {
            options: Arc::new(registry),
            styles: StyleTable::default(),
            bindings: BindTable::default(),
        })
    }

    /// Registry with the built-in default document applied
    ///
    /// Errors in the default document are authoring defects and fail here.
    pub fn with_defaults() -> Result<Self> {
        let mut config = Self::new()?;
        let report = config.load(DEFAULTS);
        if let Some(first) = report.errors.first() {
            anyhow::bail!(
                "default configuration has {} error(s), first at {}",
                report.errors.len(),
                first
            );
        }
        Ok(config)
    }

    /// Apply a configuration document
    pub fn load(&mut self, text: &str) -> LoadReport {
        Loader::new(&self.options, &mut self.styles, &mut self.bindings).load(text)
    }

    /// Apply a single parsed directive
    pub fn apply(&mut self, directive: &Directive) -> Result<(), OptionError> {
        Loader::new(&self.options, &mut self.styles, &mut self.bindings).apply(directive)
    }

    /// Apply the arguments of a `set` directive, e.g. `limit=25 nocenter`
    ///
    /// Quoting follows the document grammar. Tokens apply left to right and
    /// the first failure stops the rest.
    pub fn set(&self, args: &str) -> Result<Vec<SetOutcome>, SetError> {
        let tokens = tokenize(args)?;
        if tokens.is_empty() {
            return Err(SyntaxError::MissingArgument {
                directive: "set",
                expected: "at least one option",
            }
            .into());
        }

        tokens
            .iter()
            .map(|token| apply_set(&self.options, &SetToken::from(token.as_str())).map_err(SetError::from))
            .collect()
    }

    /// Render the whole configuration as a document that loads back into it
    pub fn dump(&self) -> String {
        let mut out = String::from("# Options\n");
        out.push_str(&options::dump(&self.options));
        out.push_str("\n# Styles\n");
        out.push_str(&self.styles.dump());
        out.push_str("\n# Keyboard bindings\n");
        out.push_str(&self.bindings.dump());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use options::OptionValue;

    #[test]
    fn test_new_has_zero_values() {
        let config = Config::new().unwrap();

        assert_eq!(config.options.get("limit").unwrap(), OptionValue::Int(0));
        assert!(config.styles.is_empty());
        assert!(config.bindings.is_empty());
    }

    #[test]
    fn test_with_defaults() {
        let config = Config::with_defaults().unwrap();

        assert_eq!(config.options.get("limit").unwrap(), OptionValue::Int(50));
        assert_eq!(config.options.get("center").unwrap(), OptionValue::Bool(false));
        assert_eq!(
            config.styles.get("currentSong"),
            Some(&["black".to_string(), "yellow".to_string()][..])
        );
        assert_eq!(config.bindings.get("<C-c>"), Some(&["quit".to_string()][..]));
    }

    #[test]
    fn test_set_token() {
        let config = Config::with_defaults().unwrap();

        config.set("limit=25").unwrap();
        config.set("center").unwrap();
        assert_eq!(config.options.get("limit").unwrap(), OptionValue::Int(25));
        assert_eq!(config.options.get("center").unwrap(), OptionValue::Bool(true));
        assert!(config.set("limit=abc").is_err());
        assert_eq!(config.options.get("limit").unwrap(), OptionValue::Int(25));
    }

    #[test]
    fn test_set_uses_document_quoting() {
        let config = Config::with_defaults().unwrap();

        config.set(r#"logfile="/tmp/my log""#).unwrap();
        assert_eq!(
            config.options.get("logfile").unwrap(),
            OptionValue::String("/tmp/my log".to_string())
        );

        config.set(r#"topbar="say \"hi\" \\o/""#).unwrap();
        assert_eq!(
            config.options.get("topbar").unwrap(),
            OptionValue::String(r#"say "hi" \o/"#.to_string())
        );
    }

    #[test]
    fn test_set_matches_loaded_line() {
        let mut loaded = Config::new().unwrap();
        let report = loaded.load(r#"set logfile="/tmp/my log" limit=7 center"#);
        assert!(report.is_ok());

        let config = Config::new().unwrap();
        let outcomes = config.set(r#"logfile="/tmp/my log" limit=7 center"#).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(config.options.list(), loaded.options.list());
    }

    #[test]
    fn test_set_syntax_errors() {
        let config = Config::new().unwrap();

        assert!(matches!(config.set("   "), Err(SetError::Syntax(SyntaxError::MissingArgument { .. }))));
        assert!(matches!(
            config.set(r#"sort="open"#),
            Err(SetError::Syntax(SyntaxError::UnterminatedQuote { column: 6 }))
        ));
        assert!(matches!(config.set("bogus=1"), Err(SetError::Option(OptionError::UnknownKey { .. }))));
    }
}
