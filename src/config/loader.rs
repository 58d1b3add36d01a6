//! Applies configuration documents to the option registry
//!
//! `set` directives mutate the registry. `style` and `bind` directives are
//! forwarded verbatim to a [`StyleSink`] and a [`BindSink`].

use super::directive::{parse_document, Directive, SetToken, SyntaxError};
use super::keys::{format_chord, parse_chord};
use super::options::print::quote_token;
use super::options::{normalize_key, OptionError, OptionKind, OptionValue, OptionsRegistry};
use thiserror::Error;

/// Receives `style` directives
pub trait StyleSink {
    fn style(&mut self, target: &str, attributes: &[String]);
}

/// Receives `bind` directives
pub trait BindSink {
    fn bind(&mut self, chord: &str, action: &[String]);
}

/// Result of applying one `set` token
#[derive(Debug, Clone, PartialEq)]
pub enum SetOutcome {
    /// The named option was changed
    Updated(String),
    /// A bare non-boolean key; nothing changed, the caller may show the value
    Query(String),
}

/// Apply one `set` token to the registry
///
/// A bare token naming a registered option wins over the `no` prefix, so a
/// key that happens to start with "no" stays reachable.
pub fn apply_set(registry: &OptionsRegistry, token: &SetToken) -> Result<SetOutcome, OptionError> {
    match token {
        SetToken::Assign { key, value } => {
            registry.set(key, value)?;
            Ok(SetOutcome::Updated(normalize_key(key)))
        }
        SetToken::Bare(name) => match registry.kind(name) {
            Some(OptionKind::Bool) => {
                registry.set_value(name, OptionValue::Bool(true))?;
                Ok(SetOutcome::Updated(normalize_key(name)))
            }
            Some(_) => Ok(SetOutcome::Query(normalize_key(name))),
            None => {
                let negated = name
                    .get(..2)
                    .filter(|prefix| prefix.eq_ignore_ascii_case("no"))
                    .map(|_| &name[2..]);
                match negated.map(|key| (key, registry.kind(key))) {
                    Some((key, Some(OptionKind::Bool))) => {
                        registry.set_value(key, OptionValue::Bool(false))?;
                        Ok(SetOutcome::Updated(normalize_key(key)))
                    }
                    Some((key, Some(kind))) => Err(OptionError::InvalidFormat {
                        key: normalize_key(key),
                        expected: kind,
                        text: name.clone(),
                    }),
                    _ => Err(OptionError::UnknownKey { key: normalize_key(name) }),
                }
            }
        },
    }
}

/// Failure of a standalone `set` argument list
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SetError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Option(#[from] OptionError),
}

/// A problem on one line of a document
#[derive(Error, Debug, Clone, PartialEq)]
#[error("line {line}: {message}")]
pub struct LineError {
    pub line: usize,
    pub message: String,
}

/// Summary of a document load
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of directives applied without error
    pub applied: usize,
    pub errors: Vec<LineError>,
}

impl LoadReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Applies directives to a registry and the style/bind consumers
pub struct Loader<'a> {
    registry: &'a OptionsRegistry,
    styles: &'a mut dyn StyleSink,
    bindings: &'a mut dyn BindSink,
}

impl<'a> Loader<'a> {
    pub fn new(
        registry: &'a OptionsRegistry,
        styles: &'a mut dyn StyleSink,
        bindings: &'a mut dyn BindSink,
    ) -> Self {
        Self { registry, styles, bindings }
    }

    /// Apply one directive
    ///
    /// `set` tokens are applied left to right; the first failure stops the
    /// directive and earlier tokens stay applied. Bare non-boolean keys are
    /// ignored.
    pub fn apply(&mut self, directive: &Directive) -> Result<(), OptionError> {
        match directive {
            Directive::Set(tokens) => {
                for token in tokens {
                    if let SetOutcome::Query(key) = apply_set(self.registry, token)? {
                        log::debug!("Ignoring bare non-boolean option '{}' in set directive", key);
                    }
                }
            }
            Directive::Style { target, attributes } => self.styles.style(target, attributes),
            Directive::Bind { chord, action } => self.bindings.bind(chord, action),
        }
        Ok(())
    }

    /// Apply a whole document, collecting errors per line
    pub fn load(&mut self, text: &str) -> LoadReport {
        let mut report = LoadReport::default();

        for parsed in parse_document(text) {
            let outcome = match &parsed.result {
                Ok(directive) => self.apply(directive).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };

            match outcome {
                Ok(()) => report.applied += 1,
                Err(message) => {
                    let error = LineError { line: parsed.line, message };
                    log::warn!("Configuration error: {}", error);
                    report.errors.push(error);
                }
            }
        }

        log::debug!(
            "Loaded configuration: {} directives applied, {} errors",
            report.applied,
            report.errors.len()
        );
        report
    }
}

/// In-memory record of `style` directives, last one per target wins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    entries: Vec<(String, Vec<String>)>,
}

impl StyleTable {
    pub fn get(&self, target: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(t, _)| t == target)
            .map(|(_, attributes)| attributes.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `style` lines in first-definition order
    pub fn dump(&self) -> String {
        self.entries
            .iter()
            .map(|(target, attributes)| render_line("style", target, attributes))
            .collect()
    }
}

impl StyleSink for StyleTable {
    fn style(&mut self, target: &str, attributes: &[String]) {
        match self.entries.iter_mut().find(|(t, _)| t == target) {
            Some(entry) => entry.1 = attributes.to_vec(),
            None => self.entries.push((target.to_string(), attributes.to_vec())),
        }
    }
}

/// In-memory record of `bind` directives, last one per chord wins
///
/// Chords are compared by their key presses, so `<c-b>` and `<C-b>` are the
/// same binding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindTable {
    entries: Vec<(String, Vec<String>)>,
}

impl BindTable {
    fn canonical(chord: &str) -> String {
        parse_chord(chord)
            .map(|keys| format_chord(&keys))
            .unwrap_or_else(|_| chord.to_string())
    }

    pub fn get(&self, chord: &str) -> Option<&[String]> {
        let chord = Self::canonical(chord);
        self.entries
            .iter()
            .find(|(c, _)| *c == chord)
            .map(|(_, action)| action.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `bind` lines in first-definition order
    pub fn dump(&self) -> String {
        self.entries
            .iter()
            .map(|(chord, action)| render_line("bind", chord, action))
            .collect()
    }
}

impl BindSink for BindTable {
    fn bind(&mut self, chord: &str, action: &[String]) {
        let chord = Self::canonical(chord);
        match self.entries.iter_mut().find(|(c, _)| *c == chord) {
            Some(entry) => entry.1 = action.to_vec(),
            None => self.entries.push((chord, action.to_vec())),
        }
    }
}

fn render_line(keyword: &str, head: &str, rest: &[String]) -> String {
    let mut line = format!("{} {}", keyword, quote_token(head));
    for token in rest {
        line.push(' ');
        line.push_str(&quote_token(token));
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::OptionDefinition;

    fn registry() -> OptionsRegistry {
        let registry = OptionsRegistry::new();
        for (key, kind) in [
            ("center", OptionKind::Bool),
            ("limit", OptionKind::Int),
            ("sort", OptionKind::String),
            ("notify", OptionKind::Bool),
        ] {
            registry
                .register(OptionDefinition {
                    key: key.to_string(),
                    description: String::new(),
                    kind,
                })
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_bare_bool_and_negation() {
        let registry = registry();

        apply_set(&registry, &SetToken::Bare("center".to_string())).unwrap();
        assert_eq!(registry.get("center").unwrap(), OptionValue::Bool(true));

        let outcome = apply_set(&registry, &SetToken::Bare("nocenter".to_string())).unwrap();
        assert_eq!(outcome, SetOutcome::Updated("center".to_string()));
        assert_eq!(registry.get("center").unwrap(), OptionValue::Bool(false));
    }

    #[test]
    fn test_registered_key_beats_no_prefix() {
        let registry = registry();

        apply_set(&registry, &SetToken::Bare("notify".to_string())).unwrap();
        assert_eq!(registry.get("notify").unwrap(), OptionValue::Bool(true));

        apply_set(&registry, &SetToken::Bare("nonotify".to_string())).unwrap();
        assert_eq!(registry.get("notify").unwrap(), OptionValue::Bool(false));
    }

    #[test]
    fn test_bare_non_bool_is_query() {
        let registry = registry();

        let outcome = apply_set(&registry, &SetToken::Bare("limit".to_string())).unwrap();
        assert_eq!(outcome, SetOutcome::Query("limit".to_string()));
        assert_eq!(registry.get("limit").unwrap(), OptionValue::Int(0));
    }

    #[test]
    fn test_negated_non_bool_is_invalid() {
        let registry = registry();

        let result = apply_set(&registry, &SetToken::Bare("nolimit".to_string()));
        assert!(matches!(result, Err(OptionError::InvalidFormat { ref key, .. }) if key == "limit"));
    }

    #[test]
    fn test_unknown_bare_key() {
        let registry = registry();

        assert_eq!(
            apply_set(&registry, &SetToken::Bare("nothing".to_string())),
            Err(OptionError::UnknownKey { key: "nothing".to_string() })
        );
        assert_eq!(
            apply_set(&registry, &SetToken::Bare("n".to_string())),
            Err(OptionError::UnknownKey { key: "n".to_string() })
        );
    }

    #[test]
    fn test_load_collects_line_errors() {
        let registry = registry();
        let mut styles = StyleTable::default();
        let mut bindings = BindTable::default();

        let doc = "set limit=abc\nset limit=7\nstyle title white bold\nfrob\nbind <C-b> viewport pgup\nset nosuch\n";
        let report = Loader::new(&registry, &mut styles, &mut bindings).load(doc);

        assert_eq!(report.applied, 3);
        let lines: Vec<usize> = report.errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 4, 6]);
        assert_eq!(registry.get("limit").unwrap(), OptionValue::Int(7));
        assert_eq!(styles.get("title"), Some(&["white".to_string(), "bold".to_string()][..]));
        assert_eq!(
            bindings.get("<c-b>"),
            Some(&["viewport".to_string(), "pgup".to_string()][..])
        );
    }

    #[test]
    fn test_set_stops_at_first_bad_token() {
        let registry = registry();
        let mut styles = StyleTable::default();
        let mut bindings = BindTable::default();

        let report = Loader::new(&registry, &mut styles, &mut bindings)
            .load("set center limit=x sort=year");

        assert_eq!(report.errors.len(), 1);
        assert_eq!(registry.get("center").unwrap(), OptionValue::Bool(true));
        assert_eq!(registry.get("sort").unwrap(), OptionValue::String(String::new()));
    }

    #[test]
    fn test_tables_replace_and_dump() {
        let mut styles = StyleTable::default();
        styles.style("cursor", &["black".to_string(), "white".to_string()]);
        styles.style("cursor", &["red".to_string()]);
        assert_eq!(styles.len(), 1);
        assert_eq!(styles.dump(), "style cursor red\n");

        let mut bindings = BindTable::default();
        bindings.bind("z<Enter>", &["viewport".to_string(), "low".to_string()]);
        bindings.bind("<Space>", &["pause".to_string()]);
        bindings.bind("<space>", &["play".to_string()]);
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.dump(), "bind z<Enter> viewport low\nbind <Space> play\n");
    }
}
