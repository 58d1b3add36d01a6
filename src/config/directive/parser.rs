use super::lexer::tokenize;
use super::SyntaxError;
use crate::config::keys::parse_chord;

/// One token of a `set` directive, before it is resolved against the registry
#[derive(Debug, Clone, PartialEq)]
pub enum SetToken {
    /// `key` or `nokey`; which one depends on the registered keys
    Bare(String),
    /// `key=value`
    Assign { key: String, value: String },
}

impl From<&str> for SetToken {
    fn from(token: &str) -> Self {
        match token.split_once('=') {
            Some((key, value)) => SetToken::Assign {
                key: key.to_string(),
                value: value.to_string(),
            },
            None => SetToken::Bare(token.to_string()),
        }
    }
}

impl From<String> for SetToken {
    fn from(token: String) -> Self {
        SetToken::from(token.as_str())
    }
}

/// A parsed configuration line
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Set(Vec<SetToken>),
    Style {
        target: String,
        attributes: Vec<String>,
    },
    Bind {
        chord: String,
        action: Vec<String>,
    },
}

/// A directive or syntax error together with its 1-based line number
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub line: usize,
    pub result: Result<Directive, SyntaxError>,
}

/// Parse a single line
///
/// Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Directive>, SyntaxError> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = tokenize(trimmed)?.into_iter();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };

    let directive = match keyword.as_str() {
        "set" => {
            let set_tokens: Vec<SetToken> = tokens.map(SetToken::from).collect();
            if set_tokens.is_empty() {
                return Err(SyntaxError::MissingArgument {
                    directive: "set",
                    expected: "at least one option",
                });
            }
            Directive::Set(set_tokens)
        }
        "style" => {
            let target = tokens.next().ok_or(SyntaxError::MissingArgument {
                directive: "style",
                expected: "a target and at least one attribute",
            })?;
            let attributes: Vec<String> = tokens.collect();
            if attributes.is_empty() {
                return Err(SyntaxError::MissingArgument {
                    directive: "style",
                    expected: "at least one attribute",
                });
            }
            Directive::Style { target, attributes }
        }
        "bind" => {
            let chord = tokens.next().ok_or(SyntaxError::MissingArgument {
                directive: "bind",
                expected: "a key chord and an action",
            })?;
            parse_chord(&chord)?;
            let action: Vec<String> = tokens.collect();
            if action.is_empty() {
                return Err(SyntaxError::MissingArgument {
                    directive: "bind",
                    expected: "an action",
                });
            }
            Directive::Bind { chord, action }
        }
        _ => return Err(SyntaxError::UnknownDirective { keyword }),
    };

    Ok(Some(directive))
}

/// Parse a whole document line by line
///
/// A bad line never prevents the following lines from being parsed.
pub fn parse_document(text: &str) -> Vec<ParsedLine> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            parse_line(line)
                .transpose()
                .map(|result| ParsedLine { line: index + 1, result })
        })
        .collect()
}
