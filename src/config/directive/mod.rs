//! Configuration language: line lexer and directive parser
//!
//! A document is a sequence of lines. Each line is a comment (`#`), blank, or
//! one of the `set`, `style` and `bind` directives.

pub mod lexer;
pub mod parser;

pub use lexer::tokenize;
pub use parser::{parse_document, parse_line, Directive, ParsedLine, SetToken};

use crate::config::keys::ChordError;
use thiserror::Error;

/// Line-level syntax errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("unterminated double quote starting at column {column}")]
    UnterminatedQuote { column: usize },

    #[error("unknown directive '{keyword}'")]
    UnknownDirective { keyword: String },

    #[error("'{directive}' requires {expected}")]
    MissingArgument {
        directive: &'static str,
        expected: &'static str,
    },

    #[error(transparent)]
    Chord(#[from] ChordError),
}
