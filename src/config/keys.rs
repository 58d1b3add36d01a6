//! Key chord lexing for `bind` directives
//!
//! A chord is a sequence of key presses written as literal characters and
//! `<Name>` groups, e.g. `gg`, `<C-b>`, `z<Enter>`, `<C-w>d`.

use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Either a `<...>` group or a single literal character
static CHORD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([^<>]+)>|.").expect("chord token pattern is valid"));

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordError {
    #[error("empty key chord")]
    Empty,

    #[error("unknown key name '<{name}>' in chord '{chord}'")]
    UnknownKey { chord: String, name: String },
}

/// A single key press: key code plus modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a key binding with no modifiers
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Create a key binding with Ctrl modifier
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Create a key binding with Alt modifier
    pub fn alt(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::ALT,
        }
    }
}

/// Parse the inside of a `<...>` group
fn parse_group(chord: &str, group: &str) -> Result<KeyBinding, ChordError> {
    let mut modifiers = KeyModifiers::empty();
    let mut rest = group;

    // Modifier prefixes, only while something is left to name the key
    loop {
        let lower = rest.to_ascii_lowercase();
        let prefix = ["ctrl-", "c-", "alt-", "a-", "m-", "shift-", "s-"]
            .into_iter()
            .find(|p| lower.starts_with(*p) && rest.len() > p.len());
        let Some(prefix) = prefix else { break };
        modifiers |= match prefix {
            "ctrl-" | "c-" => KeyModifiers::CONTROL,
            "alt-" | "a-" | "m-" => KeyModifiers::ALT,
            _ => KeyModifiers::SHIFT,
        };
        rest = &rest[prefix.len()..];
    }

    let mut chars = rest.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(KeyBinding { code: KeyCode::Char(ch), modifiers });
    }

    let code = match rest.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdn" | "pagedown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" | "cr" | "return" => KeyCode::Enter,
        "space" => KeyCode::Char(' '),
        "delete" | "del" => KeyCode::Delete,
        "insert" | "ins" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" | "bs" => KeyCode::Backspace,
        "lt" => KeyCode::Char('<'),
        name => match name.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n @ 1..=12) => KeyCode::F(n),
            _ => {
                return Err(ChordError::UnknownKey {
                    chord: chord.to_string(),
                    name: group.to_string(),
                });
            }
        },
    };

    Ok(KeyBinding { code, modifiers })
}

/// Split a chord into its key presses
pub fn parse_chord(chord: &str) -> Result<Vec<KeyBinding>, ChordError> {
    if chord.is_empty() {
        return Err(ChordError::Empty);
    }

    CHORD_TOKEN
        .captures_iter(chord)
        .map(|caps| match caps.get(1) {
            Some(group) => parse_group(chord, group.as_str()),
            None => {
                let ch = caps[0].chars().next().ok_or(ChordError::Empty)?;
                Ok(KeyBinding::new(KeyCode::Char(ch)))
            }
        })
        .collect()
}

impl FromStr for KeyBinding {
    type Err = ChordError;

    /// Parse exactly one key press
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_chord(s)?.as_slice() {
            [key] => Ok(*key),
            _ => Err(ChordError::UnknownKey {
                chord: s.to_string(),
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char('<') => "lt".to_string(),
            KeyCode::Char(c) if self.modifiers.is_empty() => return write!(f, "{}", c),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::Insert => "Insert".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            other => format!("{:?}", other),
        };

        write!(f, "<")?;
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "C-")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "Alt-")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            write!(f, "S-")?;
        }
        write!(f, "{}>", name)
    }
}

/// Render a key sequence back into chord syntax
pub fn format_chord(keys: &[KeyBinding]) -> String {
    keys.iter().map(|key| key.to_string()).collect()
}
