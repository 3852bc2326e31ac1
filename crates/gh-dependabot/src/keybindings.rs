//! Keybinding system
//!
//! Maps keyboard input to commands. Supports single keys, modifier
//! combinations, and two-key sequences.
//!
//! - `KeyBinding`: a textual key pattern bound to a command ID
//! - `ParsedKeyPattern`: the matchable form of a pattern
//! - `Keymap`: a collection of bindings with matching logic

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::command_id::CommandId;

/// Second key of a sequence must follow the first within this window
const SEQUENCE_TIMEOUT: Duration = Duration::from_secs(2);

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key(s) - e.g., "ctrl+m", "g g", "G"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+M", "g g"
    pub hint: String,
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedKeyPattern {
    Single {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Two-key sequence (e.g., "g g")
    Sequence { first: char, second: char },
}

/// Parse a textual key pattern
///
/// Supported formats:
/// - Single char: "q", "?", "G" (case-sensitive, uppercase implies SHIFT)
/// - With modifiers: "ctrl+m", "alt+m", "ctrl+shift+c"
/// - Special keys: "enter", "esc", "up", "down", "home", "end", "pagedown", ...
/// - Two-key sequence: "g g"
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    if pattern.contains(' ') {
        let parts: Vec<&str> = pattern.split_whitespace().collect();
        return match parts.as_slice() {
            [first, second] if first.chars().count() == 1 && second.chars().count() == 1 => {
                Some(ParsedKeyPattern::Sequence {
                    first: first.chars().next()?,
                    second: second.chars().next()?,
                })
            }
            _ => None,
        };
    }

    let mut chars = pattern.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern::Single {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;
    Some(ParsedKeyPattern::Single { code, modifiers })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        s if s.starts_with('f') && s.len() > 1 => s[1..].parse().ok().map(KeyCode::F),
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    }
}

/// Character keys already encode SHIFT in their case, and terminals
/// disagree on whether they report it
fn normalize(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    match code {
        KeyCode::Char(_) => modifiers - KeyModifiers::SHIFT,
        _ => modifiers,
    }
}

/// First key of a two-key sequence awaiting its second key
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub timestamp: Instant,
}

/// Outcome of matching one key event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMatch {
    pub commands: Vec<CommandId>,
    /// Set when the key starts a sequence
    pub pending: Option<char>,
}

/// A collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Build a keymap; bindings with unparsable patterns are skipped
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let bindings = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern '{}'", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings }
    }

    /// Match a key event, completing `pending` if it forms a sequence
    pub fn match_key(&self, key: &KeyEvent, pending: Option<&PendingKey>) -> KeyMatch {
        let current_char = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        };

        let valid_pending = pending.filter(|p| p.timestamp.elapsed() < SEQUENCE_TIMEOUT);

        if let (Some(pending), Some(current)) = (valid_pending, current_char) {
            let completed = self.bindings.iter().find(|(_, pattern)| {
                matches!(pattern, ParsedKeyPattern::Sequence { first, second }
                    if *first == pending.key && *second == current)
            });
            if let Some((binding, _)) = completed {
                return KeyMatch {
                    commands: vec![binding.command],
                    pending: None,
                };
            }
        }

        let key_modifiers = normalize(key.code, key.modifiers);
        let commands: Vec<CommandId> = self
            .bindings
            .iter()
            .filter(|(_, pattern)| {
                matches!(pattern, ParsedKeyPattern::Single { code, modifiers }
                    if *code == key.code && normalize(*code, *modifiers) == key_modifiers)
            })
            .map(|(binding, _)| binding.command)
            .collect();

        if !commands.is_empty() {
            return KeyMatch {
                commands,
                pending: None,
            };
        }

        let starts_sequence = current_char.filter(|c| {
            self.bindings.iter().any(|(_, pattern)| {
                matches!(pattern, ParsedKeyPattern::Sequence { first, .. } if first == c)
            })
        });

        KeyMatch {
            commands: Vec::new(),
            pending: starts_sequence,
        }
    }

    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(binding, _)| binding)
    }

    /// Compact hint for a command, e.g. "j/↓"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut hints: Vec<&str> = Vec::new();
        for binding in self.bindings().filter(|b| b.command == command) {
            if !hints.contains(&binding.hint.as_str()) {
                hints.push(&binding.hint);
            }
        }

        if hints.is_empty() {
            None
        } else {
            Some(hints.join("/"))
        }
    }
}
