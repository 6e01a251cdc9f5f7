//! KeyBinding struct for mapping keys to actions
//!
//! Key strings look like "j", "down", "ctrl+c", "shift+tab", "f1".

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "tab", "ctrl+c")
    pub key: String,

    /// The action this key triggers
    pub action: Action,

    /// Optional description override (uses action description if None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Check if this binding matches the given key event.
    ///
    /// Terminals report `shift+tab` as `BackTab` with SHIFT set, and shifted
    /// symbols with SHIFT set, so SHIFT is ignored for those keys.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Ok(parsed) = self.parse() else {
            return false;
        };
        if parsed.code != code {
            return false;
        }
        // shifted symbols ('?', '+') arrive with SHIFT already applied
        let shift_implied = match code {
            KeyCode::BackTab => true,
            KeyCode::Char(c) => !c.is_ascii_alphabetic(),
            _ => false,
        };
        if shift_implied {
            return parsed.modifiers.difference(KeyModifiers::SHIFT)
                == modifiers.difference(KeyModifiers::SHIFT);
        }
        parsed.modifiers == modifiers
    }

    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Get the display string for this binding (e.g., "Ctrl+C")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    /// Get the description (custom or from action)
    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Parse a key string like "ctrl+shift+n" into KeyCode and KeyModifiers
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    if key == "shift+tab" || key == "backtab" {
        return Ok(ParsedKey {
            code: KeyCode::BackTab,
            modifiers: KeyModifiers::SHIFT,
        });
    }

    // "ctrl++" style keys: the last '+' is the key itself
    let (mods, key_part) = match key.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, last)) => (mods, last),
        None => ("", key.as_str()),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in mods.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        modifiers |= match part {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" => KeyModifiers::SUPER,
            other => return Err(format!("Unknown modifier: {}", other)),
        };
    }

    let code = parse_key_code(key_part)?;
    Ok(ParsedKey { code, modifiers })
}

/// Parse a single key name into KeyCode
fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let code = match key.trim() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        other => {
            if let Some(n) = other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Ok(KeyCode::F(n));
                }
            }
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("Unknown key: {}", other)),
            }
        }
    };
    Ok(code)
}

/// Format a key string for display (e.g., "ctrl+c" -> "Ctrl+C")
pub fn format_key_display(key: &str) -> String {
    let key = key.trim().to_lowercase();
    if key == "shift+tab" || key == "backtab" {
        return "Shift+Tab".to_string();
    }
    key.split('+')
        .map(|part| match part.trim() {
            "ctrl" | "control" => "Ctrl".to_string(),
            "alt" | "option" => "Alt".to_string(),
            "shift" => "Shift".to_string(),
            "super" | "meta" | "cmd" => "Cmd".to_string(),
            "up" => "↑".to_string(),
            "down" => "↓".to_string(),
            "left" => "←".to_string(),
            "right" => "→".to_string(),
            "enter" | "return" => "Enter".to_string(),
            "esc" | "escape" => "Esc".to_string(),
            "space" => "Space".to_string(),
            "tab" => "Tab".to_string(),
            "backspace" | "bs" => "Backspace".to_string(),
            "delete" | "del" => "Del".to_string(),
            "home" => "Home".to_string(),
            "end" => "End".to_string(),
            p if p.chars().count() == 1 => p.to_uppercase(),
            p if p.starts_with('f') && p.len() <= 3 => p.to_uppercase(),
            p => p.to_string(),
        })
        .collect::<Vec<_>>()
        .join("+")
}
