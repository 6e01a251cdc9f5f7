//! Preset keymaps: Standard, Vim, Emacs
//!
//! Each preset provides a complete set of key bindings for all actions.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Tab, Enter, Esc
    #[default]
    Standard,
    /// Adds hjkl on choice fields
    Vim,
    /// Adds Ctrl+N/P/F/B/A/E/D
    Emacs,
}

impl KeymapPreset {
    /// Every preset, in display order.
    pub const ALL: [KeymapPreset; 3] = [
        KeymapPreset::Standard,
        KeymapPreset::Vim,
        KeymapPreset::Emacs,
    ];

    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = common_bindings();
        bindings.extend(match self {
            KeymapPreset::Standard => Vec::new(),
            KeymapPreset::Vim => vim_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        });
        bindings
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Bindings shared by every preset
fn common_bindings() -> Vec<KeyBinding> {
    vec![
        // Steps
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        // Fields
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        // Cursor & choice
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("space", Action::ToggleSelect),
        // Text editing
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
        // Global
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("f1", Action::Help),
        KeyBinding::new("?", Action::Help),
    ]
}

/// Vim-style extras. Plain letters only apply when no text field is focused.
fn vim_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("q", Action::Quit),
    ]
}

/// Emacs-style extras
fn emacs_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("ctrl+a", Action::Home),
        KeyBinding::new("ctrl+e", Action::End),
        KeyBinding::new("ctrl+d", Action::DeleteChar),
        KeyBinding::new("ctrl+g", Action::Cancel), // C-g is cancel in emacs
        KeyBinding::new("ctrl+h", Action::Help),
    ]
}
