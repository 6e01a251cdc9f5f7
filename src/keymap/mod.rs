//! Keymap configuration module
//!
//! Customizable keyboard shortcuts with preset keymaps (standard, vim, emacs)
//! and per-action overrides from the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event.
    ///
    /// An overridden action loses all of its preset bindings.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Get all bindings (overrides + preset) for display in help
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Override keys that fail to parse, as `(key, reason)`.
    pub fn invalid_overrides(&self) -> Vec<(String, String)> {
        self.overrides
            .iter()
            .filter_map(|b| b.parse().err().map(|e| (b.key.clone(), e)))
            .collect()
    }

    /// Get the display string for a specific action (e.g., Action::Quit -> "Ctrl+C")
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .into_iter()
            .find(|b| b.action == action)
            .map(|b| b.display())
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Footer hints for the wizard.
    pub fn footer_wizard(&self, can_retreat: bool, primary_label: &str) -> String {
        let mut parts = vec![format!(
            "{}: {}",
            primary_label,
            self.get_key_display_for_action(Action::Confirm)
        )];
        if can_retreat {
            parts.push(format!(
                "Back: {}",
                self.get_key_display_for_action(Action::Cancel)
            ));
        }
        parts.push(format!(
            "Field: {}",
            self.get_key_display_for_action(Action::NextTab)
        ));
        parts.push(format!(
            "Help: {}",
            self.get_key_display_for_action(Action::Help)
        ));
        parts.push(format!(
            "Quit: {}",
            self.get_key_display_for_action(Action::Quit)
        ));
        parts.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
    }

    #[test]
    fn test_get_action_from_preset() {
        let keymap = Keymap::default();
        let action = keymap.get_action(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(action, Some(Action::Confirm));
        let action = keymap.get_action(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action, Some(Action::Quit));
    }

    #[test]
    fn test_override_takes_precedence() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("ctrl+q", Action::Quit)],
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('q'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        // preset binding for the overridden action is shadowed
        assert_eq!(
            keymap.get_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            None
        );
    }

    #[test]
    fn test_invalid_overrides_reported() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![
                KeyBinding::new("ctrl+q", Action::Quit),
                KeyBinding::new("hyper+z", Action::Help),
            ],
        };
        let invalid = keymap.invalid_overrides();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].0, "hyper+z");
    }

    #[test]
    fn test_footer_wizard() {
        let keymap = Keymap::default();
        let footer = keymap.footer_wizard(false, "Next");
        assert!(footer.starts_with("Next: Enter"));
        assert!(!footer.contains("Back"));
        let footer = keymap.footer_wizard(true, "Submit");
        assert!(footer.contains("Back: Esc"));
        assert!(footer.contains("Quit: Ctrl+C"));
    }
}
