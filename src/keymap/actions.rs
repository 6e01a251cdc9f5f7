//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Step navigation ============
    /// Validate the current step and go to the next one (or submit)
    Confirm,
    /// Go back to the previous step
    Cancel,

    // ============ Field navigation ============
    /// Focus the next field
    NextTab,
    /// Focus the previous field
    PrevTab,
    /// Focus the field above
    MoveUp,
    /// Focus the field below
    MoveDown,

    // ============ Cursor / choice ============
    /// Move the cursor (or the choice highlight) left
    MoveLeft,
    /// Move the cursor (or the choice highlight) right
    MoveRight,
    /// Jump to start of input
    Home,
    /// Jump to end of input
    End,
    /// Select or deselect the highlighted option
    ToggleSelect,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Show help overlay
    Help,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::Confirm => "Next / Submit",
            Action::Cancel => "Back",
            Action::NextTab => "Next field",
            Action::PrevTab => "Previous field",
            Action::MoveUp => "Field above",
            Action::MoveDown => "Field below",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::Home => "Start of input",
            Action::End => "End of input",
            Action::ToggleSelect => "Toggle option",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::Quit => "Quit",
            Action::Help => "Show help",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::Confirm | Action::Cancel => "Steps",

            Action::NextTab | Action::PrevTab | Action::MoveUp | Action::MoveDown => "Fields",

            Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End
            | Action::ToggleSelect => "Cursor & Choice",

            Action::Backspace | Action::DeleteChar => "Text Editing",

            Action::Quit | Action::Help => "Global",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_description() {
        assert_eq!(Action::Confirm.description(), "Next / Submit");
        assert_eq!(Action::Quit.description(), "Quit");
    }

    #[test]
    fn test_action_category() {
        assert_eq!(Action::Cancel.category(), "Steps");
        assert_eq!(Action::NextTab.category(), "Fields");
        assert_eq!(Action::Help.category(), "Global");
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::NextTab).unwrap();
        assert_eq!(json, "\"next_tab\"");
    }

    #[test]
    fn test_action_deserialization() {
        let action: Action = serde_json::from_str("\"toggle_select\"").unwrap();
        assert_eq!(action, Action::ToggleSelect);
    }
}
