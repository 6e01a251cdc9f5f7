use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use slider::config::Config;
use slider::keymap::{Action, KeyBinding, KeymapPreset};
use slider::screens::{ScreenAction, WizardScreen};
use slider::form::{LogSubmitter, Step};
use tempfile::TempDir;

fn saved_and_reloaded(config: &Config) -> Config {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    config.save(&config_path).unwrap();
    Config::load_or_create(&config_path).unwrap()
}

#[test]
fn test_overrides_survive_round_trip_and_shadow_preset() {
    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    config.keymap.overrides.push(KeyBinding::new("x", Action::Quit));
    config.keymap.overrides.push(KeyBinding::new("ctrl+o", Action::Confirm));

    let loaded = saved_and_reloaded(&config);
    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    let keymap = &loaded.keymap;
    assert_eq!(keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE), Some(Action::Quit));
    // both preset quit keys are shadowed by the override
    assert_eq!(keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE), None);
    assert_eq!(keymap.get_action(KeyCode::Char('c'), KeyModifiers::CONTROL), None);
    // Enter no longer advances
    assert_eq!(keymap.get_action(KeyCode::Enter, KeyModifiers::NONE), None);
    assert_eq!(
        keymap.get_action(KeyCode::Char('o'), KeyModifiers::CONTROL),
        Some(Action::Confirm)
    );
    // untouched vim bindings still apply
    assert_eq!(keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE), Some(Action::MoveDown));
}

#[test]
fn test_serialized_keymap_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Emacs;
    config.keymap.overrides.push(KeyBinding::new("f2", Action::Help));
    config.save(&config_path).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[keymap]"));
    assert!(content.contains("preset = \"emacs\""));
    assert!(content.contains("action = \"help\""));
}

#[test]
fn test_override_drives_wizard() {
    let mut config = Config::default();
    config.keymap.overrides.push(KeyBinding::new("ctrl+o", Action::Confirm));
    let keymap = saved_and_reloaded(&config).keymap;

    let mut wizard = WizardScreen::new(Box::new(LogSubmitter));
    for c in "Al".chars() {
        wizard.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), &keymap);
    }
    wizard.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE), &keymap);
    for c in "Ng".chars() {
        wizard.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), &keymap);
    }

    let action = wizard.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &keymap);
    assert_eq!(action, ScreenAction::None);
    assert_eq!(wizard.controller().current(), Step::Name);

    wizard.handle_key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL), &keymap);
    assert_eq!(wizard.controller().current(), Step::Options);
}
