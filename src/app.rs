use crate::components::HelpOverlay;
use crate::config::Config;
use crate::screens::{RenderContext, Screen, ScreenAction, ScreenContext, WizardScreen};
use crate::tui::Tui;
use crate::widgets::{ToastKind, ToastManager};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    tui: Tui,
    wizard: WizardScreen,
    toasts: ToastManager,
    show_help: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Result<Self> {
        let tui = Tui::new()?;
        let wizard = WizardScreen::new(config.submitter());
        Ok(Self {
            config,
            config_path,
            tui,
            wizard,
            toasts: ToastManager::new(),
            show_help: false,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.wizard
            .on_enter(&ScreenContext::new(&self.config, &self.config_path))?;

        // Main event loop
        loop {
            self.toasts.tick();
            self.draw()?;

            if self.should_quit {
                break;
            }

            if let Some(event) = self.tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event)?;
            }
        }

        self.tui.exit()?;
        info!("Exited");
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let config = &self.config;
        let config_path = self.config_path.display().to_string();
        let wizard = &mut self.wizard;
        let toasts = &self.toasts;
        let show_help = self.show_help;

        let mut result = Ok(());
        self.tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            result = wizard.render(frame, area, &RenderContext::new(config));
            if result.is_ok() && show_help {
                result = HelpOverlay::render(frame, area, &config.keymap, &config_path);
            }
            toasts.render(frame, area);
        })?;
        result
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if self.show_help {
            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press {
                    self.handle_help_key(key);
                }
            }
            return Ok(());
        }

        let ctx = ScreenContext::new(&self.config, &self.config_path);
        let action = self.wizard.handle_event(event, &ctx)?;
        self.apply(action);
        Ok(())
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Notify { kind, message } => match kind {
                ToastKind::Success => self.toasts.success(message),
                ToastKind::Info => self.toasts.info(message),
                ToastKind::Error => self.toasts.error(message),
            },
            ScreenAction::ShowHelp => self.show_help = true,
            ScreenAction::Quit => self.should_quit = true,
        }
    }

    /// While help is open: a digit switches preset, any other key closes it.
    fn handle_help_key(&mut self, key: KeyEvent) {
        let preset = match key.code {
            KeyCode::Char(c) => HelpOverlay::preset_for_key(c),
            _ => None,
        };
        let Some(preset) = preset else {
            self.show_help = false;
            return;
        };
        if preset == self.config.keymap.preset {
            return;
        }

        self.config.keymap.preset = preset;
        match self.config.save(&self.config_path) {
            Ok(()) => {
                info!(preset = preset.name(), "Keymap preset changed");
                self.toasts.info(format!("Keymap preset: {}", preset.name()));
            }
            Err(e) => {
                error!(error = %format!("{:#}", e), "Failed to save config");
                self.toasts.error(format!("Failed to save config: {}", e));
            }
        }
    }
}
