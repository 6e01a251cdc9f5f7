//! Screen trait and associated types.
//!
//! Screens own their state, handle events by returning a [`ScreenAction`]
//! instead of mutating app state, and read shared resources through the
//! context objects.

use crate::config::Config;
use crate::widgets::ToastKind;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::Path;

/// Read-only resources needed for rendering.
pub struct RenderContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// Read-only resources needed for event handling.
pub struct ScreenContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Configuration file path (for saving).
    pub config_path: &'a Path,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, config_path: &'a Path) -> Self {
        Self {
            config,
            config_path,
        }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScreenAction {
    /// Nothing for the app to do.
    #[default]
    None,
    /// Show a toast notification.
    Notify { kind: ToastKind, message: String },
    /// Open the help overlay.
    ShowHelp,
    /// Request to quit the application.
    Quit,
}

impl ScreenAction {
    pub fn notify(kind: ToastKind, message: impl Into<String>) -> Self {
        Self::Notify {
            kind,
            message: message.into(),
        }
    }
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::None)
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen within `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and report what the app should do next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// When true, printable keys are typed instead of being looked up in the
    /// keymap.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the screen is first shown.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
