//! Slider - a multi-step form wizard for the terminal
//!
//! The [`form`] module holds the wizard itself: field rules, the step
//! controller and the submission handlers. Everything else is the terminal
//! front end built on top of it.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod form;
pub mod keymap;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use form::{Advance, Field, FormSchema, FormValues, Step, StepController, Submitter};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
