//! Screen controllers for the application.
//!
//! Each screen owns its state and handles both rendering and events through
//! the [`Screen`] trait; the app only routes events and reacts to the
//! returned [`ScreenAction`].
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! │   event ──▶ screen.handle_event(event, ctx)  │
//! │                  │                           │
//! │                  ▼                           │
//! │            ScreenAction                      │
//! │    (None | Notify | ShowHelp | Quit)         │
//! └──────────────────────────────────────────────┘
//! ```

pub mod screen_trait;
pub mod wizard;

pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use wizard::WizardScreen;
