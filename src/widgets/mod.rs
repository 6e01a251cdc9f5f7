// Reusable UI widgets

pub mod choice;
pub mod step_indicator;
pub mod text_input;
pub mod toast;

pub use choice::ChoiceWidget;
pub use step_indicator::StepIndicator;
pub use text_input::{TextInputWidget, TextInputWidgetExt};
pub use toast::{Toast, ToastKind, ToastManager, ToastWidget};
