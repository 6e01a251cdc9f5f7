//! Form core: record, steps, schema and the step controller.
//!
//! Nothing in here knows about the terminal. The TUI drives a
//! [`StepController`] and draws whatever [`StepController::view`] describes.

pub mod controller;
pub mod error;
pub mod schema;
pub mod step;
pub mod submit;
pub mod values;
pub mod view;

pub use controller::{Advance, StepController};
pub use error::FieldError;
pub use schema::{ChoiceOption, FieldKind, FieldSpec, FormSchema, Rule};
pub use step::Step;
pub use submit::{JsonLinesSubmitter, LogSubmitter, SubmissionRecord, Submitter};
pub use values::{Field, FormValues};
pub use view::{FieldView, StepIntro, StepView};
