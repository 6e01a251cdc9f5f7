//! Render descriptions.
//!
//! A [`StepView`] is everything a rendering surface needs to draw the current
//! step without reaching into the controller: which fields to show, their
//! values and errors, and which buttons are available.

use super::schema::FieldKind;
use super::step::Step;
use super::values::Field;
use indoc::indoc;

/// Heading and body text shown above a step's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepIntro {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Intro copy for a step, if it has any.
pub fn intro(step: Step) -> Option<StepIntro> {
    match step {
        Step::Name => Some(StepIntro {
            heading: "Welcome to Slider",
            body: indoc! {"
                This is a multi-step form. Fill in each step and press Enter
                to continue; you can always go back to an earlier step."},
        }),
        Step::Options | Step::Contact => None,
    }
}

/// One field as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub label: String,
    pub placeholder: Option<String>,
    pub kind: FieldKind,
    pub value: String,
    pub error: Option<String>,
}

/// The current step as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub step: Step,
    /// 1-based position of the step.
    pub index: usize,
    /// Total number of steps.
    pub total: usize,
    pub intro: Option<StepIntro>,
    pub fields: Vec<FieldView>,
    /// Label of the primary button: "Next", or "Submit" on the last step.
    pub primary_label: &'static str,
    /// Whether a "Back" button is offered.
    pub can_retreat: bool,
}

impl StepView {
    pub fn field(&self, field: Field) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.field == field)
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }
}
