//! Step controller: the wizard's state machine.
//!
//! ```text
//!            advance (valid)          advance (valid)
//!   ┌──────┐ ─────────────▶ ┌─────────┐ ─────────────▶ ┌─────────┐
//!   │ Name │                │ Options │                │ Contact │──┐ advance (valid)
//!   └──────┘ ◀───────────── └─────────┘ ◀───────────── └─────────┘  │ = submit
//!              retreat                    retreat            ▲      │
//!                                                            └──────┘
//! ```
//!
//! A failed validation never moves the step; it only records the errors so
//! they can be shown next to the offending fields.

use super::error::FieldError;
use super::schema::{FieldKind, FormSchema};
use super::step::Step;
use super::submit::Submitter;
use super::values::{Field, FormValues};
use super::view::{intro, FieldView, StepView};
use anyhow::Result;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Outcome of [`StepController::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The current step validated and the next one is now shown.
    Moved { from: Step, to: Step },
    /// The current step has violations; nothing moved.
    Rejected(Vec<FieldError>),
    /// The last step validated and the record was handed to the submitter.
    Submitted,
}

/// Owns the record, the current step and the visible field errors.
#[derive(Debug, Clone)]
pub struct StepController {
    schema: FormSchema,
    values: FormValues,
    current: Step,
    errors: BTreeMap<Field, String>,
    submissions: usize,
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}

impl StepController {
    /// Create a controller on the first step with empty values.
    pub fn new() -> Self {
        Self::with_schema(FormSchema::standard())
    }

    pub fn with_schema(schema: FormSchema) -> Self {
        Self {
            schema,
            values: FormValues::new(),
            current: Step::first(),
            errors: BTreeMap::new(),
            submissions: 0,
        }
    }

    /// Start from pre-filled values.
    pub fn with_values(mut self, values: FormValues) -> Self {
        self.values = values;
        self
    }

    pub fn current(&self) -> Step {
        self.current
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Number of successful submissions so far.
    pub fn submissions(&self) -> usize {
        self.submissions
    }

    /// Error currently shown for a field.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// All errors currently shown, in field order.
    pub fn errors(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Update one field from user input.
    ///
    /// A field that already shows an error is re-checked right away, and a
    /// choice field is always re-checked, so the message tracks the input.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);

        let is_choice = matches!(
            self.schema.spec(field).map(|s| s.kind),
            Some(FieldKind::Choice(_))
        );
        if is_choice || self.errors.contains_key(&field) {
            self.revalidate(field);
        }
    }

    fn revalidate(&mut self, field: Field) {
        match self.schema.validate_field(field, &self.values) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e.message);
            }
        }
    }

    /// Validate the current step, then move forward or submit.
    ///
    /// Submitter failures are returned as errors and leave the step as is.
    pub fn advance(&mut self, submitter: &mut dyn Submitter) -> Result<Advance> {
        let step = self.current;
        for field in step.fields() {
            self.errors.remove(field);
        }

        if let Err(errors) = self.schema.validate(step, &self.values) {
            debug!(step = step.index(), count = errors.len(), "Step rejected");
            for e in &errors {
                self.errors.insert(e.field, e.message.clone());
            }
            return Ok(Advance::Rejected(errors));
        }

        match step.next() {
            Some(next) => {
                debug!(from = step.index(), to = next.index(), "Advanced");
                self.current = next;
                Ok(Advance::Moved {
                    from: step,
                    to: next,
                })
            }
            None => {
                let snapshot = self.values.clone();
                submitter.submit(&snapshot)?;
                self.submissions += 1;
                info!(submissions = self.submissions, "Form submitted");
                Ok(Advance::Submitted)
            }
        }
    }

    /// Go back one step. Returns false on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.current.prev() {
            Some(prev) => {
                debug!(from = self.current.index(), to = prev.index(), "Retreated");
                self.current = prev;
                true
            }
            None => false,
        }
    }

    /// Describe the current step for rendering.
    pub fn view(&self) -> StepView {
        let step = self.current;
        let fields = step
            .fields()
            .iter()
            .map(|&field| {
                let spec = self.schema.spec(field);
                FieldView {
                    field,
                    label: spec.map_or_else(|| field.key().to_string(), |s| s.label.clone()),
                    placeholder: spec.and_then(|s| s.placeholder.clone()),
                    kind: spec.map_or(FieldKind::Text, |s| s.kind),
                    value: self.values.get(field).to_string(),
                    error: self.errors.get(&field).cloned(),
                }
            })
            .collect();

        StepView {
            step,
            index: step.index(),
            total: Step::COUNT,
            intro: intro(step),
            fields,
            primary_label: if step.is_last() { "Submit" } else { "Next" },
            can_retreat: !step.is_first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    fn no_submit(_: &FormValues) -> Result<()> {
        panic!("submit must not be called");
    }

    #[test]
    fn test_starts_on_first_step() {
        let controller = StepController::new();
        assert_eq!(controller.current(), Step::Name);
        assert_eq!(controller.submissions(), 0);
    }

    #[test]
    fn test_rejection_records_errors() {
        let mut controller = StepController::new();
        let outcome = controller.advance(&mut no_submit).unwrap();
        assert!(matches!(outcome, Advance::Rejected(ref e) if e.len() == 2));
        assert_eq!(controller.current(), Step::Name);
        assert!(controller.error(Field::FirstName).is_some());
        assert!(controller.error(Field::LastName).is_some());
    }

    #[test]
    fn test_editing_errored_field_revalidates() {
        let mut controller = StepController::new();
        controller.advance(&mut no_submit).unwrap();

        controller.set_value(Field::FirstName, "A");
        assert!(controller.error(Field::FirstName).is_some());
        controller.set_value(Field::FirstName, "Al");
        assert_eq!(controller.error(Field::FirstName), None);
        // untouched field keeps its error
        assert!(controller.error(Field::LastName).is_some());
    }

    #[test]
    fn test_editing_clean_text_field_does_not_validate() {
        let mut controller = StepController::new();
        controller.set_value(Field::FirstName, "A");
        assert_eq!(controller.error(Field::FirstName), None);
    }

    #[test]
    fn test_choice_always_revalidates() {
        let mut controller = StepController::new();
        controller.set_value(Field::ExOptions, "");
        assert_eq!(
            controller.error(Field::ExOptions),
            Some("Please select an option.")
        );
        controller.set_value(Field::ExOptions, "option_1");
        assert_eq!(controller.error(Field::ExOptions), None);
    }

    #[test]
    fn test_submitter_failure_keeps_state() {
        let values = FormValues::new()
            .with(Field::FirstName, "Al")
            .with(Field::LastName, "Ng")
            .with(Field::ExOptions, "option_1")
            .with(Field::Email, "x@x.com")
            .with(Field::Phone, "1234567890");
        let mut controller = StepController::new().with_values(values);
        let mut ok = |_: &FormValues| -> Result<()> { Ok(()) };
        controller.advance(&mut ok).unwrap();
        controller.advance(&mut ok).unwrap();

        let mut failing = |_: &FormValues| -> Result<()> { bail!("disk full") };
        assert!(controller.advance(&mut failing).is_err());
        assert_eq!(controller.current(), Step::Contact);
        assert_eq!(controller.submissions(), 0);
    }

    #[test]
    fn test_view_buttons() {
        let mut controller = StepController::new().with_values(
            FormValues::new()
                .with(Field::FirstName, "Al")
                .with(Field::LastName, "Ng")
                .with(Field::ExOptions, "option_1"),
        );
        let view = controller.view();
        assert_eq!(view.primary_label, "Next");
        assert!(!view.can_retreat);
        assert!(view.intro.is_some());
        assert_eq!(view.fields.len(), 2);
        assert_eq!(view.fields[0].placeholder.as_deref(), Some("Cameron"));

        controller.advance(&mut no_submit).unwrap();
        controller.advance(&mut no_submit).unwrap();
        let view = controller.view();
        assert_eq!(view.index, 3);
        assert_eq!(view.total, 3);
        assert_eq!(view.primary_label, "Submit");
        assert!(view.can_retreat);
        assert!(view.intro.is_none());
    }
}
