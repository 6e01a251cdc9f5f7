//! End-to-end walks through the three steps using the library API.

use slider::form::{
    Advance, Field, FormSchema, FormValues, JsonLinesSubmitter, Step, StepController, Submitter,
};
use tempfile::TempDir;

/// Records every submitted snapshot.
#[derive(Default)]
struct Recorder {
    records: Vec<FormValues>,
}

impl Submitter for Recorder {
    fn submit(&mut self, values: &FormValues) -> anyhow::Result<()> {
        self.records.push(values.clone());
        Ok(())
    }
}

fn complete_values() -> FormValues {
    FormValues::new()
        .with(Field::FirstName, "Al")
        .with(Field::LastName, "Ng")
        .with(Field::ExOptions, "option_2")
        .with(Field::Email, "x@x.com")
        .with(Field::Phone, "1234567890")
}

#[test]
fn test_short_names_advance_to_second_step() {
    let mut controller = StepController::new();
    controller.set_value(Field::FirstName, "Al");
    controller.set_value(Field::LastName, "Ng");

    let outcome = controller.advance(&mut Recorder::default()).unwrap();
    assert_eq!(
        outcome,
        Advance::Moved {
            from: Step::Name,
            to: Step::Options
        }
    );
    assert_eq!(controller.current().index(), 2);
}

#[test]
fn test_one_letter_name_is_rejected() {
    let mut controller = StepController::new();
    controller.set_value(Field::FirstName, "A");

    let outcome = controller.advance(&mut Recorder::default()).unwrap();
    let Advance::Rejected(errors) = outcome else {
        panic!("expected rejection, got {:?}", outcome);
    };
    assert!(errors
        .iter()
        .any(|e| e.field == Field::FirstName && e.message.contains("must be at least 2 characters")));
    assert_eq!(controller.current(), Step::Name);
    assert!(controller.view().has_errors());
}

#[test]
fn test_last_step_submits_full_record_once() {
    let mut controller = StepController::new().with_values(complete_values());
    let mut recorder = Recorder::default();

    controller.advance(&mut recorder).unwrap();
    controller.advance(&mut recorder).unwrap();
    assert_eq!(controller.current(), Step::Contact);
    assert!(recorder.records.is_empty());

    let outcome = controller.advance(&mut recorder).unwrap();
    assert_eq!(outcome, Advance::Submitted);
    assert_eq!(controller.current(), Step::Contact);
    assert_eq!(recorder.records, vec![complete_values()]);
}

#[test]
fn test_invalid_last_step_never_submits() {
    let values = complete_values().with(Field::Email, "not-an-email");
    let mut controller = StepController::new().with_values(values);
    let mut recorder = Recorder::default();

    for _ in 0..5 {
        controller.advance(&mut recorder).unwrap();
    }
    assert_eq!(controller.current(), Step::Contact);
    assert!(recorder.records.is_empty());
    assert_eq!(controller.error(Field::Email), Some("Invalid email"));
}

#[test]
fn test_retreat_keeps_values_and_never_submits() {
    let mut controller = StepController::new().with_values(complete_values());
    let mut recorder = Recorder::default();
    controller.advance(&mut recorder).unwrap();
    controller.advance(&mut recorder).unwrap();

    assert!(controller.retreat());
    assert_eq!(controller.current(), Step::Options);
    assert!(controller.retreat());
    assert!(!controller.retreat());
    assert_eq!(controller.current(), Step::Name);
    assert_eq!(controller.values(), &complete_values());
    assert!(recorder.records.is_empty());
}

#[test]
fn test_validation_matches_step_ownership() {
    let schema = FormSchema::standard();
    // each field, when blanked, fails exactly the step that owns it
    for field in Field::ALL {
        let values = complete_values().with(field, "");
        for step in Step::ALL {
            let result = schema.validate(step, &values);
            assert_eq!(
                result.is_err(),
                step == Step::owning(field),
                "{} on step {}",
                field,
                step.index()
            );
        }
    }
}

#[test]
fn test_view_tracks_buttons() {
    let mut controller = StepController::new().with_values(complete_values());
    let view = controller.view();
    assert_eq!(view.primary_label, "Next");
    assert!(!view.can_retreat);
    assert!(view.intro.is_some());

    controller.advance(&mut Recorder::default()).unwrap();
    controller.advance(&mut Recorder::default()).unwrap();
    let view = controller.view();
    assert_eq!(view.primary_label, "Submit");
    assert!(view.can_retreat);
    assert_eq!((view.index, view.total), (3, 3));
    assert!(view.intro.is_none());
}

#[test]
fn test_submissions_written_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("submissions.jsonl");
    let mut submitter = JsonLinesSubmitter::new(&path);
    let mut controller = StepController::new().with_values(complete_values());

    for _ in 0..3 {
        controller.advance(&mut submitter).unwrap();
    }
    // re-submitting from the last step is allowed
    controller.advance(&mut submitter).unwrap();

    let records = JsonLinesSubmitter::read_all(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].values, complete_values());
    assert_eq!(controller.submissions(), 2);

    let raw = std::fs::read_to_string(&path).unwrap();
    let first: serde_json::Value = serde_json::from_str(raw.lines().next().unwrap()).unwrap();
    assert_eq!(first["values"]["ex_options"], "option_2");
    assert!(first["submitted_at"].is_string());
}
