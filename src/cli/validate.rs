//! `slider validate`: check a JSON record against the form's rules.

use super::{print_error, print_success};
use crate::form::{FieldError, FormSchema, FormValues, Step};
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read a [`FormValues`] document; `-` reads stdin. Missing keys are empty.
pub fn load_values(path: &Path) -> Result<FormValues> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read values file: {:?}", path))?
    };
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {:?}", path))
}

/// Violations per failing step, for one step or all of them.
pub fn check(
    schema: &FormSchema,
    values: &FormValues,
    step: Option<Step>,
) -> Vec<(Step, Vec<FieldError>)> {
    match step {
        Some(step) => schema
            .validate(step, values)
            .err()
            .map(|errors| vec![(step, errors)])
            .unwrap_or_default(),
        None => schema.validate_all(values),
    }
}

/// Human-readable listing of the violations.
pub fn report(failures: &[(Step, Vec<FieldError>)]) -> String {
    let mut out = String::new();
    for (step, errors) in failures {
        out.push_str(&format!("Step {} of {}:\n", step.index(), Step::COUNT));
        for error in errors {
            out.push_str(&format!("  {}\n", error));
        }
    }
    out
}

/// Validate the file and print the outcome. Returns whether it passed.
pub fn run(path: &Path, step: Option<Step>) -> Result<bool> {
    let values = load_values(path)?;
    let failures = check(&FormSchema::standard(), &values, step);

    if failures.is_empty() {
        match step {
            Some(step) => print_success(&format!("Step {} is valid", step.index())),
            None => print_success("All steps are valid"),
        }
        return Ok(true);
    }

    let count: usize = failures.iter().map(|(_, errors)| errors.len()).sum();
    print_error(&format!("{} field(s) failed validation", count));
    eprint!("{}", report(&failures));
    Ok(false)
}
