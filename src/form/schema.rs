//! Field schema: per-field rules, presentation metadata, and step validation.

use super::error::FieldError;
use super::step::Step;
use super::values::{Field, FormValues};

/// A validation rule attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// The value must contain at least `min` characters.
    MinChars { min: usize, message: String },
    /// The value must be a well-formed email address.
    Email { message: String },
}

impl Rule {
    pub fn min_chars(min: usize, message: impl Into<String>) -> Self {
        Rule::MinChars {
            min,
            message: message.into(),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        Rule::Email {
            message: message.into(),
        }
    }

    /// Check a value. Returns the error message if the rule is violated.
    pub fn check(&self, value: &str) -> Option<&str> {
        let ok = match self {
            Rule::MinChars { min, .. } => validators::min_chars(value, *min),
            Rule::Email { .. } => validators::email(value),
        };
        if ok {
            None
        } else {
            Some(self.message())
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::MinChars { message, .. } | Rule::Email { message } => message,
        }
    }
}

/// One selectable option of a choice field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Value stored in the record when selected.
    pub value: &'static str,
    /// Text shown to the user.
    pub label: &'static str,
}

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input
    Text,
    /// Single selection among fixed options; can be deselected
    Choice(&'static [ChoiceOption]),
}

/// Options offered by the second step.
pub const EX_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        value: "option_1",
        label: "Option 1",
    },
    ChoiceOption {
        value: "option_2",
        label: "Option 2",
    },
];

/// Everything the schema knows about a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub label: String,
    pub placeholder: Option<String>,
    pub kind: FieldKind,
    pub rule: Rule,
}

impl FieldSpec {
    pub fn text(field: Field, label: &str, rule: Rule) -> Self {
        Self {
            field,
            label: label.to_string(),
            placeholder: None,
            kind: FieldKind::Text,
            rule,
        }
    }

    pub fn choice(
        field: Field,
        label: &str,
        options: &'static [ChoiceOption],
        rule: Rule,
    ) -> Self {
        Self {
            field,
            label: label.to_string(),
            placeholder: None,
            kind: FieldKind::Choice(options),
            rule,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }
}

/// The full set of field specs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    specs: Vec<FieldSpec>,
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::standard()
    }
}

impl FormSchema {
    /// Build a schema from explicit specs. Fields without a spec are never
    /// reported as invalid.
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self { specs }
    }

    /// The schema used by the wizard.
    pub fn standard() -> Self {
        Self::new(vec![
            FieldSpec::text(
                Field::FirstName,
                "First Name",
                Rule::min_chars(2, "First name must be at least 2 characters."),
            )
            .with_placeholder("Cameron"),
            FieldSpec::text(
                Field::LastName,
                "Last Name",
                Rule::min_chars(2, "Last name must be at least 2 characters."),
            )
            .with_placeholder("Youngblood"),
            FieldSpec::choice(
                Field::ExOptions,
                "Second Step",
                EX_OPTIONS,
                Rule::min_chars(1, "Please select an option."),
            ),
            FieldSpec::text(Field::Email, "Email", Rule::email("Invalid email"))
                .with_placeholder("cameron@test.com"),
            FieldSpec::text(
                Field::Phone,
                "Phone",
                Rule::min_chars(10, "Phone number must be at least 10 characters."),
            )
            .with_placeholder("(999) 999-1738"),
        ])
    }

    pub fn spec(&self, field: Field) -> Option<&FieldSpec> {
        self.specs.iter().find(|s| s.field == field)
    }

    /// Check a single field against its rule.
    pub fn validate_field(&self, field: Field, values: &FormValues) -> Result<(), FieldError> {
        match self
            .spec(field)
            .and_then(|spec| spec.rule.check(values.get(field)))
        {
            Some(message) => Err(FieldError::new(field, message)),
            None => Ok(()),
        }
    }

    /// Check every field owned by `step`, collecting all violations.
    pub fn validate(&self, step: Step, values: &FormValues) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = step
            .fields()
            .iter()
            .filter_map(|&field| self.validate_field(field, values).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Check every step in order, returning the violations per failing step.
    pub fn validate_all(&self, values: &FormValues) -> Vec<(Step, Vec<FieldError>)> {
        Step::ALL
            .into_iter()
            .filter_map(|step| self.validate(step, values).err().map(|e| (step, e)))
            .collect()
    }
}

/// Predicates backing the schema rules.
pub mod validators {
    use regex::Regex;
    use std::sync::LazyLock;

    static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
            .expect("email pattern is valid")
    });

    /// True if the value holds at least `min` characters (untrimmed).
    pub fn min_chars(value: &str, min: usize) -> bool {
        value.chars().count() >= min
    }

    /// True if the value looks like an email address.
    pub fn email(value: &str) -> bool {
        let Some((local, _)) = value.split_once('@') else {
            return false;
        };
        if local.starts_with('.') || local.contains("..") {
            return false;
        }
        EMAIL_RE.is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> FormValues {
        FormValues::new()
            .with(Field::FirstName, "Al")
            .with(Field::LastName, "Ng")
            .with(Field::ExOptions, "option_2")
            .with(Field::Email, "x@x.com")
            .with(Field::Phone, "1234567890")
    }

    #[test]
    fn test_valid_values_pass_every_step() {
        let schema = FormSchema::standard();
        let values = valid_values();
        for step in Step::ALL {
            assert!(schema.validate(step, &values).is_ok(), "{:?}", step);
        }
        assert!(schema.validate_all(&values).is_empty());
    }

    #[test]
    fn test_reports_every_violation_in_step() {
        let schema = FormSchema::standard();
        let errors = schema.validate(Step::Name, &FormValues::new()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, Field::FirstName);
        assert_eq!(errors[0].message, "First name must be at least 2 characters.");
        assert_eq!(errors[1].field, Field::LastName);
    }

    #[test]
    fn test_only_checks_fields_of_step() {
        let schema = FormSchema::standard();
        let values = valid_values().with(Field::Phone, "123");
        assert!(schema.validate(Step::Name, &values).is_ok());
        assert!(schema.validate(Step::Options, &values).is_ok());
        let errors = schema.validate(Step::Contact, &values).unwrap_err();
        assert_eq!(errors, vec![FieldError::new(
            Field::Phone,
            "Phone number must be at least 10 characters."
        )]);
    }

    #[test]
    fn test_selection_required() {
        let schema = FormSchema::standard();
        let values = valid_values().with(Field::ExOptions, "");
        let errors = schema.validate(Step::Options, &values).unwrap_err();
        assert_eq!(errors[0].message, "Please select an option.");
    }

    #[test]
    fn test_min_chars_counts_characters_not_bytes() {
        assert!(validators::min_chars("Zoë", 3));
        assert!(!validators::min_chars("é", 2));
        assert!(validators::min_chars("  ", 2));
    }

    #[test]
    fn test_email_accepts_common_addresses() {
        for ok in [
            "x@x.com",
            "cameron@test.com",
            "first.last+tag@sub.example.co",
            "O'Brien@Example.ORG",
        ] {
            assert!(validators::email(ok), "{ok} should be valid");
        }
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        for bad in [
            "",
            "plain",
            "@x.com",
            "x@",
            "x@x",
            "x@x.c",
            ".x@x.com",
            "a..b@x.com",
            "x.@x.com",
            "x@-x.com",
            "x y@x.com",
        ] {
            assert!(!validators::email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_missing_spec_is_never_invalid() {
        let schema = FormSchema::new(Vec::new());
        assert!(schema.validate(Step::Name, &FormValues::new()).is_ok());
    }
}
