//! Step definitions.

use super::values::Field;
use serde::{Deserialize, Serialize};

/// One page of the wizard.
///
/// The step index is 1-based and bounded by construction: there is no way to
/// hold a `Step` that does not name a real page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// First and last name
    Name,
    /// Single-choice option
    Options,
    /// Email and phone
    Contact,
}

impl Step {
    /// Steps in the order they are shown.
    pub const ALL: [Step; 3] = [Step::Name, Step::Options, Step::Contact];

    /// Number of steps in the wizard.
    pub const COUNT: usize = Self::ALL.len();

    /// The first step shown when the wizard opens.
    pub fn first() -> Self {
        Step::Name
    }

    /// The final step, where advancing submits instead.
    pub fn last() -> Self {
        Step::Contact
    }

    /// 1-based position of this step.
    pub fn index(&self) -> usize {
        match self {
            Step::Name => 1,
            Step::Options => 2,
            Step::Contact => 3,
        }
    }

    /// Step at a 1-based position, or `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Fields this step is responsible for displaying and validating.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Step::Name => &[Field::FirstName, Field::LastName],
            Step::Options => &[Field::ExOptions],
            Step::Contact => &[Field::Email, Field::Phone],
        }
    }

    pub fn is_first(&self) -> bool {
        *self == Self::first()
    }

    pub fn is_last(&self) -> bool {
        *self == Self::last()
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Option<Self> {
        Self::from_index(self.index() - 1)
    }

    /// Step that owns the given field.
    pub fn owning(field: Field) -> Self {
        match field {
            Field::FirstName | Field::LastName => Step::Name,
            Field::ExOptions => Step::Options,
            Field::Email | Field::Phone => Step::Contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips() {
        for step in Step::ALL {
            assert_eq!(Step::from_index(step.index()), Some(step));
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Step::from_index(0), None);
        assert_eq!(Step::from_index(4), None);
    }

    #[test]
    fn test_next_and_prev() {
        assert_eq!(Step::Name.next(), Some(Step::Options));
        assert_eq!(Step::Contact.next(), None);
        assert_eq!(Step::Name.prev(), None);
        assert_eq!(Step::Contact.prev(), Some(Step::Options));
    }

    #[test]
    fn test_every_field_owned_by_exactly_one_step() {
        for field in Field::ALL {
            let owners: Vec<Step> = Step::ALL
                .into_iter()
                .filter(|s| s.fields().contains(&field))
                .collect();
            assert_eq!(owners, vec![Step::owning(field)]);
        }
    }
}
