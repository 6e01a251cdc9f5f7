//! The record collected by the wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of every field in [`FormValues`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    ExOptions,
    Email,
    Phone,
}

impl Field {
    /// All fields in declaration order.
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::ExOptions,
        Field::Email,
        Field::Phone,
    ];

    /// The record key for this field (e.g. `first_name`).
    pub fn key(&self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::ExOptions => "ex_options",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    /// Look up a field by its record key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values entered so far, one string per field.
///
/// Every field starts out empty. Missing keys deserialize as empty strings so
/// partially filled documents can still be validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub ex_options: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::ExOptions => &self.ex_options,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    /// Get a mutable reference to the value of a field.
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::ExOptions => &mut self.ex_options,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Builder-style setter, handy for fixtures.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}
