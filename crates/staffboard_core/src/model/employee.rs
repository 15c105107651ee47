//! Employee record model.
//!
//! # Responsibility
//! - Define the canonical employee record persisted in the `accounts` slot.
//! - Map discipline options to and from their display labels.
//!
//! # Invariants
//! - `age` and `experience` are non-negative by construction (`u32`).
//! - `discipline` serializes as its display label, `""` when unset.
//! - Unknown discipline labels are rejected, never coerced.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Professional discipline chosen from the closed option list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Discipline {
    /// Placeholder selection; serialized as an empty string.
    #[default]
    Unset,
    Finance,
    Management,
    Marketing,
    HumanResources,
    It,
}

impl Discipline {
    /// Selectable options in presentation order, placeholder excluded.
    pub const OPTIONS: [Discipline; 5] = [
        Discipline::Finance,
        Discipline::Management,
        Discipline::Marketing,
        Discipline::HumanResources,
        Discipline::It,
    ];

    /// Returns the display and wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Finance => "Finance",
            Self::Management => "Management",
            Self::Marketing => "Marketing",
            Self::HumanResources => "Human Resources",
            Self::It => "IT",
        }
    }

    /// Parses an exact option label. Empty input maps to `Unset`.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.is_empty() {
            return Some(Self::Unset);
        }
        Self::OPTIONS
            .into_iter()
            .find(|option| option.as_str() == label)
    }

    pub fn is_set(self) -> bool {
        self != Self::Unset
    }
}

impl Display for Discipline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Discipline {
    type Err = EmployeeValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_label(value)
            .ok_or_else(|| EmployeeValidationError::UnknownDiscipline(value.to_string()))
    }
}

impl Serialize for Discipline {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Discipline {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Validation failures for employee model input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    UnknownDiscipline(String),
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownDiscipline(label) => write!(
                f,
                "unknown discipline `{label}`; expected one of Finance|Management|Marketing|Human Resources|IT"
            ),
        }
    }
}

impl Error for EmployeeValidationError {}

/// One committed employee entry.
///
/// Field names match the persisted JSON object keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub age: u32,
    pub position: String,
    /// Years of experience.
    pub experience: u32,
    pub discipline: Discipline,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        position: impl Into<String>,
        experience: u32,
        discipline: Discipline,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            position: position.into(),
            experience,
            discipline,
        }
    }
}
