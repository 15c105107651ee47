//! Form controller for the in-progress employee entry.
//!
//! # Responsibility
//! - Own the transient form buffer and apply per-keystroke edits.
//! - Coerce numeric inputs with integer-prefix semantics.
//! - Reset the buffer after a successful submit.
//!
//! # Invariants
//! - The buffer is never persisted.
//! - Numeric fields that fail coercion hold `None` ("not a number").
//! - A rejected edit leaves the buffer unchanged.

use crate::model::employee::{Discipline, EmployeeValidationError};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static INTEGER_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?)([0-9]+)").expect("valid integer prefix regex"));

/// Input names of the employee form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Age,
    Position,
    Experience,
    Discipline,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Age,
        FormField::Position,
        FormField::Experience,
        FormField::Discipline,
    ];

    /// Returns the input `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Position => "position",
            Self::Experience => "experience",
            Self::Discipline => "discipline",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Age | Self::Experience)
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| FormError::UnknownField(value.to_string()))
    }
}

/// Form editing and submit failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No form input carries this name.
    UnknownField(String),
    /// Discipline edit outside the option list.
    Validation(EmployeeValidationError),
    /// Submit attempted while a numeric field holds a non-number.
    NotANumber(FormField),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(name) => write!(
                f,
                "unknown form field `{name}`; expected name|age|position|experience|discipline"
            ),
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotANumber(field) => write!(f, "field `{field}` is not a valid whole number"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EmployeeValidationError> for FormError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Employee-shaped working buffer behind the form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    /// `None` when the last edit was not a number.
    pub age: Option<u32>,
    pub position: String,
    /// `None` when the last edit was not a number.
    pub experience: Option<u32>,
    pub discipline: Discipline,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: Some(0),
            position: String::new(),
            experience: Some(0),
            discipline: Discipline::Unset,
        }
    }
}

/// Owner of the transient form buffer.
#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Applies one input change to the buffer.
    ///
    /// # Contract
    /// - `age`/`experience`: integer-prefix coercion, `None` on failure.
    /// - `discipline`: exact option label or empty, else error.
    /// - Text fields are stored unchanged.
    pub fn handle_change(&mut self, field: FormField, raw_value: &str) -> Result<(), FormError> {
        match field {
            FormField::Name => self.state.name = raw_value.to_string(),
            FormField::Position => self.state.position = raw_value.to_string(),
            FormField::Age => self.state.age = parse_integer_prefix(raw_value),
            FormField::Experience => self.state.experience = parse_integer_prefix(raw_value),
            FormField::Discipline => self.state.discipline = raw_value.parse()?,
        }
        debug!("event=form_change module=form status=ok field={field}");
        Ok(())
    }

    /// Same as [`handle_change`](Self::handle_change), addressed by input name.
    pub fn handle_named_change(&mut self, name: &str, raw_value: &str) -> Result<(), FormError> {
        let field = name.parse::<FormField>()?;
        self.handle_change(field, raw_value)
    }

    /// Restores the zero-value buffer.
    pub fn reset(&mut self) {
        self.state = FormState::default();
    }
}

/// Parses a leading non-negative integer, ignoring trailing text.
///
/// Returns `None` for input without leading digits, for negative values
/// and for values that overflow `u32`.
pub fn parse_integer_prefix(raw: &str) -> Option<u32> {
    let captures = INTEGER_PREFIX_RE.captures(raw)?;
    let negative = &captures[1] == "-";
    let value = captures[2].parse::<u32>().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}
