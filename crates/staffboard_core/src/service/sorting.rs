//! Sort strategies over the employee list.
//!
//! # Invariants
//! - Strategies never mutate their input; they return a reordered copy.
//! - Sorting is stable: equal keys keep their prior relative order.

use crate::model::employee::Employee;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Strategy signature accepted by `ListController::apply_sort`.
pub type SortStrategy = fn(&[Employee]) -> Vec<Employee>;

/// Ascending by discipline label; unset discipline sorts first.
pub fn sort_by_discipline(employees: &[Employee]) -> Vec<Employee> {
    let mut sorted = employees.to_vec();
    sorted.sort_by(|a, b| a.discipline.as_str().cmp(b.discipline.as_str()));
    sorted
}

/// Ascending by years of experience.
pub fn sort_by_experience(employees: &[Employee]) -> Vec<Employee> {
    let mut sorted = employees.to_vec();
    sorted.sort_by_key(|employee| employee.experience);
    sorted
}

/// User-facing sort actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Discipline,
    Experience,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Discipline => "discipline",
            Self::Experience => "experience",
        }
    }

    pub fn strategy(self) -> SortStrategy {
        match self {
            Self::Discipline => sort_by_discipline,
            Self::Experience => sort_by_experience,
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "discipline" => Ok(Self::Discipline),
            "experience" => Ok(Self::Experience),
            other => Err(format!(
                "unsupported sort key `{other}`; expected discipline|experience"
            )),
        }
    }
}
