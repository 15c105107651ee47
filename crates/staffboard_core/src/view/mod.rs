//! Presentation models for the employee board.
//!
//! # Responsibility
//! - Project form state and the committed list into render-ready views.
//! - Provide a plain-text rendering via `Display`.
//!
//! # Invariants
//! - Views hold no state beyond the snapshot they were built from.
//! - An empty list renders exactly one placeholder row.
//! - Row `position` is the delete target valid for this render only.

use crate::controller::form::{FormField, FormState};
use crate::model::employee::{Discipline, Employee};
use std::fmt::{Display, Formatter};

pub const ADD_ACTION_LABEL: &str = "Add employee";
pub const SORT_BY_EXPERIENCE_LABEL: &str = "Sort by experience";
pub const SORT_BY_DISCIPLINE_LABEL: &str = "Sort by discipline";
pub const DISCIPLINE_PLACEHOLDER: &str = "Select Discipline";
pub const EMPTY_TABLE_PLACEHOLDER: &str = "Table is empty";
pub const TABLE_HEADERS: [&str; 6] = [
    "Name",
    "Age",
    "Position",
    "Experience",
    "Discipline",
    "Delete",
];

/// Input control kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Select,
}

/// One labelled form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub field: FormField,
    pub label: &'static str,
    pub kind: InputKind,
    /// Current value as shown; empty for a non-number numeric field.
    pub value: String,
}

/// One entry of the discipline select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    /// Submitted value; empty for the placeholder.
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub inputs: Vec<InputView>,
    pub discipline_options: Vec<OptionView>,
    pub submit_label: &'static str,
}

impl FormView {
    pub fn from_state(state: &FormState) -> Self {
        let inputs = FormField::ALL
            .into_iter()
            .map(|field| InputView {
                field,
                label: field_label(field),
                kind: field_kind(field),
                value: field_value(state, field),
            })
            .collect();

        Self {
            inputs,
            discipline_options: discipline_options(state.discipline),
            submit_label: ADD_ACTION_LABEL,
        }
    }
}

/// Select entries: placeholder first, then the fixed options.
pub fn discipline_options(selected: Discipline) -> Vec<OptionView> {
    std::iter::once(OptionView {
        value: "",
        label: DISCIPLINE_PLACEHOLDER,
        selected: selected == Discipline::Unset,
    })
    .chain(Discipline::OPTIONS.into_iter().map(|option| OptionView {
        value: option.as_str(),
        label: option.as_str(),
        selected: selected == option,
    }))
    .collect()
}

fn field_label(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Name",
        FormField::Age => "Age",
        FormField::Position => "Position",
        FormField::Experience => "Years of experience",
        FormField::Discipline => "Choose your best discipline",
    }
}

fn field_kind(field: FormField) -> InputKind {
    match field {
        FormField::Name | FormField::Position => InputKind::Text,
        FormField::Age | FormField::Experience => InputKind::Number,
        FormField::Discipline => InputKind::Select,
    }
}

fn field_value(state: &FormState, field: FormField) -> String {
    match field {
        FormField::Name => state.name.clone(),
        FormField::Age => number_text(state.age),
        FormField::Position => state.position.clone(),
        FormField::Experience => number_text(state.experience),
        FormField::Discipline => state.discipline.as_str().to_string(),
    }
}

fn number_text(value: Option<u32>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

/// One table row bound to delete-by-position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub position: usize,
    pub cells: [String; 5],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: [&'static str; 6],
    pub rows: Vec<RowView>,
    /// Set only when there are no rows.
    pub placeholder: Option<&'static str>,
    pub sort_actions: [&'static str; 2],
}

impl TableView {
    pub fn from_employees(employees: &[Employee]) -> Self {
        let rows = employees
            .iter()
            .enumerate()
            .map(|(position, employee)| RowView {
                position,
                cells: [
                    employee.name.clone(),
                    employee.age.to_string(),
                    employee.position.clone(),
                    employee.experience.to_string(),
                    employee.discipline.as_str().to_string(),
                ],
            })
            .collect::<Vec<_>>();
        let placeholder = rows.is_empty().then_some(EMPTY_TABLE_PLACEHOLDER);

        Self {
            headers: TABLE_HEADERS,
            rows,
            placeholder,
            sort_actions: [SORT_BY_EXPERIENCE_LABEL, SORT_BY_DISCIPLINE_LABEL],
        }
    }
}

/// Full page snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub form: FormView,
    pub table: TableView,
}

impl Display for FormView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width = self
            .inputs
            .iter()
            .map(|input| input.label.len())
            .max()
            .unwrap_or(0);
        for input in &self.inputs {
            let value = match input.kind {
                InputKind::Select if input.value.is_empty() => DISCIPLINE_PLACEHOLDER,
                _ => input.value.as_str(),
            };
            writeln!(
                f,
                "{:<width$}  [{}] {}",
                input.label,
                input.field,
                value,
                width = width
            )?;
        }
        write!(f, "<{}>", self.submit_label)
    }
}

impl Display for TableView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let delete_cells = self
            .rows
            .iter()
            .map(|row| format!("x {}", row.position))
            .collect::<Vec<_>>();

        let mut widths = self.headers.map(str::len);
        for (row, delete_cell) in self.rows.iter().zip(&delete_cells) {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.chars().count());
            }
            widths[5] = widths[5].max(delete_cell.len());
        }

        write_row(f, &widths, self.headers.iter().copied())?;
        let rule = widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-");
        writeln!(f, "{rule}")?;

        if let Some(placeholder) = self.placeholder {
            writeln!(f, "{placeholder}")?;
        }
        for (row, delete_cell) in self.rows.iter().zip(&delete_cells) {
            let cells = row.cells.iter().map(String::as_str);
            write_row(f, &widths, cells.chain(std::iter::once(delete_cell.as_str())))?;
        }

        write!(f, "<{}> <{}>", self.sort_actions[0], self.sort_actions[1])
    }
}

fn write_row<'a>(
    f: &mut Formatter<'_>,
    widths: &[usize; 6],
    cells: impl Iterator<Item = &'a str>,
) -> std::fmt::Result {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, "{}", line.trim_end())
}

impl Display for BoardView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.form)?;
        writeln!(f)?;
        write!(f, "{}", self.table)
    }
}
