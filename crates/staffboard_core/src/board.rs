//! Employee board: form and list wired into the submit flow.
//!
//! # Responsibility
//! - Compose the form controller, record factory and list controller.
//! - Expose the user actions of the board as single calls.
//!
//! # Invariants
//! - A rejected submit leaves both form and list unchanged.
//! - The form is reset once its employee has been appended.

use crate::controller::form::{FormController, FormError, FormField};
use crate::controller::list::ListController;
use crate::model::employee::Employee;
use crate::service::factory::create_account;
use crate::service::sorting::SortKey;
use crate::storage::employee_store::EmployeeStore;
use crate::storage::key_value::KeyValueStore;
use crate::storage::StoreError;
use crate::view::{BoardView, FormView, TableView};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardResult<T> = Result<T, BoardError>;

/// Failure of one board action.
#[derive(Debug)]
pub enum BoardError {
    Form(FormError),
    Store(StoreError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Form(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<FormError> for BoardError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}

impl From<StoreError> for BoardError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Single-page employee board over one key-value store.
pub struct EmployeeBoard<S: KeyValueStore> {
    form: FormController,
    list: ListController<S>,
}

impl<S: KeyValueStore> EmployeeBoard<S> {
    /// Opens the board, loading the persisted list from `slots`.
    pub fn open(slots: S) -> BoardResult<Self> {
        Ok(Self {
            form: FormController::new(),
            list: ListController::open(EmployeeStore::new(slots))?,
        })
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn list(&self) -> &ListController<S> {
        &self.list
    }

    pub fn employees(&self) -> &[Employee] {
        self.list.employees()
    }

    /// Forwards one input change to the form.
    pub fn change(&mut self, field: FormField, raw_value: &str) -> BoardResult<()> {
        self.form.handle_change(field, raw_value)?;
        Ok(())
    }

    /// "Add employee": builds, appends and resets the form.
    ///
    /// Returns the appended employee. When the write fails the employee
    /// stays appended in memory and the form is still reset.
    pub fn submit(&mut self) -> BoardResult<Employee> {
        let employee = create_account(self.form.state())?;
        let persisted = self.list.add(employee.clone());
        self.form.reset();
        persisted?;
        Ok(employee)
    }

    /// Row delete action; `position` comes from the last rendered table.
    pub fn delete(&mut self, position: usize) -> BoardResult<Option<Employee>> {
        Ok(self.list.delete(position)?)
    }

    pub fn sort(&mut self, key: SortKey) -> BoardResult<()> {
        self.list.apply_sort(key.strategy())?;
        Ok(())
    }

    /// Renders the current form and table.
    pub fn view(&self) -> BoardView {
        BoardView {
            form: FormView::from_state(self.form.state()),
            table: TableView::from_employees(self.list.employees()),
        }
    }
}
