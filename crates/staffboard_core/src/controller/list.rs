//! List controller for committed employees.
//!
//! # Responsibility
//! - Own the committed employee list loaded from storage.
//! - Apply append, delete-by-position and sort mutations.
//! - Persist the full list after every confirmed mutation.
//!
//! # Invariants
//! - In-memory list is the single source of truth; storage mirrors it.
//! - Positions are zero-based and valid only for the current render.
//! - Out-of-range deletes are not mutations and write nothing.

use crate::model::employee::Employee;
use crate::service::sorting::SortStrategy;
use crate::storage::employee_store::EmployeeStore;
use crate::storage::key_value::KeyValueStore;
use crate::storage::StoreResult;
use log::{error, info, warn};

/// Owner of the committed list and its storage mirror.
pub struct ListController<S: KeyValueStore> {
    employees: Vec<Employee>,
    store: EmployeeStore<S>,
}

impl<S: KeyValueStore> ListController<S> {
    /// Loads the persisted list once and takes ownership of the store.
    ///
    /// Fails when the slot cannot be read; no controller exists that could
    /// later overwrite the unread list.
    pub fn open(store: EmployeeStore<S>) -> StoreResult<Self> {
        let employees = store.load()?;
        info!(
            "event=list_open module=list status=ok count={}",
            employees.len()
        );
        Ok(Self { employees, store })
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn store(&self) -> &EmployeeStore<S> {
        &self.store
    }

    /// Appends one employee at the end and persists.
    pub fn add(&mut self, employee: Employee) -> StoreResult<()> {
        self.employees.push(employee);
        info!(
            "event=list_add module=list status=ok count={}",
            self.employees.len()
        );
        self.persist()
    }

    /// Removes the employee at `position` and persists.
    ///
    /// Later entries shift down by one. Returns `Ok(None)` without writing
    /// when `position` is out of range.
    pub fn delete(&mut self, position: usize) -> StoreResult<Option<Employee>> {
        if position >= self.employees.len() {
            warn!(
                "event=list_delete module=list status=skipped error_code=position_out_of_range position={} count={}",
                position,
                self.employees.len()
            );
            return Ok(None);
        }

        let removed = self.employees.remove(position);
        info!(
            "event=list_delete module=list status=ok position={} count={}",
            position,
            self.employees.len()
        );
        self.persist()?;
        Ok(Some(removed))
    }

    /// Replaces the list with `strategy` output and persists.
    pub fn apply_sort(&mut self, strategy: SortStrategy) -> StoreResult<()> {
        self.employees = strategy(&self.employees);
        info!(
            "event=list_sort module=list status=ok count={}",
            self.employees.len()
        );
        self.persist()
    }

    fn persist(&self) -> StoreResult<()> {
        self.store.save(&self.employees).inspect_err(|err| {
            error!("event=list_persist module=list status=error error={err}");
        })
    }
}
