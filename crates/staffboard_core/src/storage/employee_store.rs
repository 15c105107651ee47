//! Persistent mirror of the committed employee list.
//!
//! # Responsibility
//! - Load the list from the `accounts` slot once at startup.
//! - Re-serialize the full list into the slot after every mutation.
//!
//! # Invariants
//! - Absent or malformed slot values load as an empty list.
//! - Slot read failures are returned, never mistaken for an empty list.
//! - Saves always write the complete list.

use super::key_value::KeyValueStore;
use super::StoreResult;
use crate::model::employee::Employee;
use log::{debug, error, warn};

/// Storage key holding the serialized employee list.
pub const ACCOUNTS_KEY: &str = "accounts";

/// Adapter between the employee list and one key-value slot.
pub struct EmployeeStore<S: KeyValueStore> {
    slots: S,
}

impl<S: KeyValueStore> EmployeeStore<S> {
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    /// Reads and parses the stored list.
    ///
    /// An absent slot or unparsable text yields `[]`. A failed slot read is
    /// returned so callers never overwrite data they could not see.
    pub fn load(&self) -> StoreResult<Vec<Employee>> {
        let raw = match self.slots.get_item(ACCOUNTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=store_load module=storage status=empty key={ACCOUNTS_KEY}");
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=store_load module=storage status=error key={} error_code=slot_read_failed error={}",
                    ACCOUNTS_KEY, err
                );
                return Err(err);
            }
        };

        match serde_json::from_str::<Vec<Employee>>(&raw) {
            Ok(employees) => {
                debug!(
                    "event=store_load module=storage status=ok key={} count={}",
                    ACCOUNTS_KEY,
                    employees.len()
                );
                Ok(employees)
            }
            Err(err) => {
                // Error text may quote slot contents; log position only.
                warn!(
                    "event=store_load module=storage status=error key={} error_code=slot_parse_failed line={} column={}",
                    ACCOUNTS_KEY,
                    err.line(),
                    err.column()
                );
                Ok(Vec::new())
            }
        }
    }

    /// Serializes `employees` and overwrites the slot.
    pub fn save(&self, employees: &[Employee]) -> StoreResult<()> {
        let raw = serde_json::to_string(employees)?;
        self.slots.set_item(ACCOUNTS_KEY, &raw)?;
        debug!(
            "event=store_save module=storage status=ok key={} count={}",
            ACCOUNTS_KEY,
            employees.len()
        );
        Ok(())
    }

    /// Returns the underlying slot store.
    pub fn slots(&self) -> &S {
        &self.slots
    }
}
