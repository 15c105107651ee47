//! Core domain logic for StaffBoard.
//! This crate is the single source of truth for employee board behavior.

pub mod board;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod view;

pub use board::{BoardError, BoardResult, EmployeeBoard};
pub use controller::form::{parse_integer_prefix, FormController, FormError, FormField, FormState};
pub use controller::list::ListController;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::employee::{Discipline, Employee, EmployeeValidationError};
pub use service::factory::create_account;
pub use service::sorting::{sort_by_discipline, sort_by_experience, SortKey, SortStrategy};
pub use storage::employee_store::{EmployeeStore, ACCOUNTS_KEY};
pub use storage::key_value::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use storage::{StoreError, StoreResult};
pub use view::{BoardView, FormView, TableView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
