//! Local key-value storage and the employee list adapter.
//!
//! # Responsibility
//! - Provide a browser-style key-value slot API over SQLite or memory.
//! - Mirror the committed employee list into one named slot.
//!
//! # Invariants
//! - Slot values are whole documents; there are no partial writes.
//! - The employee adapter holds no state of its own.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod employee_store;
pub mod key_value;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage failure surfaced to callers of slot writes.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize slot value: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
