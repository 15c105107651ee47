//! Domain model for employee records.
//!
//! # Responsibility
//! - Define the record shape shared by form, list, storage and views.
//! - Own the closed discipline option set.
//!
//! # Invariants
//! - Records carry no identifier; identity in a list is positional.
//! - A non-empty discipline is always one of the fixed options.

pub mod employee;
