//! Stateless employee use-case functions.
//!
//! # Responsibility
//! - Build employees from form input.
//! - Provide sort strategies over the employee list.

pub mod factory;
pub mod sorting;
