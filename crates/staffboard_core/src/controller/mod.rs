//! State owners for the employee board.
//!
//! # Responsibility
//! - Keep transient form input and the committed list in separate owners.
//!
//! # Invariants
//! - Only `ListController` touches persistent storage.

pub mod form;
pub mod list;
