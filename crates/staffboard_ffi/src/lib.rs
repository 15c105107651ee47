//! UI bridge for the employee board.

pub mod api;
