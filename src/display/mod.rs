//! Display formatting for terminal output
//!
//! Turns rendered drawer rows into the text table printed at the end of a
//! session.

pub mod drawer;

pub use drawer::{format_drawer_table, Column, ColumnAlign, COLUMNS};
