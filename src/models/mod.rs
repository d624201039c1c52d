//! Core data models for the drawer tally
//!
//! This module contains the data structures for counting a cash drawer:
//! money amounts, the denomination table and the drawer itself.

pub mod denomination;
pub mod drawer;
pub mod money;

pub use denomination::Denomination;
pub use drawer::{parse_count, DisplayRow, Drawer, TOTAL_LABEL};
pub use money::Money;
