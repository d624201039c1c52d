//! Drawer tally - count a cash drawer from the terminal
//!
//! This library provides the core of the `drawer` tool: a fixed table of
//! denominations, a drawer that turns per-denomination counts into exact
//! minor-unit amounts, and the rendering of a summary table.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Currency formatting configuration
//! - `error`: Custom error types
//! - `models`: Money, denominations and the drawer
//! - `display`: Summary table formatting
//! - `cli`: Interactive counting session
//!
//! # Example
//!
//! ```rust
//! use drawer::config::CurrencyFormat;
//! use drawer::models::{Denomination, Drawer};
//!
//! let drawer = Drawer::from_counts([
//!     (Denomination::Hundreds, 2),
//!     (Denomination::Quarters, 3),
//!     (Denomination::Other, 17),
//! ])?;
//! let rows = drawer.render(&CurrencyFormat::en_us());
//! assert_eq!(rows.last().unwrap().value, "$200.92");
//! # Ok::<(), drawer::DrawerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;

pub use error::{DrawerError, DrawerResult};
