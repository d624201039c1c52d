//! Configuration module for the drawer tally
//!
//! There are no settings files. Configuration is the explicit
//! [`CurrencyFormat`] handed to every formatting call.

pub mod format;

pub use format::CurrencyFormat;
