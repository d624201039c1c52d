//! CLI session handling
//!
//! Bridges the terminal (or any reader/writer pair) with the drawer model.

pub mod session;

pub use session::{prompt_label, prompt_line, run_session};
