//! Custom error types for the drawer tally
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for drawer operations
#[derive(Error, Debug)]
pub enum DrawerError {
    /// A key that is not in the denomination table
    #[error("Unknown denomination: {0}")]
    UnknownDenomination(String),

    /// A precomputed amount that is not a whole number of minor units
    #[error("Amount for {denomination} is not an integer: {value:?}")]
    NonIntegerAmount { denomination: String, value: String },

    /// Amounts in a drawer can never be negative
    #[error("Amount for {denomination} is negative: {amount}")]
    NegativeAmount { denomination: String, amount: i64 },

    /// An amount that doesn't split into whole units of the denomination
    #[error("Amount {amount} for {denomination} is not a multiple of {face_value}")]
    NotMultipleOfFaceValue {
        denomination: String,
        amount: i64,
        face_value: i64,
    },

    /// The same denomination supplied twice
    #[error("Denomination supplied more than once: {0}")]
    DuplicateDenomination(String),

    /// Count times face value does not fit in an i64
    #[error("Count {count} for {denomination} is too large")]
    AmountOverflow { denomination: String, count: u64 },

    /// The grand total does not fit in an i64
    #[error("Drawer total is too large")]
    TotalOverflow,

    /// Rejected currency format configuration
    #[error("Invalid currency format: {0}")]
    InvalidFormat(String),

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl DrawerError {
    /// Create an "unknown denomination" error
    pub fn unknown_denomination(identifier: impl Into<String>) -> Self {
        Self::UnknownDenomination(identifier.into())
    }

    /// Check if this error came from drawer construction checks
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownDenomination(_)
                | Self::NonIntegerAmount { .. }
                | Self::NegativeAmount { .. }
                | Self::NotMultipleOfFaceValue { .. }
                | Self::DuplicateDenomination(_)
                | Self::AmountOverflow { .. }
                | Self::TotalOverflow
        )
    }
}

impl From<std::io::Error> for DrawerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for drawer operations
pub type DrawerResult<T> = Result<T, DrawerError>;
