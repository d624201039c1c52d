//! Currency formatting settings
//!
//! Holds everything needed to turn a minor-unit amount into a display string.
//! The value is passed into each formatting call instead of living in
//! process-wide locale state.

use crate::error::{DrawerError, DrawerResult};

/// How monetary amounts are rendered for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Currency symbol placed before the amount
    pub symbol: String,

    /// Separator between digit groups of the major part
    pub grouping_separator: String,

    /// Separator between the major and minor parts
    pub decimal_separator: String,

    /// Digits per group (3 for "1,234,567")
    pub group_size: usize,

    /// Number of fractional digits shown
    pub decimal_places: u32,
}

impl CurrencyFormat {
    /// US dollars: "$1,234.56"
    pub fn en_us() -> Self {
        Self {
            symbol: "$".to_string(),
            grouping_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            group_size: 3,
            decimal_places: 2,
        }
    }

    /// Minor units in one major unit (100 for two decimal places)
    pub fn minor_per_major(&self) -> i64 {
        10_i64.saturating_pow(self.decimal_places)
    }

    /// Check that the format can actually be applied
    pub fn validate(&self) -> DrawerResult<()> {
        if self.group_size == 0 {
            return Err(DrawerError::InvalidFormat(
                "group size must be at least 1".into(),
            ));
        }

        if self.decimal_places > 6 {
            return Err(DrawerError::InvalidFormat(format!(
                "{} decimal places is more than supported (6)",
                self.decimal_places
            )));
        }

        if self.decimal_places > 0 && self.decimal_separator.is_empty() {
            return Err(DrawerError::InvalidFormat(
                "decimal separator cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::en_us()
    }
}
