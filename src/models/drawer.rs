//! Drawer model
//!
//! A drawer holds the minor-unit amount counted for every denomination.
//! It is built once from the operator's counts (or from precomputed
//! amounts), validated, and only read afterwards.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::denomination::Denomination;
use super::money::Money;
use crate::config::CurrencyFormat;
use crate::error::{DrawerError, DrawerResult};

/// Label of the grand-total row
pub const TOTAL_LABEL: &str = "TOTAL";

/// Parse a count typed by the operator
///
/// Returns the non-negative integer the text represents. Anything else
/// (empty, non-numeric, fractional or negative) counts as 0, so a bad
/// keystroke never ends the session.
pub fn parse_count(input: &str) -> u64 {
    match input.trim().parse::<u64>() {
        Ok(count) => count,
        Err(_) => {
            debug!(input, "not a non-negative integer, counting as 0");
            0
        }
    }
}

/// One line of the summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Denomination label, or "TOTAL"
    pub label: String,
    /// Number of units; `None` on the total row
    pub count: Option<u64>,
    /// Formatted amount
    pub value: String,
}

/// Amounts counted per denomination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawer {
    amounts: BTreeMap<Denomination, Money>,
    total: Money,
}

impl Drawer {
    /// Build a drawer from unit counts
    ///
    /// Each amount is `count × face value`. Denominations not supplied hold
    /// zero.
    pub fn from_counts<I>(counts: I) -> DrawerResult<Self>
    where
        I: IntoIterator<Item = (Denomination, u64)>,
    {
        let mut amounts = BTreeMap::new();

        for (denomination, count) in counts {
            let amount = denomination
                .face_value()
                .checked_mul_count(count)
                .ok_or_else(|| DrawerError::AmountOverflow {
                    denomination: denomination.id().to_string(),
                    count,
                })?;

            if amounts.insert(denomination, amount).is_some() {
                return Err(DrawerError::DuplicateDenomination(
                    denomination.id().to_string(),
                ));
            }
        }

        Self::fill(amounts)
    }

    /// Build a drawer from precomputed minor-unit amounts keyed by identifier
    ///
    /// # Errors
    ///
    /// Fails on an unknown key, a negative amount, an amount that is not a
    /// whole number of units, or a key given twice.
    pub fn from_amounts<I, K>(amounts: I) -> DrawerResult<Self>
    where
        I: IntoIterator<Item = (K, Money)>,
        K: AsRef<str>,
    {
        let mut validated = BTreeMap::new();

        for (key, amount) in amounts {
            let key = key.as_ref();
            let denomination =
                Denomination::parse(key).ok_or_else(|| DrawerError::unknown_denomination(key))?;

            if amount.is_negative() {
                return Err(DrawerError::NegativeAmount {
                    denomination: denomination.id().to_string(),
                    amount: amount.cents(),
                });
            }

            let face_value = denomination.face_value();
            if !amount.is_multiple_of(face_value) {
                return Err(DrawerError::NotMultipleOfFaceValue {
                    denomination: denomination.id().to_string(),
                    amount: amount.cents(),
                    face_value: face_value.cents(),
                });
            }

            if validated.insert(denomination, amount).is_some() {
                return Err(DrawerError::DuplicateDenomination(
                    denomination.id().to_string(),
                ));
            }
        }

        Self::fill(validated)
    }

    /// Build a drawer from amounts written as text, e.g. `("quarters", "75")`
    ///
    /// Amounts are minor units and must be integers; "12.5" or "abc" fail
    /// with [`DrawerError::NonIntegerAmount`]. The parsed amounts then go
    /// through [`Drawer::from_amounts`].
    pub fn from_amount_text<I, K, V>(amounts: I) -> DrawerResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut parsed = Vec::new();

        for (key, value) in amounts {
            let key = key.as_ref();
            let value = value.as_ref();

            if Denomination::parse(key).is_none() {
                return Err(DrawerError::unknown_denomination(key));
            }

            let cents = value
                .trim()
                .parse::<i64>()
                .map_err(|_| DrawerError::NonIntegerAmount {
                    denomination: key.to_string(),
                    value: value.to_string(),
                })?;

            parsed.push((key.to_string(), Money::from_cents(cents)));
        }

        Self::from_amounts(parsed)
    }

    fn fill(mut amounts: BTreeMap<Denomination, Money>) -> DrawerResult<Self> {
        for denomination in Denomination::ALL {
            amounts.entry(denomination).or_insert_with(Money::zero);
        }

        let total = Money::checked_sum(amounts.values().copied())
            .ok_or(DrawerError::TotalOverflow)?;

        info!(total = %total, "drawer counted");
        Ok(Self { amounts, total })
    }

    /// Minor-unit amount held for a denomination
    pub fn amount(&self, denomination: Denomination) -> Money {
        self.amounts.get(&denomination).copied().unwrap_or_default()
    }

    /// Number of units of a denomination (amount ÷ face value)
    pub fn count(&self, denomination: Denomination) -> u64 {
        self.amount(denomination)
            .checked_div(denomination.face_value())
            .and_then(|units| u64::try_from(units).ok())
            .unwrap_or(0)
    }

    /// Sum of every denomination's amount
    pub fn total(&self) -> Money {
        self.total
    }

    /// Amounts in display order
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, Money)> + '_ {
        self.amounts.iter().map(|(d, m)| (*d, *m))
    }

    /// Rows for the summary table: one per denomination, then the total
    pub fn render(&self, format: &CurrencyFormat) -> Vec<DisplayRow> {
        let mut rows: Vec<DisplayRow> = self
            .iter()
            .map(|(d, amount)| DisplayRow {
                label: d.label().to_string(),
                count: Some(self.count(d)),
                value: amount.format(format),
            })
            .collect();

        rows.push(DisplayRow {
            label: TOTAL_LABEL.to_string(),
            count: None,
            value: self.total().format(format),
        });

        rows
    }
}
