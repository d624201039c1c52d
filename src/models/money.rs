//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64 cents) to avoid
//! floating-point precision issues. Provides safe arithmetic operations and
//! locale-style formatting driven by a [`CurrencyFormat`].

use std::fmt;

use crate::config::CurrencyFormat;

/// Represents a monetary amount stored as minor units (cents for USD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use drawer::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, `None` on overflow
    pub fn checked_add(self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum a sequence of amounts, `None` if the total does not fit
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }

    /// Multiply by a number of physical units, `None` on overflow
    pub fn checked_mul_count(self, count: u64) -> Option<Self> {
        let count = i64::try_from(count).ok()?;
        self.0.checked_mul(count).map(Self)
    }

    /// How many whole `unit`s fit in this amount, `None` for a zero unit
    pub fn checked_div(self, unit: Money) -> Option<i64> {
        self.0.checked_div(unit.0)
    }

    /// Whether this amount is a whole number of `unit`s
    pub fn is_multiple_of(self, unit: Money) -> bool {
        self.0.checked_rem(unit.0) == Some(0)
    }

    /// Format as a major-unit currency string, e.g. "$1,234.56"
    ///
    /// # Examples
    /// ```
    /// use drawer::config::CurrencyFormat;
    /// use drawer::models::Money;
    /// let format = CurrencyFormat::en_us();
    /// assert_eq!(Money::from_cents(123456).format(&format), "$1,234.56");
    /// ```
    pub fn format(&self, format: &CurrencyFormat) -> String {
        let per_major = format.minor_per_major().unsigned_abs();
        let magnitude = self.0.unsigned_abs();
        let major = magnitude / per_major;
        let minor = magnitude % per_major;

        let mut output = String::new();
        if self.is_negative() {
            output.push('-');
        }
        output.push_str(&format.symbol);
        output.push_str(&group_digits(
            &major.to_string(),
            &format.grouping_separator,
            format.group_size,
        ));

        if format.decimal_places > 0 {
            output.push_str(&format.decimal_separator);
            output.push_str(&format!(
                "{:0width$}",
                minor,
                width = format.decimal_places as usize
            ));
        }

        output
    }
}

/// Insert `separator` between every `group_size` digits, counting from the right
fn group_digits(digits: &str, separator: &str, group_size: usize) -> String {
    if group_size == 0 || separator.is_empty() {
        return digits.to_string();
    }

    let len = digits.len();
    let mut output = String::with_capacity(len + (len / group_size) * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % group_size == 0 {
            output.push_str(separator);
        }
        output.push(ch);
    }
    output
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&CurrencyFormat::en_us()))
    }
}
