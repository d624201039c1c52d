//! Denomination model
//!
//! The fixed table of bills and coins counted in a drawer, plus the
//! catch-all bucket for anything else.

use std::fmt;

use super::money::Money;

/// A bill, coin or catch-all bucket counted on its own
///
/// Variants are declared in display order (largest bill to smallest coin,
/// then `Other`), so the derived `Ord` matches the order used for prompting
/// and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Denomination {
    Hundreds,
    Fifties,
    Twenties,
    Tens,
    Fives,
    Twos,
    Ones,
    Quarters,
    Dimes,
    Nickels,
    Pennies,
    /// Loose change and anything else, entered directly in minor units
    Other,
}

impl Denomination {
    /// Every denomination in display order
    pub const ALL: [Denomination; 12] = [
        Self::Hundreds,
        Self::Fifties,
        Self::Twenties,
        Self::Tens,
        Self::Fives,
        Self::Twos,
        Self::Ones,
        Self::Quarters,
        Self::Dimes,
        Self::Nickels,
        Self::Pennies,
        Self::Other,
    ];

    /// Stable identifier, e.g. "quarters"
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Hundreds => "hundreds",
            Self::Fifties => "fifties",
            Self::Twenties => "twenties",
            Self::Tens => "tens",
            Self::Fives => "fives",
            Self::Twos => "twos",
            Self::Ones => "ones",
            Self::Quarters => "quarters",
            Self::Dimes => "dimes",
            Self::Nickels => "nickels",
            Self::Pennies => "pennies",
            Self::Other => "other",
        }
    }

    /// Value of a single unit in minor units
    pub const fn face_value(&self) -> Money {
        let cents = match self {
            Self::Hundreds => 10000,
            Self::Fifties => 5000,
            Self::Twenties => 2000,
            Self::Tens => 1000,
            Self::Fives => 500,
            Self::Twos => 200,
            Self::Ones => 100,
            Self::Quarters => 25,
            Self::Dimes => 10,
            Self::Nickels => 5,
            Self::Pennies => 1,
            Self::Other => 1,
        };
        Money::from_cents(cents)
    }

    /// Label shown in prompts and the summary table
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hundreds => "$100",
            Self::Fifties => "$50",
            Self::Twenties => "$20",
            Self::Tens => "$10",
            Self::Fives => "$5",
            Self::Twos => "$2",
            Self::Ones => "$1",
            Self::Quarters => "25c",
            Self::Dimes => "10c",
            Self::Nickels => "5c",
            Self::Pennies => "1c",
            Self::Other => "other",
        }
    }

    /// True for the catch-all bucket, whose count is already a minor-unit amount
    pub const fn is_catch_all(&self) -> bool {
        matches!(self, Self::Other)
    }

    /// Look up a denomination by identifier
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|d| d.id() == s)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let mut sorted = Denomination::ALL;
        sorted.sort();
        assert_eq!(sorted, Denomination::ALL);

        for (i, d) in Denomination::ALL.iter().enumerate() {
            assert_eq!(*d as usize, i);
        }
        assert_eq!(Denomination::ALL.first(), Some(&Denomination::Hundreds));
        assert_eq!(Denomination::ALL.last(), Some(&Denomination::Other));
    }

    #[test]
    fn test_face_values_descend_to_catch_all() {
        let values: Vec<i64> = Denomination::ALL
            .iter()
            .map(|d| d.face_value().cents())
            .collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
        assert!(values.iter().all(|v| *v > 0));
        assert_eq!(Denomination::Other.face_value().cents(), 1);
        assert_eq!(Denomination::Quarters.face_value().cents(), 25);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Denomination::parse("quarters"), Some(Denomination::Quarters));
        assert_eq!(Denomination::parse("Hundreds"), Some(Denomination::Hundreds));
        assert_eq!(Denomination::parse(" other "), Some(Denomination::Other));
        assert_eq!(Denomination::parse("doubloons"), None);
        assert_eq!(Denomination::parse(""), None);

        for d in Denomination::ALL {
            assert_eq!(Denomination::parse(d.id()), Some(d));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Denomination::Hundreds.to_string(), "$100");
        assert_eq!(Denomination::Quarters.label(), "25c");
        assert_eq!(Denomination::Other.label(), "other");
        assert!(Denomination::Other.is_catch_all());
        assert!(!Denomination::Pennies.is_catch_all());
    }
}
