//! Money type for expense amounts
//!
//! Internally stores amounts in minor units (i64) to avoid floating-point
//! drift in the running total. The currency symbol is not part of the value;
//! it is supplied by whoever formats it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Symbols `Money::parse` strips from the front of an amount
pub const CURRENCY_SYMBOLS: [&str; 5] = ["₹", "$", "€", "£", "¥"];

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// The fractional part (0-99)
    pub const fn fraction(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Amount as a float, for percentages and chart values only
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse an amount typed by the user
    ///
    /// Accepts "10.50", "10.5", "10", "-3.25" and one leading currency symbol
    /// such as "₹10", "$10.50", "-₹5" or "₹-5".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let mut negative = false;
        let mut rest = input;
        if let Some(stripped) = rest.strip_prefix('-') {
            negative = true;
            rest = stripped;
        }
        if let Some(stripped) = CURRENCY_SYMBOLS.iter().find_map(|sym| rest.strip_prefix(sym)) {
            rest = stripped;
            if !negative {
                if let Some(stripped) = rest.strip_prefix('-') {
                    negative = true;
                    rest = stripped;
                }
            }
        }
        if rest.is_empty() {
            return Err(invalid());
        }

        let (whole, frac) = match rest.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (rest, ""),
        };
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
            || frac.len() > 2
            || (whole.is_empty() && frac.is_empty())
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let fraction: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let minor = units
            .checked_mul(100)
            .and_then(|m| m.checked_add(fraction))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Add two amounts, or `None` if the result does not fit
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract two amounts, or `None` if the result does not fit
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Format with a currency symbol, e.g. "₹12.50"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.fraction())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.fraction())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(""))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.fraction(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1050).to_string(), "10.50");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
        assert_eq!(Money::from_minor(-1050).to_string(), "-10.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_units(350).format_with_symbol("₹"), "₹350.00");
        assert_eq!(Money::from_minor(-250).format_with_symbol("$"), "-$2.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap(), Money::from_minor(1050));
        assert_eq!(Money::parse("10.5").unwrap(), Money::from_minor(1050));
        assert_eq!(Money::parse("10").unwrap(), Money::from_minor(1000));
        assert_eq!(Money::parse(".75").unwrap(), Money::from_minor(75));
        assert_eq!(Money::parse("0").unwrap(), Money::zero());
        assert_eq!(Money::parse("-3.25").unwrap(), Money::from_minor(-325));
        assert_eq!(Money::parse("₹120").unwrap(), Money::from_units(120));
        assert_eq!(Money::parse(" $4.99 ").unwrap(), Money::from_minor(499));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1.234").is_err());
        assert!(Money::parse("12a").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("abc12").is_err());
        assert!(Money::parse("USD 5").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("-₹-5").is_err());
        assert!(Money::parse("₹$5").is_err());
        assert!(Money::parse("-").is_err());
    }

    #[test]
    fn test_parse_sign_around_symbol() {
        assert_eq!(Money::parse("₹-5").unwrap(), Money::from_units(-5));
        assert_eq!(Money::parse("-₹5").unwrap(), Money::from_units(-5));
        assert_eq!(Money::parse("-$0.50").unwrap(), Money::from_minor(-50));
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = Money::from_minor(i64::MAX - 1);
        assert_eq!(big.checked_add(Money::from_minor(1)), Some(Money::from_minor(i64::MAX)));
        assert_eq!(big.checked_add(Money::from_minor(2)), None);
        assert_eq!(Money::from_minor(i64::MIN).checked_sub(Money::from_minor(1)), None);
        assert_eq!(
            Money::from_units(5).checked_sub(Money::from_units(7)),
            Some(Money::from_units(-2))
        );
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let mut total = Money::from_units(10);
        total += Money::from_units(5);
        total -= Money::from_minor(250);
        assert_eq!(total, Money::from_minor(1250));

        let amounts = [Money::from_units(1), Money::from_units(2), Money::from_units(3)];
        let sum: Money = amounts.iter().sum();
        assert_eq!(sum, Money::from_units(6));
        assert_eq!(Money::from_units(2) - Money::from_units(3), Money::from_units(-1));
    }
}
