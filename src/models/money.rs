//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that sums never depend on the
//! order transactions are added in. Serialized as a decimal number of
//! currency units (`12.5`), and deserialized from either a number or a
//! string such as `"$12.50"`. Parsed amounts are limited to [`Money::MAX`]
//! in magnitude, so sums over any realistic number of transactions stay
//! within `i64`; arithmetic saturates rather than wrapping.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude accepted from text or decimal input (10 billion units)
    pub const MAX: Money = Money(1_000_000_000_000);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use finance_dashboard::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a decimal value, rounded to the nearest cent
    ///
    /// Returns `None` for non-finite values and for magnitudes above [`Money::MAX`].
    pub fn try_from_decimal(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() > Self::MAX.0 as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Get the amount as a decimal number of currency units
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Whether the magnitude is within [`Money::MAX`]
    pub const fn is_within_limit(&self) -> bool {
        self.0.unsigned_abs() <= Self::MAX.0.unsigned_abs()
    }

    /// This amount as a percentage of `whole`
    ///
    /// A zero `whole` yields `0.0` rather than an infinite or NaN ratio.
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.is_zero() {
            0.0
        } else {
            self.0 as f64 / whole.0 as f64 * 100.0
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1,250.00"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        let cleaned: String = s.chars().filter(|c| *c != ',').collect();
        let s = cleaned.as_str();

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (units_str, cents_str) = match s.split_once('.') {
            Some((_, cents_str)) if cents_str.contains('.') => return Err(invalid()),
            Some((_, cents_str)) if !cents_str.chars().all(|c| c.is_ascii_digit()) => {
                return Err(invalid())
            }
            Some((units_str, cents_str)) => (units_str, cents_str),
            None => (s, ""),
        };

        let units: i64 = if units_str.is_empty() {
            0
        } else if !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        } else {
            units_str
                .parse()
                .map_err(|_| MoneyParseError::OutOfRange(s.to_string()))?
        };

        // Pad or truncate cents to 2 digits
        let cents: i64 = match cents_str.len() {
            0 => 0,
            1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => cents_str
                .get(..2)
                .ok_or_else(invalid)?
                .parse()
                .map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(|c| Self(if negative { -c } else { c }))
            .filter(Money::is_within_limit)
            .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?;

        Ok(total)
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
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
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
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

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MoneyRepr {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match MoneyRepr::deserialize(deserializer)? {
            MoneyRepr::Number(value) => Money::try_from_decimal(value).ok_or_else(|| {
                serde::de::Error::custom(MoneyParseError::OutOfRange(value.to_string()))
            }),
            MoneyRepr::Text(text) => Money::parse(&text).map_err(serde::de::Error::custom),
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => {
                write!(f, "Amount out of range (limit {}): {}", Money::MAX, s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_decimal_rounds_to_cents() {
        assert_eq!(Money::try_from_decimal(10.5).unwrap().cents(), 1050);
        assert_eq!(Money::try_from_decimal(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::try_from_decimal(19.999).unwrap().cents(), 2000);
    }

    #[test]
    fn test_from_decimal_rejects_out_of_range() {
        assert_eq!(Money::try_from_decimal(1e300), None);
        assert_eq!(Money::try_from_decimal(-1e300), None);
        assert_eq!(Money::try_from_decimal(f64::NAN), None);
        assert_eq!(Money::try_from_decimal(f64::INFINITY), None);
        assert_eq!(Money::try_from_decimal(1e10), Some(Money::MAX));
        assert_eq!(Money::try_from_decimal(1e10 + 1.0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(Money::from_cents(1050).format_with_symbol("€"), "€10.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("1,250.00").unwrap().cents(), 125000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
    }

    #[test]
    fn test_parse_rejects_oversized_amounts() {
        assert_eq!(
            Money::parse("99999999999999999"),
            Err(MoneyParseError::OutOfRange("99999999999999999".to_string()))
        );
        assert!(matches!(
            Money::parse("-12345678901234567890.00"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("10000000000.01"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert_eq!(Money::parse("10000000000").unwrap(), Money::MAX);
        assert_eq!(Money::parse("-10000000000").unwrap(), -Money::MAX);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX);
        assert_eq!((big + big).cents(), i64::MAX);
        assert_eq!((-big - big).cents(), i64::MIN);
        let total: Money = vec![big, big, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MIN).abs().cents(), i64::MAX);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(Money::from_cents(5000).percent_of(Money::from_cents(10000)), 50.0);
        assert_eq!(Money::from_cents(20000).percent_of(Money::zero()), 0.0);
        assert_eq!(Money::zero().percent_of(Money::from_cents(100)), 0.0);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let borrowed: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(borrowed, total);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_deserialize_from_string_and_integer() {
        let from_text: Money = serde_json::from_str("\"$12.34\"").unwrap();
        assert_eq!(from_text.cents(), 1234);

        let from_int: Money = serde_json::from_str("42").unwrap();
        assert_eq!(from_int.cents(), 4200);

        assert!(serde_json::from_str::<Money>("\"twelve\"").is_err());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let err = serde_json::from_str::<Money>("1e300").unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(serde_json::from_str::<Money>("\"99999999999999999\"").is_err());
    }
}
