//! # Money Module
//!
//! Provides `Money` for prices and `Amount` for the totals computed from them.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    17.20 × 1 × 30 / 100 = 5.159999999999999  ❌ which way to round?     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1720 × 1 × 30 = 51600 → / 100 = 516 cents exactly                   │
//! │    Remainders are rounded half-to-even, explicitly, once per line      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Receipt Format
//! `Display` is the ticket's currency format: a `$` prefix, the whole
//! dollars (omitted when zero), a decimal point, and exactly two cent digits.
//! No thousands grouping.
//!
//! ```rust
//! use shopcart_core::money::Money;
//!
//! assert_eq!(Money::from_cents(30).to_string(), "$.30");
//! assert_eq!(Money::from_cents(10000).to_string(), "$100.00");
//!
//! // Parsing accepts the same format back, with or without the `$`
//! let price: Money = "17.20".parse().unwrap();
//! assert_eq!(price.cents(), 1720);
//! ```

use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Parsing accepts a leading `-`, even though validated
///   prices are always positive
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: serde sees the raw cent count
///
/// `Money` is what callers hand in: unit prices. Anything computed from a
/// price and a quantity is an [`Amount`].
///
/// ## Where Money is Used
/// ```text
/// add_item(price) ──► Item.unit_price ──► Amount::line_total(price, qty, d)
///                                                              │
///                          ticket footer ◄── Σ line totals ◄───┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Receipt currency format: `$` + dollars (blank when zero) + `.` + 2 digits.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        fmt::Display::fmt(&Amount::from_cents(u128::from(self.0.unsigned_abs())), f)
    }
}

/// Parses `"12.34"`, `"$12.34"`, `"$.30"`, `"7"`, `"7.5"`, `"-$5.50"`.
///
/// At most two fraction digits are accepted; the value is never routed
/// through a float.
impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidAmount {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let text = s.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let text = text.strip_prefix('$').unwrap_or(text);

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (text, None),
        };

        if whole.is_empty() && fraction.map_or(true, str::is_empty) {
            return Err(invalid("no digits"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal point"));
        }

        let fraction_cents = match fraction {
            None => 0,
            Some(f) if f.is_empty() || f.len() > 2 => {
                return Err(invalid("expected one or two digits after the decimal point"))
            }
            Some(f) if !f.chars().all(|c| c.is_ascii_digit()) => {
                return Err(invalid("expected digits after the decimal point"))
            }
            Some(f) => {
                let digits: i64 = f.parse().map_err(|_| invalid("bad fraction"))?;
                if f.len() == 1 {
                    digits * 10
                } else {
                    digits
                }
            }
        };

        let whole_dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount too large"))?
        };

        let cents = whole_dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_cents))
            .ok_or_else(|| invalid("amount too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Amount Type
// =============================================================================

/// Cents held by the low limb of an [`Amount`].
const LIMB: u128 = 10u128.pow(36);

/// A computed, non-negative sum of money: line totals and the ticket total.
///
/// ## Range
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  unit price      ≤ i64::MAX cents  ≈ 2^63                               │
/// │  × quantity      ≤ i64::MAX        ≈ 2^63                               │
/// │  = line total    < 2^126 cents     fits u128 (max ≈ 3.4 × 10^38)        │
/// │                                                                         │
/// │  Σ line totals   unbounded         high × 10^36 + low                   │
/// │                                    low < 10^36, high counts carries     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// A line adds under 86 to `high`, so no realistic number of lines can wrap
/// it. Every operation that builds an `Amount` is total; rendering a ticket
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    high: u128,
    low: u128,
}

impl Amount {
    /// Creates an Amount from a cent count.
    #[inline]
    pub const fn from_cents(cents: u128) -> Self {
        Amount {
            high: cents / LIMB,
            low: cents % LIMB,
        }
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Amount { high: 0, low: 0 }
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// The cent count, if it fits in a `u128`.
    pub fn cents(&self) -> Option<u128> {
        self.high.checked_mul(LIMB)?.checked_add(self.low)
    }

    /// `unit_price × quantity × (100 - discount_percent) / 100`, rounded
    /// half-to-even to the cent.
    ///
    /// ## Bankers Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  Exact value    Rounded                                             │
    /// │  12.5 cents  →  12   (tie, 12 is even)                              │
    /// │  13.5 cents  →  14   (tie, 14 is even)                              │
    /// │  13.6 cents  →  14                                                  │
    /// │  13.4 cents  →  13                                                  │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// Price and quantity are taken by magnitude; cart items always have both
    /// positive. Discounts above 100 leave nothing to pay.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::{Amount, Money};
    ///
    /// // $2.00 × 20 with a 2% bulk discount = $39.20
    /// let line = Amount::line_total(Money::from_cents(200), 20, 2);
    /// assert_eq!(line.to_string(), "$39.20");
    ///
    /// // 25 cents at 50% = 12.5 cents → 12 (half to even)
    /// assert_eq!(Amount::line_total(Money::from_cents(25), 1, 50).cents(), Some(12));
    /// ```
    pub fn line_total(unit_price: Money, quantity: i64, discount_percent: u32) -> Amount {
        let keep = 100u128.saturating_sub(u128::from(discount_percent));
        let gross =
            u128::from(unit_price.cents().unsigned_abs()) * u128::from(quantity.unsigned_abs());

        // gross × keep may not fit, so split gross into whole dollars and cents
        let whole = gross / 100 * keep;
        let part = gross % 100 * keep;
        let quotient = whole + part / 100;

        Amount::from_cents(round_half_even(quotient, part % 100, 100))
    }

    /// The exact cent count as decimal digits.
    fn cent_digits(&self) -> String {
        if self.high == 0 {
            self.low.to_string()
        } else {
            format!("{}{:036}", self.high, self.low)
        }
    }
}

/// Rounds `quotient + remainder / divisor` to an integer, ties going to the
/// even result.
fn round_half_even(quotient: u128, remainder: u128, divisor: u128) -> u128 {
    match (remainder * 2).cmp(&divisor) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 == 0 => quotient,
        Ordering::Equal => quotient + 1,
    }
}

/// Same receipt format as [`Money`].
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = self.low / 100;
        let cents = self.low % 100;

        if self.high > 0 {
            write!(f, "${}{dollars:034}.{cents:02}", self.high)
        } else if dollars == 0 {
            write!(f, "$.{cents:02}")
        } else {
            write!(f, "${dollars}.{cents:02}")
        }
    }
}

/// Serialized as a string of cent digits (`"55011"`); it may not fit any
/// JSON number type.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.cent_digits())
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        let low = self.low + other.low;
        Amount {
            high: self.high + other.high + low / LIMB,
            low: low % LIMB,
        }
    }
}

impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const BIG: i64 = i64::MAX;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(Money::default(), Money::zero());
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_display_receipt_format() {
        assert_eq!(Money::from_cents(30).to_string(), "$.30");
        assert_eq!(Money::from_cents(99).to_string(), "$.99");
        assert_eq!(Money::from_cents(1).to_string(), "$.01");
        assert_eq!(Money::from_cents(0).to_string(), "$.00");
        assert_eq!(Money::from_cents(10000).to_string(), "$100.00");
        assert_eq!(Money::from_cents(99905060).to_string(), "$999050.60");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(-30).to_string(), "-$.30");
        assert_eq!(Money::from_cents(i64::MIN).to_string(), "-$92233720368547758.08");
    }

    #[test]
    fn test_parse() {
        assert_eq!("17.20".parse::<Money>().unwrap().cents(), 1720);
        assert_eq!("$17.20".parse::<Money>().unwrap().cents(), 1720);
        assert_eq!("$.30".parse::<Money>().unwrap().cents(), 30);
        assert_eq!(".3".parse::<Money>().unwrap().cents(), 30);
        assert_eq!("7".parse::<Money>().unwrap().cents(), 700);
        assert_eq!(" 0.99 ".parse::<Money>().unwrap().cents(), 99);
        assert_eq!("-$5.50".parse::<Money>().unwrap().cents(), -550);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for input in ["", "$", ".", "7.", "12,50", "abc", "1.2x", "+1.00", "$-1"] {
            let err = input.parse::<Money>().unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidAmount { .. }),
                "expected InvalidAmount for {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_sub_cent_prices() {
        for input in ["0.999", "$.005", "1.001"] {
            let err = input.parse::<Money>().unwrap_err();
            assert!(matches!(err, CoreError::InvalidAmount { .. }), "{input:?}");
        }
    }

    #[test]
    fn test_parse_overflow() {
        let err = "99999999999999999999".parse::<Money>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount { .. }));
    }

    #[test]
    fn test_display_parses_back() {
        for cents in [1, 30, 99, 100, 516, 3920, 55011] {
            let money = Money::from_cents(cents);
            assert_eq!(money.to_string().parse::<Money>().unwrap(), money);
        }
    }

    #[test]
    fn test_line_total() {
        // $20.00 × 4 at 50% off
        assert_eq!(Amount::line_total(Money::from_cents(2000), 4, 50).cents(), Some(4000));
        // $17.20 at 70% off
        assert_eq!(Amount::line_total(Money::from_cents(1720), 1, 70).cents(), Some(516));
        assert_eq!(Amount::line_total(Money::from_cents(99), 5, 0).cents(), Some(495));
        assert!(Amount::line_total(Money::from_cents(1234), 3, 100).is_zero());
        assert!(Amount::line_total(Money::from_cents(1234), 3, 150).is_zero());
    }

    #[test]
    fn test_line_total_rounds_half_to_even() {
        let total = |cents, discount| Amount::line_total(Money::from_cents(cents), 1, discount);

        // 12.5 → 12, 13.5 → 14
        assert_eq!(total(25, 50).cents(), Some(12));
        assert_eq!(total(27, 50).cents(), Some(14));
        // 29.7 → 30, 29.1 → 29
        assert_eq!(total(99, 70).cents(), Some(30));
        assert_eq!(total(97, 70).cents(), Some(29));
        // 1.5 → 2: the exact tie, not a float's 1.4999…
        assert_eq!(total(5, 70).to_string(), "$.02");
    }

    #[test]
    fn test_line_total_at_extremes() {
        // (2^63 - 1)^2 cents, past the low limb
        let line = Amount::line_total(Money::from_cents(BIG), BIG, 0);
        assert_eq!(line.cents(), Some(85070591730234615847396907784232501249));
        assert_eq!(line.to_string(), "$850705917302346158473969077842325012.49");

        // $2.00 × i64::MAX at 80% off = 40 × i64::MAX cents
        let line = Amount::line_total(Money::from_cents(200), BIG, 80);
        assert_eq!(line.cents(), Some(40 * BIG as u128));
        assert_eq!(line.to_string(), "$3689348814741910322.80");
    }

    #[test]
    fn test_sum_carries_past_u128() {
        let line = Amount::line_total(Money::from_cents(BIG), BIG, 0);
        let total: Amount = [line, line, line].into_iter().sum();

        assert_eq!(total.to_string(), "$2552117751907038475421907233526975037.47");
        assert!(total > line);

        let five: Amount = std::iter::repeat(line).take(5).sum();
        assert_eq!(five.cents(), None);
    }

    #[test]
    fn test_sum() {
        let total: Amount = [495, 4000, 516, 50000]
            .into_iter()
            .map(Amount::from_cents)
            .sum();
        assert_eq!(total.cents(), Some(55011));
        assert_eq!(total.to_string(), "$550.11");

        let mut running = Amount::zero();
        running += Amount::from_cents(30);
        assert_eq!(running.to_string(), "$.30");

        let empty: Amount = std::iter::empty().sum();
        assert!(empty.is_zero());
        assert_eq!(empty, Amount::default());
    }

    #[test]
    fn test_amount_serializes_as_cent_digits() {
        let json = serde_json::to_string(&Amount::from_cents(55011)).unwrap();
        assert_eq!(json, "\"55011\"");

        let line = Amount::line_total(Money::from_cents(BIG), BIG, 0);
        let total = line + line + line;
        assert_eq!(
            serde_json::to_value(total).unwrap(),
            "255211775190703847542190723352697503747"
        );
    }
}
