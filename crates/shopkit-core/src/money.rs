//! # Money Module
//!
//! Currency display for storefront prices.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CALCULATE IN f64, ROUND ONCE FOR DISPLAY                               │
//! │                                                                         │
//! │  calculate_discounted_price ──► 149.9925                               │
//! │  calculate_tax              ──►  12.749362...                          │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │  shortest decimal text      ──► "149.9925" / "12.749362..."            │
//! │  (half away from zero at the cent)   │                                  │
//! │                                      ▼                                  │
//! │  CurrencyFormat::format     ──► "$149.99" / "$12.75"                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopkit_core::money::{format_as_price, CurrencyFormat, Money};
//!
//! assert_eq!(format_as_price(1234.56), "$1,234.56");
//! assert_eq!(format_as_price(9.999), "$10.00");
//! assert_eq!(format_as_price(1.005), "$1.01");
//!
//! let euro = CurrencyFormat::new("€", ".", ",");
//! assert_eq!(euro.format(1234.5), "€1.234,50");
//!
//! assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents, produced by rounding a calculated amount.
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative amounts still render (refund lines, bad input)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Display only**: Calculators work in `f64`; `Money` is what gets shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a decimal amount to the nearest cent, halves away from zero.
    ///
    /// The amount is rounded as written in its shortest decimal form, so
    /// `1.005` becomes 101 cents even though the nearest `f64` is slightly
    /// below it. Returns `None` for NaN, infinities and amounts whose cents
    /// do not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(9.999), Some(Money::from_cents(1000)));
    /// assert_eq!(Money::from_amount(1.005), Some(Money::from_cents(101)));
    /// assert_eq!(Money::from_amount(f64::NAN), None);
    /// assert_eq!(Money::from_amount(1e20), None);
    /// ```
    pub fn from_amount(amount: f64) -> Option<Self> {
        let rounded = RoundedAmount::from_f64(amount)?;
        let cents = rounded
            .whole
            .parse::<i64>()
            .ok()?
            .checked_mul(100)?
            .checked_add(i64::from(rounded.cents))?;

        Some(Money(if rounded.negative { -cents } else { cents }))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar magnitude.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), 5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> u64 {
        self.0.unsigned_abs() / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> u64 {
        self.0.unsigned_abs() % 100
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-550).abs(), Money::from_cents(550));
    /// ```
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }
}

// =============================================================================
// Arithmetic Operations
// =============================================================================

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
///
/// The result may be negative (a discount line, a refund).
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Renders en-US dollars: `$1,234.56`, `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&CurrencyFormat::default().format_money(*self))
    }
}

// =============================================================================
// Currency Format
// =============================================================================

/// Locale settings for rendering prices.
///
/// Constructed per use; there is no shared formatter instance. The default
/// is US dollars (`$`, `,` grouping, `.` decimal point).
///
/// ## Config File Shape
/// ```toml
/// [currency]
/// symbol = "$"
/// thousands_separator = ","
/// decimal_separator = "."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct CurrencyFormat {
    /// Prefix placed after any minus sign (`-$5.00`).
    pub symbol: String,

    /// Inserted between groups of three whole-unit digits.
    pub thousands_separator: String,

    /// Placed between whole units and the two cent digits.
    pub decimal_separator: String,
}

impl CurrencyFormat {
    pub fn new(
        symbol: impl Into<String>,
        thousands_separator: impl Into<String>,
        decimal_separator: impl Into<String>,
    ) -> Self {
        CurrencyFormat {
            symbol: symbol.into(),
            thousands_separator: thousands_separator.into(),
            decimal_separator: decimal_separator.into(),
        }
    }

    /// US dollars, as rendered by an en-US currency formatter.
    pub fn en_us() -> Self {
        CurrencyFormat::new("$", ",", ".")
    }

    /// Formats an amount, rounding to the nearest cent.
    ///
    /// Never fails: NaN renders as `$NaN` and infinities as `$∞` / `-$∞`.
    ///
    /// Whole units are never truncated: `1e20` renders every digit.
    pub fn format(&self, amount: f64) -> String {
        match RoundedAmount::from_f64(amount) {
            Some(rounded) => self.render(&rounded),
            None if amount.is_nan() => format!("{}NaN", self.symbol),
            None => {
                let sign = if amount.is_sign_negative() { "-" } else { "" };
                format!("{}{}∞", sign, self.symbol)
            }
        }
    }

    /// Formats an already-rounded value.
    pub fn format_money(&self, money: Money) -> String {
        self.render(&RoundedAmount {
            negative: money.is_negative(),
            whole: money.dollars().to_string(),
            cents: money.cents_part() as u8,
        })
    }

    fn render(&self, rounded: &RoundedAmount) -> String {
        let sign = if rounded.negative { "-" } else { "" };
        format!(
            "{}{}{}{}{:02}",
            sign,
            self.symbol,
            group_thousands(&rounded.whole, &self.thousands_separator),
            self.decimal_separator,
            rounded.cents
        )
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::en_us()
    }
}

/// Formats an amount as US-dollar text with two decimal digits.
///
/// ## Example
/// ```rust
/// use shopkit_core::money::format_as_price;
///
/// assert_eq!(format_as_price(10.99), "$10.99");
/// assert_eq!(format_as_price(1_000_000.0), "$1,000,000.00");
/// assert_eq!(format_as_price(-5.5), "-$5.50");
/// ```
pub fn format_as_price(amount: f64) -> String {
    CurrencyFormat::en_us().format(amount)
}

// =============================================================================
// Decimal Rounding
// =============================================================================

/// A finite amount rounded to the cent, with unbounded whole units.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RoundedAmount {
    /// Set only when the rounded value is nonzero.
    negative: bool,
    /// Whole-unit digits, no leading zeros.
    whole: String,
    cents: u8,
}

impl RoundedAmount {
    /// Rounds the shortest decimal text of `amount` half away from zero.
    ///
    /// `f64`'s `Display` is the shortest text that reads back to the same
    /// value and never uses exponent notation.
    fn from_f64(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let text = amount.abs().to_string();
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let mut digits = fraction
            .bytes()
            .map(|b| b - b'0')
            .chain(std::iter::repeat(0));
        let (tenths, hundredths, rest) = (
            digits.next().unwrap_or(0),
            digits.next().unwrap_or(0),
            digits.next().unwrap_or(0),
        );

        let mut cents = tenths * 10 + hundredths;
        let mut whole = whole.to_string();
        if rest >= 5 {
            cents += 1;
            if cents == 100 {
                cents = 0;
                whole = increment_digits(&whole);
            }
        }

        let is_zero = cents == 0 && whole.bytes().all(|b| b == b'0');

        Some(RoundedAmount {
            negative: amount < 0.0 && !is_zero,
            whole,
            cents,
        })
    }
}

/// Adds one to a string of decimal digits.
fn increment_digits(digits: &str) -> String {
    let mut out: Vec<char> = digits.chars().collect();

    for c in out.iter_mut().rev() {
        if *c == '9' {
            *c = '0';
        } else {
            *c = char::from(*c as u8 + 1);
            return out.into_iter().collect();
        }
    }

    out.insert(0, '1');
    out.into_iter().collect()
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================
