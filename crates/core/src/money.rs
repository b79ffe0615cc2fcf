//! # Money Module
//!
//! Currency and Amount built on rust_decimal so balances stay exact.
//! `Amount` can never hold a negative value, which is what keeps the
//! account balance at or above zero.

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Why an amount could not be built or applied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount cannot be negative: {0}")]
    Negative(Decimal),

    #[error("Amount {0} is outside the representable range")]
    Overflow(Decimal),

    #[error("Amount {delta} cannot be applied exactly to {base}")]
    Inexact { base: Decimal, delta: Decimal },
}

/// A non-negative decimal amount.
///
/// Arithmetic never rounds: `plus` and `minus` fail with `Inexact` when the
/// result would need more precision than `Decimal` carries.
///
/// ```
/// use atm_core::Amount;
/// use rust_decimal::Decimal;
///
/// let balance = Amount::new(Decimal::new(500000, 2)).unwrap();
/// let tiny = Amount::new(Decimal::new(1, 28)).unwrap();
/// assert!(balance.minus(tiny).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

/// 5000.00, the opening balance when none is configured
pub const DEFAULT_OPENING_BALANCE: Amount = Amount(Decimal::from_parts(500_000, 0, 0, false, 2));

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            return Err(AmountError::Negative(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// `self + delta`, exactly
    pub fn plus(self, delta: Amount) -> Result<Amount, AmountError> {
        let sum = self
            .0
            .checked_add(delta.0)
            .ok_or(AmountError::Overflow(delta.0))?;

        let exact = sum.checked_sub(self.0) == Some(delta.0)
            && sum.checked_sub(delta.0) == Some(self.0);
        if !exact {
            return Err(self.inexact(delta));
        }
        Ok(Amount(sum))
    }

    /// `self - delta`, exactly; never below zero
    pub fn minus(self, delta: Amount) -> Result<Amount, AmountError> {
        let diff = self
            .0
            .checked_sub(delta.0)
            .ok_or(AmountError::Overflow(delta.0))?;
        if diff < Decimal::ZERO {
            return Err(AmountError::Negative(diff));
        }

        let exact = diff.checked_add(delta.0) == Some(self.0)
            && self.0.checked_sub(diff) == Some(delta.0);
        if !exact {
            return Err(self.inexact(delta));
        }
        Ok(Amount(diff))
    }

    fn inexact(self, delta: Amount) -> AmountError {
        AmountError::Inexact {
            base: self.0,
            delta: delta.0,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display currency for the account.
///
/// Only affects how amounts are rendered; the ledger itself is a single
/// currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// ISO 4217 code
    pub code: String,
    /// Symbol printed in front of amounts
    pub symbol: String,
    /// Decimal places used for display
    pub decimals: u32,
}

impl Currency {
    pub fn new(code: &str, symbol: &str, decimals: u32) -> Self {
        Self {
            code: code.to_uppercase(),
            symbol: symbol.to_string(),
            decimals,
        }
    }

    // === Preset currencies ===

    /// Indian Rupee (2 decimals)
    pub fn inr() -> Self {
        Self::new("INR", "₹", 2)
    }

    /// US Dollar (2 decimals)
    pub fn usd() -> Self {
        Self::new("USD", "$", 2)
    }

    /// Render an amount as `{symbol}{value}` rounded to `decimals` places.
    ///
    /// ```
    /// use atm_core::Currency;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Currency::inr().format(Decimal::new(6500, 0)), "₹6500.00");
    /// ```
    pub fn format(&self, amount: Decimal) -> String {
        let mut rounded = amount.round_dp(self.decimals);
        rounded.rescale(self.decimals);
        format!("{}{}", self.symbol, rounded)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::inr()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
