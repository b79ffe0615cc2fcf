//! # Error Module
//!
//! Domain errors for the account session, using thiserror.

use crate::money::AmountError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
///
/// Every variant leaves the account untouched; none of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // === Session errors ===
    #[error("Incorrect PIN")]
    IncorrectPin,

    #[error("Session is not authenticated")]
    Unauthenticated,

    // === Money errors ===
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: Decimal, available: Decimal },
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn invalid_amount(detail: impl Into<String>) -> Self {
        CoreError::InvalidAmount(detail.into())
    }

    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, CoreError::InsufficientBalance { .. })
    }

    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, CoreError::InvalidAmount(_))
    }
}

/// Amounts that cannot be applied exactly are invalid amounts
impl From<AmountError> for CoreError {
    fn from(err: AmountError) -> Self {
        CoreError::InvalidAmount(err.to_string())
    }
}
