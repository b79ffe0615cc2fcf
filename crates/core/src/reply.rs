//! Request/response shapes at the shell boundary
//!
//! `Reply` is what a front-end gets back from each account operation:
//! `{"ok": bool, "reason"?: ..., "amount"?: "<decimal>"}`.
//! Decimals serialize as strings so nothing is lost on the way out.

use crate::account::TxnOutcome;
use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Why an operation did not succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    Invalid,
    Insufficient,
    Cancelled,
    IncorrectPin,
    Unauthenticated,
    /// Menu choice that is not on offer; never produced by the account
    UnknownOption,
}

impl From<&CoreError> for Reason {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::IncorrectPin => Reason::IncorrectPin,
            CoreError::Unauthenticated => Reason::Unauthenticated,
            CoreError::InvalidAmount(_) => Reason::Invalid,
            CoreError::InsufficientBalance { .. } => Reason::Insufficient,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl Reply {
    pub fn success() -> Self {
        Self {
            ok: true,
            reason: None,
            amount: None,
        }
    }

    pub fn failure(reason: Reason) -> Self {
        Self {
            ok: false,
            reason: Some(reason),
            amount: None,
        }
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// `authenticate` -> `{ok}`
    pub fn from_auth(result: &CoreResult<()>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(err) => Self::failure(err.into()),
        }
    }

    /// `balance` -> `{ok, amount}`
    pub fn from_balance(result: &CoreResult<Decimal>) -> Self {
        match result {
            Ok(balance) => Self::success().with_amount(*balance),
            Err(err) => Self::failure(err.into()),
        }
    }

    /// `deposit` / `withdraw` -> `{ok, reason?, amount?}`
    ///
    /// `amount` is the amount moved, not the new balance.
    pub fn from_txn(result: &CoreResult<TxnOutcome>) -> Self {
        match result {
            Ok(outcome) => match outcome.amount() {
                Some(amount) => Self::success().with_amount(amount),
                None => Self::failure(Reason::Cancelled),
            },
            Err(err) => Self::failure(err.into()),
        }
    }
}
