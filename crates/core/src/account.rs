//! # Account Module
//!
//! The single account simulated by the ATM: a stored PIN, a balance, and a
//! one-way session flag. Every balance operation checks the session itself
//! and reports failures as `CoreError` values; nothing here panics.

use crate::error::{CoreError, CoreResult};
use crate::money::{Amount, Currency, DEFAULT_OPENING_BALANCE};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Number of digits in a stored PIN
pub const PIN_LENGTH: usize = 4;

/// PIN used when none is configured
pub const DEFAULT_PIN: &str = "1234";

/// A configured PIN that is not `PIN_LENGTH` ASCII digits
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("PIN must be exactly {} digits", PIN_LENGTH)]
pub struct PinError;

/// Stored credential: exactly `PIN_LENGTH` ASCII digits.
///
/// `Debug` never prints the digits.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    pub fn new(pin: &str) -> Result<Self, PinError> {
        if pin.len() != PIN_LENGTH || !pin.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PinError);
        }
        Ok(Self(pin.to_string()))
    }

    /// Exact comparison; the candidate is not normalized in any way.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// Session flag. Moves from `Unauthenticated` to `Authenticated` once and
/// never back; there is no logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated { since: DateTime<Utc> },
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Unauthenticated => "unauthenticated",
            SessionState::Authenticated { .. } => "authenticated",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of balance-changing transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnKind {
    Deposit,
    Withdrawal,
}

impl TxnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxnKind::Deposit => "deposit",
            TxnKind::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for TxnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a deposit or withdrawal that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnOutcome {
    /// Balance changed by `amount`; `balance` is the new balance
    Completed {
        kind: TxnKind,
        amount: Decimal,
        balance: Decimal,
    },
    /// No amount was supplied; nothing changed
    Cancelled,
}

impl TxnOutcome {
    /// Amount moved, if the transaction completed
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            TxnOutcome::Completed { amount, .. } => Some(*amount),
            TxnOutcome::Cancelled => None,
        }
    }
}

/// The account session.
///
/// One instance lives for the whole process run and is handed to whatever
/// handles each user action by `&mut`.
#[derive(Debug, Clone)]
pub struct Account {
    /// Correlation id for log events
    pub session_id: Uuid,
    /// Display currency
    pub currency: Currency,
    pin: Pin,
    balance: Amount,
    session: SessionState,
}

impl Account {
    pub fn new(pin: Pin, opening_balance: Amount, currency: Currency) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            currency,
            pin,
            balance: opening_balance,
            session: SessionState::Unauthenticated,
        }
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.session, SessionState::Authenticated { .. })
    }

    /// Open the session if `candidate` equals the stored PIN.
    ///
    /// Attempts are unlimited. A second success keeps the first
    /// `since` timestamp.
    pub fn authenticate(&mut self, candidate: &str) -> CoreResult<()> {
        if !self.pin.matches(candidate) {
            warn!(session_id = %self.session_id, "PIN rejected");
            return Err(CoreError::IncorrectPin);
        }

        if !self.is_authenticated() {
            self.session = SessionState::Authenticated { since: Utc::now() };
            info!(session_id = %self.session_id, "session authenticated");
        }
        Ok(())
    }

    /// Current balance
    pub fn balance(&self) -> CoreResult<Decimal> {
        self.ensure_authenticated()?;
        Ok(self.balance.value())
    }

    /// Add `amount` to the balance.
    ///
    /// `None` means the user cancelled and is not an error.
    pub fn deposit(&mut self, amount: Option<Decimal>) -> CoreResult<TxnOutcome> {
        self.ensure_authenticated()?;
        let Some(amount) = amount else {
            debug!(session_id = %self.session_id, "deposit cancelled");
            return Ok(TxnOutcome::Cancelled);
        };

        let credit = self.positive(amount, TxnKind::Deposit)?;
        let new_balance = self.balance.plus(credit).map_err(|e| {
            debug!(session_id = %self.session_id, %amount, error = %e, "deposit rejected");
            CoreError::from(e)
        })?;

        Ok(self.commit(TxnKind::Deposit, amount, new_balance))
    }

    /// Subtract `amount` from the balance.
    ///
    /// Checks run in order: session, cancellation, amount <= 0, then
    /// amount > balance. An amount too small to change the balance exactly
    /// is invalid.
    pub fn withdraw(&mut self, amount: Option<Decimal>) -> CoreResult<TxnOutcome> {
        self.ensure_authenticated()?;
        let Some(amount) = amount else {
            debug!(session_id = %self.session_id, "withdrawal cancelled");
            return Ok(TxnOutcome::Cancelled);
        };

        let debit = self.positive(amount, TxnKind::Withdrawal)?;
        if debit > self.balance {
            debug!(
                session_id = %self.session_id,
                needed = %amount,
                available = %self.balance,
                "withdrawal exceeds balance"
            );
            return Err(CoreError::InsufficientBalance {
                needed: amount,
                available: self.balance.value(),
            });
        }
        let new_balance = self.balance.minus(debit).map_err(|e| {
            debug!(session_id = %self.session_id, %amount, error = %e, "withdrawal rejected");
            CoreError::from(e)
        })?;

        Ok(self.commit(TxnKind::Withdrawal, amount, new_balance))
    }

    fn ensure_authenticated(&self) -> CoreResult<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(CoreError::Unauthenticated)
        }
    }

    fn positive(&self, amount: Decimal, kind: TxnKind) -> CoreResult<Amount> {
        if amount <= Decimal::ZERO {
            debug!(session_id = %self.session_id, %amount, %kind, "non-positive amount rejected");
            return Err(CoreError::invalid_amount(format!(
                "{} amount must be positive: {}",
                kind, amount
            )));
        }
        Ok(Amount::new(amount)?)
    }

    fn commit(&mut self, kind: TxnKind, amount: Decimal, new_balance: Amount) -> TxnOutcome {
        self.balance = new_balance;
        info!(
            session_id = %self.session_id,
            %kind,
            %amount,
            balance = %self.balance,
            "transaction completed"
        );
        TxnOutcome::Completed {
            kind,
            amount,
            balance: self.balance.value(),
        }
    }
}

impl Default for Account {
    /// PIN "1234", balance 5000.00, INR
    fn default() -> Self {
        Self::new(
            Pin(DEFAULT_PIN.to_string()),
            DEFAULT_OPENING_BALANCE,
            Currency::default(),
        )
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account session {} (status: {}, currency: {})",
            self.session_id, self.session, self.currency
        )
    }
}
