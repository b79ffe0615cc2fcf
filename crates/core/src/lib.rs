//! # ATM Core
//!
//! Account session for the ATM simulator:
//! - `Account`: stored PIN, non-negative balance, one-way session flag
//! - `input::parse_amount`: raw text -> `Option<Decimal>` before validation
//! - `Reply`: the `{ok, reason?, amount?}` shape handed back to a front-end
//!
//! ## Example
//!
//! ```
//! use atm_core::{Account, TxnOutcome};
//! use rust_decimal::Decimal;
//!
//! let mut account = Account::default();
//! account.authenticate("1234").unwrap();
//!
//! let outcome = account.deposit(Some(Decimal::new(150000, 2))).unwrap();
//! assert!(matches!(outcome, TxnOutcome::Completed { .. }));
//! assert_eq!(account.balance().unwrap(), Decimal::new(650000, 2));
//! ```

pub mod account;
pub mod error;
pub mod input;
pub mod money;
pub mod reply;

pub use account::{
    Account, Pin, PinError, SessionState, TxnKind, TxnOutcome, DEFAULT_PIN, PIN_LENGTH,
};
pub use error::{CoreError, CoreResult};
pub use input::parse_amount;
pub use money::{Amount, AmountError, Currency, DEFAULT_OPENING_BALANCE};
pub use reply::{Reason, Reply};
