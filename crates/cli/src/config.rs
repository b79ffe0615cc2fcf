//! Startup configuration
//!
//! Validated settings for one run, built from the parsed command line.
//! Nothing is read from or written to disk.

use atm_core::{Account, Amount, Currency, Pin, PinError};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::shell::Render;
use crate::{Cli, CurrencyArg};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid --pin: {0}")]
    Pin(#[from] PinError),

    #[error("opening balance cannot be negative: {0}")]
    NegativeBalance(Decimal),
}

#[derive(Debug, Clone)]
pub struct AtmConfig {
    pub pin: Pin,
    pub opening_balance: Amount,
    pub currency: Currency,
    pub render: Render,
}

impl AtmConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let pin = Pin::new(&cli.pin)?;
        let opening_balance =
            Amount::new(cli.balance).map_err(|_| ConfigError::NegativeBalance(cli.balance))?;

        Ok(Self {
            pin,
            opening_balance,
            currency: cli.currency.to_currency(),
            render: if cli.json { Render::Json } else { Render::Text },
        })
    }

    /// Fresh, unauthenticated account for this run
    pub fn open_account(&self) -> Account {
        Account::new(
            self.pin.clone(),
            self.opening_balance,
            self.currency.clone(),
        )
    }
}

impl CurrencyArg {
    pub fn to_currency(&self) -> Currency {
        match self {
            CurrencyArg::Inr => Currency::inr(),
            CurrencyArg::Usd => Currency::usd(),
        }
    }
}
