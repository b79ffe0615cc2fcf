//! ATM CLI - interactive account session in the terminal
//!
//! Usage:
//! ```bash
//! atm                                   # PIN 1234, balance ₹5000.00
//! atm --pin 0420 --balance 250 --currency usd
//! printf '1234\n2\n1500\n1\n4\n' | atm --json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod shell;

use config::AtmConfig;
use shell::Shell;

/// ATM - PIN-gated balance, deposit and withdraw for a single account
#[derive(Parser)]
#[command(name = "atm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Stored 4-digit PIN
    #[arg(long, env = "ATM_PIN", default_value = atm_core::DEFAULT_PIN, hide_env_values = true)]
    pub pin: String,

    /// Opening balance
    #[arg(long, env = "ATM_BALANCE", default_value_t = atm_core::DEFAULT_OPENING_BALANCE.value())]
    pub balance: Decimal,

    /// Display currency
    #[arg(long, default_value = "inr")]
    pub currency: CurrencyArg,

    /// Print one JSON reply per line instead of screens and prompts
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CurrencyArg {
    Inr,
    Usd,
}

fn main() -> Result<()> {
    // Initialize tracing on stderr so it stays out of the screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atm=warn,atm_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AtmConfig::from_cli(&cli).context("Invalid configuration")?;

    let mut account = config.open_account();
    info!(%account, "ATM session started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let exit = Shell::new(&mut account, stdin.lock(), stdout.lock(), config.render)
        .run()
        .context("Terminal I/O failed")?;

    debug!(session_id = %account.session_id, ?exit, "ATM session ended");
    Ok(())
}
