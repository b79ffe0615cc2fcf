//! Interactive shell: login screen, then the main menu.
//!
//! Reads one line at a time from any `BufRead` and writes to any `Write`,
//! so sessions can be scripted. All account rules live in `atm_core`; this
//! module only collects input and turns results into messages.

use atm_core::{parse_amount, Account, CoreError, Reason, Reply, TxnKind, TxnOutcome};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// How replies are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Screens, prompts and messages
    Text,
    /// One JSON `Reply` per line, no prompts
    Json,
}

/// Why the shell stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    /// User picked Exit
    Exited,
    /// Input ran out
    EndOfInput,
}

pub struct Shell<'a, R, W> {
    account: &'a mut Account,
    input: R,
    output: W,
    render: Render,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(account: &'a mut Account, input: R, output: W, render: Render) -> Self {
        Self {
            account,
            input,
            output,
            render,
        }
    }

    pub fn run(&mut self) -> io::Result<ShellExit> {
        if !self.login()? {
            return Ok(ShellExit::EndOfInput);
        }
        self.main_menu()
    }

    /// Returns false if input ended before a correct PIN
    fn login(&mut self) -> io::Result<bool> {
        self.text("Welcome to ATM")?;
        loop {
            self.prompt("Enter your 4-digit PIN: ")?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            // exact comparison: only the line terminator is stripped
            let candidate = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
            let result = self.account.authenticate(candidate);
            let reply = Reply::from_auth(&result);
            match result {
                Ok(()) => {
                    self.emit(&reply, "")?;
                    return Ok(true);
                }
                Err(_) => self.emit(&reply, "Error: Incorrect PIN!")?,
            }
        }
    }

    fn main_menu(&mut self) -> io::Result<ShellExit> {
        loop {
            self.text("")?;
            self.text("ATM Main Menu")?;
            self.text("  1) Check Balance")?;
            self.text("  2) Deposit")?;
            self.text("  3) Withdraw")?;
            self.text("  4) Exit")?;
            self.prompt("Select an option: ")?;

            let Some(line) = self.read_line()? else {
                return Ok(ShellExit::EndOfInput);
            };
            let choice = line.trim();
            debug!(choice, "menu selection");

            match choice {
                "1" => self.check_balance()?,
                "2" => self.transact(TxnKind::Deposit)?,
                "3" => self.transact(TxnKind::Withdrawal)?,
                "4" => {
                    self.text("Goodbye.")?;
                    return Ok(ShellExit::Exited);
                }
                _ => self.emit(&Reply::failure(Reason::UnknownOption), "Error: Unknown option.")?,
            }
        }
    }

    fn check_balance(&mut self) -> io::Result<()> {
        let result = self.account.balance();
        let reply = Reply::from_balance(&result);
        match result {
            Ok(balance) => {
                let message = format!("Your balance is {}", self.account.currency.format(balance));
                self.emit(&reply, &message)
            }
            Err(err) => self.emit(&reply, failure_message(&err)),
        }
    }

    /// Parse the amount first, then hand it to the account.
    fn transact(&mut self, kind: TxnKind) -> io::Result<()> {
        let verb = match kind {
            TxnKind::Deposit => "deposit",
            TxnKind::Withdrawal => "withdraw",
        };
        self.prompt(&format!("Enter amount to {}: ", verb))?;
        let line = self.read_line()?.unwrap_or_default();

        let amount = match parse_amount(&line) {
            Ok(amount) => amount,
            Err(err) => {
                return self.emit(&Reply::failure((&err).into()), "Error: Invalid input.");
            }
        };

        let result = match kind {
            TxnKind::Deposit => self.account.deposit(amount),
            TxnKind::Withdrawal => self.account.withdraw(amount),
        };
        let reply = Reply::from_txn(&result);

        match result {
            Ok(TxnOutcome::Completed { kind, amount, .. }) => {
                let done = match kind {
                    TxnKind::Deposit => "deposited",
                    TxnKind::Withdrawal => "withdrawn",
                };
                let message = format!(
                    "Success: {} {} successfully.",
                    self.account.currency.format(amount),
                    done
                );
                self.emit(&reply, &message)
            }
            Ok(TxnOutcome::Cancelled) => self.emit(&reply, ""),
            Err(err) => self.emit(&reply, failure_message(&err)),
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Text mode only
    fn text(&mut self, line: &str) -> io::Result<()> {
        if self.render == Render::Text {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    /// Text mode only; no newline
    fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        if self.render == Render::Text {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// JSON mode writes the reply; text mode writes `message` unless empty.
    fn emit(&mut self, reply: &Reply, message: &str) -> io::Result<()> {
        match self.render {
            Render::Json => {
                serde_json::to_writer(&mut self.output, reply).map_err(io::Error::from)?;
                writeln!(self.output)?;
            }
            Render::Text if !message.is_empty() => writeln!(self.output, "{}", message)?,
            Render::Text => {}
        }
        self.output.flush()
    }
}

fn failure_message(err: &CoreError) -> &'static str {
    match err {
        CoreError::IncorrectPin => "Error: Incorrect PIN!",
        CoreError::Unauthenticated => "Error: Please log in first.",
        CoreError::InvalidAmount(_) => "Error: Enter a valid amount.",
        CoreError::InsufficientBalance { .. } => "Error: Insufficient balance.",
    }
}
