//! Amount input parsing
//!
//! Turns raw text from the shell into `Option<Decimal>` before the account
//! validates it. Empty input is a cancel; anything non-numeric becomes
//! `CoreError::InvalidAmount` here, so the account never sees malformed data.

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse one line of amount input.
///
/// - `""` / whitespace only -> `Ok(None)` (cancelled)
/// - `"1500"`, `"1500.00"`, `".5"`, `"-5"`, `"1.5e3"` -> `Ok(Some(_))`
/// - anything else -> `Err(InvalidAmount)`
///
/// Sign is not checked here; `-5` parses and is rejected later by the
/// account.
pub fn parse_amount(raw: &str) -> CoreResult<Option<Decimal>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map(Some)
        .map_err(|_| CoreError::invalid_amount(format!("not a number: {:?}", trimmed)))
}
