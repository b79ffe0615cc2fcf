//! Integration tests for the account session
//!
//! These run whole sessions through the public API the way a front-end
//! would: parse the raw input, then hand the parsed amount to the account.

use atm_core::{parse_amount, Account, CoreError, Reason, Reply, TxnOutcome};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn opened() -> Account {
    let mut account = Account::default();
    account.authenticate("1234").unwrap();
    account
}

/// Test: 5000.00 -> deposit -> overdraw -> drain -> overdraw by a cent
#[test]
fn test_full_session_scenario() {
    let mut account = Account::default();

    // 1. Log in
    assert!(account.authenticate("1234").is_ok());

    // 2. Deposit 1500.00
    let outcome = account.deposit(Some(dec!(1500.00))).unwrap();
    assert_eq!(outcome.amount(), Some(dec!(1500.00)));
    assert_eq!(account.balance().unwrap(), dec!(6500.00));

    // 3. Withdraw more than the balance
    let err = account.withdraw(Some(dec!(7000.00))).unwrap_err();
    assert!(err.is_insufficient_balance());
    assert_eq!(account.balance().unwrap(), dec!(6500.00));

    // 4. Withdraw everything
    account.withdraw(Some(dec!(6500.00))).unwrap();
    assert_eq!(account.balance().unwrap(), dec!(0.00));
    assert_eq!(account.currency.format(account.balance().unwrap()), "₹0.00");

    // 5. One cent over an empty account
    let err = account.withdraw(Some(dec!(0.01))).unwrap_err();
    assert_eq!(
        err,
        CoreError::InsufficientBalance {
            needed: dec!(0.01),
            available: dec!(0.00),
        }
    );
}

/// Test: wrong PIN leaves balance and session untouched
#[test]
fn test_incorrect_pin_scenario() {
    let mut account = Account::default();
    let session_before = account.session();

    assert_eq!(account.authenticate("0000"), Err(CoreError::IncorrectPin));
    assert_eq!(account.session(), session_before);
    assert!(!account.is_authenticated());

    account.authenticate("1234").unwrap();
    assert_eq!(account.balance().unwrap(), dec!(5000.00));
}

/// Test: deposit(-5) and deposit(0) are both invalid
#[test]
fn test_invalid_deposit_scenario() {
    let mut account = opened();

    for amount in [dec!(-5), dec!(0)] {
        let result = account.deposit(Some(amount));
        assert_eq!(Reply::from_txn(&result).reason, Some(Reason::Invalid));
    }
    assert_eq!(account.balance().unwrap(), dec!(5000.00));
}

/// Test: raw text goes through parse then validate as two steps
#[test]
fn test_parse_then_validate() {
    let mut account = opened();

    // cancelled
    let parsed = parse_amount("").unwrap();
    assert_eq!(account.deposit(parsed), Ok(TxnOutcome::Cancelled));

    // non-numeric never reaches the account
    let err = parse_amount("twenty").unwrap_err();
    assert!(err.is_invalid_amount());

    // parses, then fails validation
    let parsed = parse_amount("-20").unwrap();
    assert!(account.withdraw(parsed).unwrap_err().is_invalid_amount());

    // parses and succeeds
    let parsed = parse_amount("250.75").unwrap();
    account.withdraw(parsed).unwrap();
    assert_eq!(account.balance().unwrap(), dec!(4749.25));
}

/// Test: balance never drops below zero over a long mixed sequence
#[test]
fn test_balance_never_negative() {
    let mut account = opened();
    let amounts = [
        dec!(100),
        dec!(-3),
        dec!(0),
        dec!(7000),
        dec!(0.01),
        dec!(4999.99),
        dec!(250.50),
        dec!(1),
    ];

    for (i, amount) in amounts.iter().cycle().take(64).enumerate() {
        let before = account.balance().unwrap();
        let result = if i % 3 == 0 {
            account.deposit(Some(*amount))
        } else {
            account.withdraw(Some(*amount))
        };
        let after = account.balance().unwrap();

        assert!(after >= Decimal::ZERO);
        match result {
            Ok(TxnOutcome::Completed { balance, .. }) => assert_eq!(balance, after),
            Ok(TxnOutcome::Cancelled) => unreachable!(),
            Err(_) => assert_eq!(before, after),
        }
    }
}

/// Test: nothing works before the session is opened
#[test]
fn test_unauthenticated_replies() {
    let mut account = Account::default();

    assert_eq!(
        Reply::from_balance(&account.balance()).reason,
        Some(Reason::Unauthenticated)
    );
    assert_eq!(
        Reply::from_txn(&account.deposit(Some(dec!(10)))).reason,
        Some(Reason::Unauthenticated)
    );
    assert_eq!(
        Reply::from_txn(&account.withdraw(None)).reason,
        Some(Reason::Unauthenticated)
    );
}

/// Test: every reported completion moves the balance by exactly the amount
#[test]
fn test_balance_moves_exactly() {
    let mut account = opened();

    // 1. Amounts that fit next to the balance go through unchanged
    for raw in ["0.01", "1e-10", "12345.6789"] {
        let amount = parse_amount(raw).unwrap();
        let before = account.balance().unwrap();
        let reply = Reply::from_txn(&account.deposit(amount));
        assert!(reply.ok);
        assert_eq!(account.balance().unwrap() - before, amount.unwrap());
    }

    // 2. An amount too small for the balance to carry is refused, not rounded away
    let before = account.balance().unwrap();
    for result in [
        account.withdraw(Some(dec!(0.0000000000000000000000000001))),
        account.deposit(Some(dec!(0.0000000000000000000000000001))),
    ] {
        assert_eq!(Reply::from_txn(&result).reason, Some(Reason::Invalid));
    }
    assert_eq!(account.balance().unwrap(), before);
}
