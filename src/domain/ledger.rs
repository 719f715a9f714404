use super::{format_cents, Amount, Cents};

/// Balance used when no storage file exists yet (1000.00).
pub const OPENING_BALANCE: Cents = 100_000;

/// Reasons a credit or debit cannot be applied to a balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    NonPositiveAmount(Cents),
    InsufficientFunds { balance: Cents, requested: Cents },
    Overflow,
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {}", format_cents(*amount))
            }
            LedgerError::InsufficientFunds { balance, requested } => write!(
                f,
                "Debit of {} exceeds balance of {}",
                format_cents(*requested),
                format_cents(*balance)
            ),
            LedgerError::Overflow => write!(f, "Balance would overflow"),
        }
    }
}

impl std::error::Error for LedgerError {}

fn ensure_positive(amount: Amount) -> Result<Cents, LedgerError> {
    let cents = amount.to_cents().map_err(|_| LedgerError::Overflow)?;
    if !amount.is_positive() {
        return Err(LedgerError::NonPositiveAmount(cents));
    }
    Ok(cents)
}

/// Add a credit to the balance, returning the new balance.
/// The amount is rounded to the cent after checking it is positive.
pub fn apply_credit(balance: Cents, amount: Amount) -> Result<Cents, LedgerError> {
    let cents = ensure_positive(amount)?;
    balance.checked_add(cents).ok_or(LedgerError::Overflow)
}

/// Subtract a debit from the balance, returning the new balance.
/// A debit equal to the balance is allowed and leaves it at zero; the
/// comparison uses the exact amount, before rounding.
pub fn apply_debit(balance: Cents, amount: Amount) -> Result<Cents, LedgerError> {
    let cents = ensure_positive(amount)?;
    if amount.exceeds(balance) {
        return Err(LedgerError::InsufficientFunds {
            balance,
            requested: cents,
        });
    }
    Ok(balance - cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cents(value: Cents) -> Amount {
        Amount::from_cents(value)
    }

    #[test]
    fn test_credit_adds_amount() {
        assert_eq!(apply_credit(OPENING_BALANCE, cents(50_000)), Ok(150_000));
    }

    #[test]
    fn test_credit_rejects_non_positive() {
        assert_eq!(
            apply_credit(OPENING_BALANCE, cents(0)),
            Err(LedgerError::NonPositiveAmount(0))
        );
        assert_eq!(
            apply_credit(OPENING_BALANCE, cents(-10_000)),
            Err(LedgerError::NonPositiveAmount(-10_000))
        );
    }

    #[test]
    fn test_credit_overflow() {
        assert_eq!(apply_credit(i64::MAX, cents(1)), Err(LedgerError::Overflow));
    }

    #[test]
    fn test_debit_to_zero() {
        assert_eq!(apply_debit(OPENING_BALANCE, cents(OPENING_BALANCE)), Ok(0));
    }

    #[test]
    fn test_debit_insufficient_funds() {
        assert_eq!(
            apply_debit(OPENING_BALANCE, cents(200_000)),
            Err(LedgerError::InsufficientFunds {
                balance: OPENING_BALANCE,
                requested: 200_000,
            })
        );
    }

    #[test]
    fn test_sub_cent_amounts() {
        let amount = |s: &str| Amount::parse(s).unwrap();

        assert_eq!(apply_credit(OPENING_BALANCE, amount("1.999")), Ok(100_200));
        assert_eq!(apply_credit(OPENING_BALANCE, amount("0.001")), Ok(OPENING_BALANCE));
        assert_eq!(apply_debit(OPENING_BALANCE, amount("999.995")), Ok(0));
        assert!(matches!(
            apply_debit(OPENING_BALANCE, amount("1000.001")),
            Err(LedgerError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn test_debit_on_negative_balance() {
        // Negative balances can come from a hand-edited file; every debit fails
        assert!(matches!(
            apply_debit(-500, cents(1)),
            Err(LedgerError::InsufficientFunds { .. })
        ));
    }

    proptest! {
        #[test]
        fn credit_then_balance_is_sum(
            balance in -1_000_000_000i64..1_000_000_000,
            amount in 1i64..1_000_000_000,
        ) {
            prop_assert_eq!(apply_credit(balance, cents(amount)), Ok(balance + amount));
        }

        #[test]
        fn debit_within_balance_subtracts(balance in 1i64..1_000_000_000, pick in 0.0f64..1.0) {
            let amount = ((balance as f64 * pick) as i64).max(1);
            prop_assert_eq!(apply_debit(balance, cents(amount)), Ok(balance - amount));
        }

        #[test]
        fn debit_beyond_balance_is_rejected(
            balance in 0i64..1_000_000_000,
            extra in 1i64..1_000_000,
        ) {
            let rejected = matches!(
                apply_debit(balance, cents(balance + extra)),
                Err(LedgerError::InsufficientFunds { .. })
            );
            prop_assert!(rejected);
        }

        #[test]
        fn non_positive_amounts_are_rejected(
            balance in any::<i64>(),
            amount in -1_000_000_000i64..=0,
        ) {
            let expected = Err(LedgerError::NonPositiveAmount(amount));
            prop_assert_eq!(apply_credit(balance, cents(amount)), expected.clone());
            prop_assert_eq!(apply_debit(balance, cents(amount)), expected);
        }

        #[test]
        fn formatted_amounts_parse_back(cents in -1_000_000_000_000i64..1_000_000_000_000) {
            prop_assert_eq!(crate::domain::parse_cents(&format_cents(cents)), Ok(cents));
        }
    }
}
