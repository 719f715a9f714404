use thiserror::Error;

use crate::domain::{AccountError, Cents, LedgerError, ParseCentsError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient funds: balance {balance}, required {required}")]
    InsufficientFunds { balance: Cents, required: Cents },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Account already exists: {0}")]
    AccountAlreadyExists(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds { balance, requested } => {
                AppError::InsufficientFunds {
                    balance,
                    required: requested,
                }
            }
            other => AppError::InvalidAmount(other.to_string()),
        }
    }
}

impl From<ParseCentsError> for AppError {
    fn from(err: ParseCentsError) -> Self {
        AppError::InvalidAmount(err.to_string())
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::MissingField(field) => AppError::MissingField(field),
            AccountError::DuplicateId(id) => AppError::AccountAlreadyExists(id),
            AccountError::NotFound(id) => AppError::AccountNotFound(id),
        }
    }
}
