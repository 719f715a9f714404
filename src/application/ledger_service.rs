use std::path::PathBuf;

use crate::domain::{apply_credit, apply_debit, Amount, Cents, OPENING_BALANCE};
use crate::storage::{BalanceRepository, LoadOutcome};

use super::AppError;

/// Application service for the single-account ledger.
///
/// The balance is not cached: every operation re-reads the storage file,
/// so the file stays the single source of truth.
pub struct LedgerService {
    repo: BalanceRepository,
}

impl LedgerService {
    /// Create a new ledger service with the given repository.
    pub fn new(repo: BalanceRepository) -> Self {
        Self { repo }
    }

    /// Open the ledger stored at the given path. The file need not exist.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(BalanceRepository::new(path))
    }

    pub fn repository(&self) -> &BalanceRepository {
        &self.repo
    }

    /// Read the stored balance, reporting which path produced it.
    pub async fn load_balance(&self) -> LoadOutcome<Cents> {
        self.repo.load().await
    }

    /// Current balance, falling back to the opening balance.
    pub async fn balance(&self) -> Cents {
        self.load_balance().await.or_default_with(|| OPENING_BALANCE)
    }

    /// Add a positive amount to the balance and persist it.
    pub async fn credit(&self, amount: Amount) -> Result<Cents, AppError> {
        let balance = apply_credit(self.balance().await, amount)?;
        self.repo.save(balance).await?;
        log::debug!("Credited {:?}, balance now {}", amount, balance);
        Ok(balance)
    }

    /// Subtract a positive amount no larger than the balance and persist it.
    pub async fn debit(&self, amount: Amount) -> Result<Cents, AppError> {
        let balance = apply_debit(self.balance().await, amount)?;
        self.repo.save(balance).await?;
        log::debug!("Debited {:?}, balance now {}", amount, balance);
        Ok(balance)
    }

    /// Parse a user-entered amount and credit it.
    pub async fn credit_input(&self, input: &str) -> Result<Cents, AppError> {
        self.credit(Amount::parse(input)?).await
    }

    /// Parse a user-entered amount and debit it.
    pub async fn debit_input(&self, input: &str) -> Result<Cents, AppError> {
        self.debit(Amount::parse(input)?).await
    }
}
