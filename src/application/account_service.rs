use std::path::PathBuf;

use crate::domain::{Account, AccountStore};
use crate::storage::{AccountRepository, LoadSource};

use super::AppError;

/// Application service for the student-record collection.
///
/// The collection is loaded once when the service is opened and kept in
/// memory. Every mutation is applied to a copy, saved, and only then
/// committed, so a failed save leaves the in-memory state unchanged.
pub struct AccountService {
    repo: AccountRepository,
    store: AccountStore,
    load_source: LoadSource,
}

impl AccountService {
    /// Load the collection stored at the given path, or start empty.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let repo = AccountRepository::new(path);
        let outcome = repo.load().await;
        let load_source = outcome.source();
        let store = outcome.or_default_with(AccountStore::new);
        log::debug!(
            "Opened {} with {} account(s) ({:?})",
            repo.path().display(),
            store.len(),
            load_source
        );
        Self {
            repo,
            store,
            load_source,
        }
    }

    /// How the collection was obtained when the service was opened.
    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    pub fn accounts(&self) -> &AccountStore {
        &self.store
    }

    /// Register a new account.
    pub async fn register(
        &mut self,
        id: &str,
        name: &str,
        student_no: &str,
    ) -> Result<Account, AppError> {
        let account = Account::new(id, name, student_no)?;
        let mut next = self.store.clone();
        next.insert(account.clone())?;
        self.commit(next).await?;
        Ok(account)
    }

    /// Find an account by id.
    pub fn lookup(&self, id: &str) -> Result<&Account, AppError> {
        self.store
            .get(id.trim())
            .ok_or_else(|| AppError::AccountNotFound(id.trim().to_string()))
    }

    /// Replace name and student number of an existing account.
    pub async fn update(
        &mut self,
        id: &str,
        name: &str,
        student_no: &str,
    ) -> Result<Account, AppError> {
        let mut next = self.store.clone();
        let account = next.replace(id.trim(), name, student_no)?.clone();
        self.commit(next).await?;
        Ok(account)
    }

    /// Remove an account. Confirmation is the caller's job.
    pub async fn delete(&mut self, id: &str) -> Result<Account, AppError> {
        let mut next = self.store.clone();
        let removed = next.remove(id.trim())?;
        self.commit(next).await?;
        Ok(removed)
    }

    async fn commit(&mut self, next: AccountStore) -> Result<(), AppError> {
        self.repo.save(&next).await?;
        self.store = next;
        Ok(())
    }
}
