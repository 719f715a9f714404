use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::{cents_from_units, cents_to_units, Account, AccountStore, Cents};

use super::{JsonFile, Layout, LoadOutcome};

/// On-disk shape of the ledger file: `{"balance": <number>}`.
#[derive(Debug, Serialize, Deserialize)]
struct BalanceDocument {
    balance: f64,
}

/// Repository for the single persisted ledger balance.
#[derive(Debug, Clone)]
pub struct BalanceRepository {
    file: JsonFile,
}

impl BalanceRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path, Layout::Compact),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the stored balance. The document must be an object with a numeric `balance`.
    pub async fn load(&self) -> LoadOutcome<Cents> {
        self.file
            .load::<BalanceDocument>()
            .await
            .and_then(|doc| {
                cents_from_units(doc.balance)
                    .ok_or_else(|| format!("balance {} is out of range", doc.balance))
            })
    }

    /// Overwrite the stored balance.
    pub async fn save(&self, balance: Cents) -> Result<()> {
        let doc = BalanceDocument {
            balance: cents_to_units(balance),
        };
        self.file.save(&doc).await
    }
}

/// Repository for the persisted student account collection.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    file: JsonFile,
}

impl AccountRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path, Layout::Pretty),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the stored accounts. Duplicate ids and records with empty or
    /// untrimmed fields make the file malformed.
    pub async fn load(&self) -> LoadOutcome<AccountStore> {
        self.file.load::<AccountStore>().await.and_then(|store| {
            for account in store.iter() {
                let valid = Account::new(&account.id, &account.name, &account.student_no);
                if valid.as_ref() != Ok(account) {
                    return Err(format!("invalid account record {:?}", account.id));
                }
            }
            if store.has_unique_ids() {
                Ok(store)
            } else {
                Err("duplicate account ids".to_string())
            }
        })
    }

    /// Overwrite the stored accounts with the full collection.
    pub async fn save(&self, store: &AccountStore) -> Result<()> {
        self.file.save(store).await
    }
}
