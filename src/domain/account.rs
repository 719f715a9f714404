use serde::{Deserialize, Serialize};

/// A student account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub student_no: String,
}

impl Account {
    /// Build an account, trimming each field and rejecting empty ones.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        student_no: impl Into<String>,
    ) -> Result<Self, AccountError> {
        Ok(Self {
            id: required("id", id.into())?,
            name: required("name", name.into())?,
            student_no: required("studentNo", student_no.into())?,
        })
    }
}

fn required(field: &'static str, value: String) -> Result<String, AccountError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AccountError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    MissingField(&'static str),
    DuplicateId(String),
    NotFound(String),
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountError::MissingField(field) => write!(f, "Field '{}' is required", field),
            AccountError::DuplicateId(id) => write!(f, "An account with ID {} already exists", id),
            AccountError::NotFound(id) => write!(f, "Account not found: {}", id),
        }
    }
}

impl std::error::Error for AccountError {}

/// Ordered collection of accounts, unique by `id`.
/// Serialized as a bare JSON array in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    fn position(&self, id: &str) -> Result<usize, AccountError> {
        self.accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| AccountError::NotFound(id.to_string()))
    }

    /// Append a new account. Fails if the id is taken.
    pub fn insert(&mut self, account: Account) -> Result<(), AccountError> {
        if self.get(&account.id).is_some() {
            return Err(AccountError::DuplicateId(account.id));
        }
        self.accounts.push(account);
        Ok(())
    }

    /// Replace the record with the given id wholesale, keeping its position.
    pub fn replace(
        &mut self,
        id: &str,
        name: &str,
        student_no: &str,
    ) -> Result<&Account, AccountError> {
        let index = self.position(id)?;
        let account = Account::new(id, name, student_no)?;
        self.accounts[index] = account;
        Ok(&self.accounts[index])
    }

    /// Remove and return the record with the given id.
    pub fn remove(&mut self, id: &str) -> Result<Account, AccountError> {
        let index = self.position(id)?;
        Ok(self.accounts.remove(index))
    }

    /// Whether the collection upholds the unique-id invariant.
    /// Only a hand-edited storage file can break it.
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.accounts.iter().all(|a| seen.insert(a.id.as_str()))
    }
}
