// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::path::Path;

use anyhow::Result;
use bursar::application::{AccountService, LedgerService};
use bursar::cli::{accounts, ledger, Console};
use tempfile::TempDir;

/// Helper to create a ledger service over a temporary balance file
pub fn test_ledger() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let service = LedgerService::open(temp_dir.path().join("balance.json"));
    Ok((service, temp_dir))
}

/// Helper to create an account service over a temporary accounts file
pub async fn test_accounts() -> Result<(AccountService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let service = AccountService::open(temp_dir.path().join("accounts.json")).await;
    Ok((service, temp_dir))
}

fn script(inputs: &[&str]) -> Vec<u8> {
    inputs
        .iter()
        .flat_map(|line| format!("{}\n", line).into_bytes())
        .collect()
}

/// Run one ledger session against `path`, feeding `inputs` as lines. Returns stdout.
pub async fn run_ledger_session(path: &Path, inputs: &[&str]) -> Result<String> {
    let service = LedgerService::open(path);
    let input = script(inputs);
    let mut console = Console::new(input.as_slice(), Vec::new());
    ledger::run_menu(&service, &mut console).await?;
    let (_, output) = console.into_inner();
    Ok(String::from_utf8(output)?)
}

/// Run one accounts session against `path`, feeding `inputs` as lines. Returns stdout.
pub async fn run_accounts_session(path: &Path, inputs: &[&str]) -> Result<String> {
    let mut service = AccountService::open(path).await;
    let input = script(inputs);
    let mut console = Console::new(input.as_slice(), Vec::new());
    accounts::run_menu(&mut service, &mut console).await?;
    let (_, output) = console.into_inner();
    Ok(String::from_utf8(output)?)
}
