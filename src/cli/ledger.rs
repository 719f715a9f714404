use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::application::{AppError, LedgerService};
use crate::domain::format_cents;

use super::{Console, DIVIDER, FAREWELL};

/// Ledger - single-account balance keeper
#[derive(Parser)]
#[command(name = "ledger")]
#[command(about = "Interactive balance ledger with credit, debit and view")]
#[command(version)]
pub struct LedgerCli {
    /// Balance file path
    #[arg(short, long, default_value = "balance.json")]
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl LedgerCli {
    pub async fn run(self) -> Result<()> {
        log::info!("Using balance file {}", self.file.display());
        let service = LedgerService::open(self.file);
        let mut console = Console::stdio();
        run_menu(&service, &mut console).await
    }
}

const MENU: [&str; 6] = [
    "Account Management System",
    "1. View Balance",
    "2. Credit Account",
    "3. Debit Account",
    "4. Exit",
    DIVIDER,
];

/// Run the ledger menu until the exit choice or end of input.
pub async fn run_menu<R, W>(service: &LedgerService, console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        console.say(DIVIDER).await?;
        for line in MENU {
            console.say(line).await?;
        }

        let Some(choice) = console.ask("Enter your choice (1-4): ").await? else {
            break;
        };

        match choice.as_str() {
            "1" => view_balance(service, console).await?,
            "2" => credit_account(service, console).await?,
            "3" => debit_account(service, console).await?,
            "4" => break,
            _ => console.say("Please select an option from 1 to 4.").await?,
        }
    }

    console.say(FAREWELL).await?;
    Ok(())
}

async fn view_balance<R, W>(service: &LedgerService, console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let balance = service.balance().await;
    console
        .say(&format!("Current balance: {}", format_cents(balance)))
        .await?;
    Ok(())
}

async fn credit_account<R, W>(service: &LedgerService, console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let input = console.ask_field("Enter credit amount: ").await?;
    match service.credit_input(&input).await {
        Ok(balance) => {
            console
                .say(&format!(
                    "Amount credited. New balance: {}",
                    format_cents(balance)
                ))
                .await?
        }
        Err(e) => console.say(&error_message(&e)).await?,
    }
    Ok(())
}

async fn debit_account<R, W>(service: &LedgerService, console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let input = console.ask_field("Enter debit amount: ").await?;
    match service.debit_input(&input).await {
        Ok(balance) => {
            console
                .say(&format!(
                    "Amount debited. New balance: {}",
                    format_cents(balance)
                ))
                .await?
        }
        Err(e) => console.say(&error_message(&e)).await?,
    }
    Ok(())
}

fn error_message(err: &AppError) -> String {
    match err {
        AppError::InvalidAmount(reason) => {
            log::debug!("Rejected amount: {}", reason);
            "Please enter a valid amount.".to_string()
        }
        AppError::InsufficientFunds { .. } => "Insufficient funds for this debit.".to_string(),
        other => {
            log::error!("{}", other);
            format!("Error: {}", other)
        }
    }
}
