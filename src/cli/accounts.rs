use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::application::{AccountService, AppError};

use super::{Console, DIVIDER, FAREWELL};

/// Accounts - student record manager
#[derive(Parser)]
#[command(name = "accounts")]
#[command(about = "Interactive student account register, lookup, update and delete")]
#[command(version)]
pub struct AccountsCli {
    /// Accounts file path
    #[arg(short, long, default_value = "accounts.json")]
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl AccountsCli {
    pub async fn run(self) -> Result<()> {
        log::info!("Using accounts file {}", self.file.display());
        let mut service = AccountService::open(self.file).await;
        let mut console = Console::stdio();
        run_menu(&mut service, &mut console).await
    }
}

const MENU: [&str; 7] = [
    "Student Account Management",
    "1. Register Account",
    "2. Lookup Account",
    "3. Update Account",
    "4. Delete Account",
    "5. Exit",
    DIVIDER,
];

/// Run the accounts menu until the exit choice or end of input.
pub async fn run_menu<R, W>(service: &mut AccountService, console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        console.say(DIVIDER).await?;
        for line in MENU {
            console.say(line).await?;
        }

        let Some(choice) = console.ask("Enter your choice (1-5): ").await? else {
            break;
        };

        match choice.as_str() {
            "1" => register(service, console).await?,
            "2" => lookup(service, console).await?,
            "3" => update(service, console).await?,
            "4" => delete(service, console).await?,
            "5" => break,
            _ => console.say("Please select an option from 1 to 5.").await?,
        }
    }

    console.say(FAREWELL).await?;
    Ok(())
}

async fn register<R, W>(service: &mut AccountService, console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let id = console.ask_field("Enter ID: ").await?;
    let name = console.ask_field("Enter name: ").await?;
    let student_no = console.ask_field("Enter student number: ").await?;

    match service.register(&id, &name, &student_no).await {
        Ok(account) => {
            console
                .say(&format!("Account registered: {}", account.id))
                .await?
        }
        Err(e) => console.say(&error_message(&e)).await?,
    }
    Ok(())
}

async fn lookup<R, W>(service: &AccountService, console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let id = console.ask_field("Enter ID: ").await?;
    match service.lookup(&id) {
        Ok(account) => {
            console.say(&format!("ID: {}", account.id)).await?;
            console.say(&format!("Name: {}", account.name)).await?;
            console
                .say(&format!("Student No: {}", account.student_no))
                .await?;
        }
        Err(e) => console.say(&error_message(&e)).await?,
    }
    Ok(())
}

async fn update<R, W>(service: &mut AccountService, console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let id = console.ask_field("Enter ID: ").await?;
    // Report an unknown id before asking for the new values
    if let Err(e) = service.lookup(&id) {
        console.say(&error_message(&e)).await?;
        return Ok(());
    }

    let name = console.ask_field("Enter new name: ").await?;
    let student_no = console.ask_field("Enter new student number: ").await?;

    match service.update(&id, &name, &student_no).await {
        Ok(account) => console.say(&format!("Account updated: {}", account.id)).await?,
        Err(e) => console.say(&error_message(&e)).await?,
    }
    Ok(())
}

async fn delete<R, W>(service: &mut AccountService, console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let id = console.ask_field("Enter ID: ").await?;
    let id = match service.lookup(&id) {
        Ok(account) => account.id.clone(),
        Err(e) => {
            console.say(&error_message(&e)).await?;
            return Ok(());
        }
    };

    let answer = console
        .ask_field(&format!(
            "Are you sure you want to delete account {}? (yes/no): ",
            id
        ))
        .await?;
    if !answer.eq_ignore_ascii_case("yes") {
        console.say("Deletion cancelled.").await?;
        return Ok(());
    }

    match service.delete(&id).await {
        Ok(account) => console.say(&format!("Account deleted: {}", account.id)).await?,
        Err(e) => console.say(&error_message(&e)).await?,
    }
    Ok(())
}

fn error_message(err: &AppError) -> String {
    match err {
        AppError::MissingField(_) => "All fields are required.".to_string(),
        AppError::AccountAlreadyExists(id) => {
            format!("An account with ID {} already exists.", id)
        }
        AppError::AccountNotFound(id) => format!("Account not found: {}", id),
        other => {
            log::error!("{}", other);
            format!("Error: {}", other)
        }
    }
}
