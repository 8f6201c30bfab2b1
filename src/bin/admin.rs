//! CLI administration tool for bank-api.
//!
//! Provides commands for managing accounts and the database schema without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create the account table if absent and verify its layout
//! cargo run --bin admin -- db init
//!
//! # List, show, create and delete accounts
//! cargo run --bin admin -- account list
//! cargo run --bin admin -- account show 3
//! cargo run --bin admin -- account create --first-name Ada --last-name Lovelace
//! cargo run --bin admin -- account delete 3
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use bank_api::application::services::AccountService;
use bank_api::domain::entities::Account;
use bank_api::domain::repositories::AccountRepository;
use bank_api::infrastructure::persistence::PgAccountRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing bank-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum AccountAction {
    /// List all accounts
    List,

    /// Show a single account
    Show {
        /// Account ID
        id: i32,
    },

    /// Open a new account
    Create {
        /// Holder's first name (prompted if omitted)
        #[arg(short, long)]
        first_name: Option<String>,

        /// Holder's last name (prompted if omitted)
        #[arg(short, long)]
        last_name: Option<String>,
    },

    /// Delete an account
    Delete {
        /// Account ID
        id: i32,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the account table if absent and verify its columns
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Account { action } => handle_account_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account management commands.
async fn handle_account_action(action: AccountAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgAccountRepository::new(Arc::new(pool.clone())));
    let service = AccountService::new(repo);

    match action {
        AccountAction::List => list_accounts(&service).await?,
        AccountAction::Show { id } => show_account(&service, id).await?,
        AccountAction::Create {
            first_name,
            last_name,
        } => create_account(&service, first_name, last_name).await?,
        AccountAction::Delete { id, yes } => delete_account(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists all accounts.
///
/// # Output Format
///
/// ```text
/// Accounts
///
///   ID    Number    Name                           Balance   Created
///   ─────────────────────────────────────────────────────────────────────────
///   1     1         Ada Lovelace                   0         2024-01-15 10:30
/// ```
async fn list_accounts(service: &AccountService) -> Result<()> {
    println!("{}", "Accounts".bright_blue().bold());
    println!();

    let accounts = service
        .list_accounts()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if accounts.is_empty() {
        println!("{}", "  No accounts found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<9} {:<30} {:<9} {}",
        "ID".bright_white().bold(),
        "Number".bright_white().bold(),
        "Name".bright_white().bold(),
        "Balance".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for account in &accounts {
        println!(
            "  {:<5} {:<9} {:<30} {:<9} {}",
            account.id.to_string().bright_black(),
            account.number,
            full_name(account).cyan(),
            account.balance,
            account
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        accounts.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Shows one account.
async fn show_account(service: &AccountService, id: i32) -> Result<()> {
    let account = service
        .get_account(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_account(&account);
    Ok(())
}

/// Opens an account, prompting for missing names.
async fn create_account(
    service: &AccountService,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<()> {
    println!("{}", "Open Account".bright_blue().bold());
    println!();

    let first_name = match first_name {
        Some(n) => n,
        None => Input::new().with_prompt("First name").interact_text()?,
    };
    let last_name = match last_name {
        Some(n) => n,
        None => Input::new().with_prompt("Last name").interact_text()?,
    };

    let account = service
        .open_account(first_name, last_name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!("{}", "Account created".green().bold());
    print_account(&account);

    Ok(())
}

/// Deletes an account after confirmation.
async fn delete_account(service: &AccountService, id: i32, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete account {id}?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .close_account(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete account: {}", e))?;

    println!("{} {}", "Deleted account".green().bold(), id);
    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  {}", version.bright_black());
        }
        DbAction::Init => {
            let repo = PgAccountRepository::new(Arc::new(pool.clone()));

            repo.init()
                .await
                .context("Failed to create account table")?;
            repo.verify_schema()
                .await
                .context("Account table layout check failed")?;

            println!("{}", "Account table ready".green().bold());
        }
    }

    Ok(())
}

fn full_name(account: &Account) -> String {
    format!("{} {}", account.first_name, account.last_name)
}

fn print_account(account: &Account) {
    println!();
    println!("  ID:      {}", account.id.to_string().bright_white());
    println!("  Number:  {}", account.number);
    println!("  Name:    {}", full_name(account).cyan());
    println!("  Balance: {}", account.balance);
    println!(
        "  Created: {}",
        account.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
}
