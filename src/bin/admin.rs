//! CLI administration tool for shorturl.
//!
//! Talks to PostgreSQL directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the url table
//! cargo run --bin admin -- db init
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Shorten a URL
//! cargo run --bin admin -- url create https://example.com
//!
//! # Look up a short code
//! cargo run --bin admin -- url get aB3xY9z
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`).

use shorturl::application::services::UrlService;
use shorturl::config::{self, mask_connection_string};
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgUrlRepository;
use shorturl::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing shorturl.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Short URL operations
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create the url table if it does not exist
    Init,

    /// Check database connection and report row count
    Check,
}

/// Short URL subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Create a short URL
    Create {
        /// Destination URL
        url: String,
    },

    /// Show the destination of a short code
    Get {
        /// Short code
        code: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;
    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool)));

    match cli.command {
        Commands::Db { action } => match action {
            DbAction::Init => init_db(&repository).await?,
            DbAction::Check => check_db(&repository, &config.database_url).await?,
        },
        Commands::Url { action } => {
            let service = UrlService::new(repository);
            match action {
                UrlAction::Create { url } => create_url(&service, url).await?,
                UrlAction::Get { code } => get_url(&service, &code).await?,
            }
        }
    }

    Ok(())
}

async fn init_db(repository: &PgUrlRepository) -> Result<()> {
    repository
        .init()
        .await
        .context("Failed to create url table")?;

    println!("{}", "Table 'url' is ready".green().bold());
    Ok(())
}

/// Verifies connectivity and prints the number of stored short URLs.
async fn check_db(repository: &PgUrlRepository, database_url: &str) -> Result<()> {
    println!("{}", "Database check".bright_blue().bold());
    println!();
    println!("  Database: {}", mask_connection_string(database_url).cyan());

    let count = repository
        .count()
        .await
        .context("Failed to query url table (run `admin db init` first?)")?;

    println!("  Short URLs: {}", count.to_string().bright_white().bold());
    println!();
    println!("{}", "Connection OK".green().bold());
    Ok(())
}

async fn create_url(service: &UrlService, url: String) -> Result<()> {
    let created = service
        .create_short_url(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create short url: {}", e))?;

    println!("{}", "Short URL created".green().bold());
    println!("  Code:        {}", created.short_url.bright_yellow().bold());
    println!("  Destination: {}", created.redirect_url.cyan());
    Ok(())
}

async fn get_url(service: &UrlService, code: &str) -> Result<()> {
    match service.resolve(code).await {
        Ok(url) => {
            println!("  {} -> {}", url.short_url.bright_yellow(), url.redirect_url.cyan());
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("No short URL with code '{code}'").yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Lookup failed: {}", e)),
    }
}
