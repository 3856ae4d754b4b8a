//! CLI administration tool for hexlink.
//!
//! Inspects and manipulates the mapping store directly, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the database and apply migrations
//! cargo run --bin admin -- db init
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://www.rust-lang.org
//!
//! # Look up a code
//! cargo run --bin admin -- lookup 1f
//!
//! # List the most recent mappings
//! cargo run --bin admin -- list --limit 20
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Print the code an id maps to
//! cargo run --bin admin -- encode 48879
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_PATH`) and `SHORT_URL_PREFIX`.

use hexlink::application::services::MappingService;
use hexlink::config::{self, Config};
use hexlink::domain::repositories::UrlRepository;
use hexlink::infrastructure::persistence::{self, SqliteUrlRepository};
use hexlink::utils::code_generator::{encode, next_sequence_value, short_url};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing hexlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show statistics
    Stats,

    /// Shorten a URL
    Shorten {
        /// Long URL to shorten (prompted for if omitted)
        url: Option<String>,
    },

    /// Resolve a short code or short URL
    Lookup {
        /// Short code, e.g. `1f` or `cnjr.lnk/1f`
        code: String,
    },

    /// List mappings, newest first
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: i64,

        #[arg(short, long, default_value_t = 0)]
        offset: i64,
    },

    /// Print the short code for an id
    Encode {
        /// Mapping id
        id: u64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create the database file and apply migrations
    Init,

    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    // No database needed
    if let Commands::Encode { id } = cli.command {
        let code = encode(id);
        println!("  Code:      {}", code.bright_yellow().bold());
        println!(
            "  Short URL: {}",
            short_url(&config.short_url_prefix, &code).cyan()
        );
        return Ok(());
    }

    let pool = persistence::connect(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Shorten { url } => shorten(&config, &pool, url).await?,
        Commands::Lookup { code } => lookup(&config, &pool, &code).await?,
        Commands::List { limit, offset } => list_mappings(&config, &pool, limit, offset).await?,
        Commands::Encode { .. } => {}
    }

    pool.close().await;

    Ok(())
}

fn repository(pool: &SqlitePool) -> Arc<SqliteUrlRepository> {
    Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())))
}

/// Handles database commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Init => {
            println!("{}", "🗄  Applying migrations...".bright_blue());

            persistence::migrate(pool).await?;

            println!("{}", "✅ Database ready".green().bold());
        }
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  SQLite: {}", version.bright_white());
        }
    }

    Ok(())
}

/// Displays store statistics.
///
/// Shows the number of mappings, the highest id in use and the code the
/// next new URL will receive.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repo = repository(pool);

    let count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;
    let max_id = repo
        .max_id()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read max id: {}", e))?;

    let next = next_sequence_value(max_id);
    let next_code = u64::try_from(next)
        .map(encode)
        .context("Store holds a negative id")?;

    println!("  Mappings:  {}", count.to_string().bright_green().bold());
    println!(
        "  Last id:   {}",
        max_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string())
            .bright_green()
            .bold()
    );
    println!("  Next code: {}", next_code.bright_yellow().bold());
    println!();

    Ok(())
}

/// Shortens a URL, prompting for it when not given on the command line.
async fn shorten(config: &Config, pool: &SqlitePool, url: Option<String>) -> Result<()> {
    println!("{}", "✂  Shorten URL".bright_blue().bold());
    println!();

    let long_url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("Long URL").interact_text()?,
    };

    let service = MappingService::new(repository(pool), config.short_url_prefix.clone());

    let outcome = service
        .create_or_get(&long_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    if outcome.created {
        println!("{}", "✅ Created new mapping".green().bold());
    } else {
        println!("{}", "ℹ  URL was already shortened".yellow());
    }

    println!();
    println!("  Id:        {}", outcome.mapping.id.to_string().bright_black());
    println!("  Long URL:  {}", outcome.mapping.long_url.cyan());
    println!(
        "  Short URL: {}",
        service.short_url(&outcome.mapping).bright_yellow().bold()
    );
    println!();

    Ok(())
}

/// Resolves a code and prints the mapping.
async fn lookup(config: &Config, pool: &SqlitePool, code: &str) -> Result<()> {
    let service = MappingService::new(repository(pool), config.short_url_prefix.clone());

    let mapping = service
        .resolve(code)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    match mapping {
        Some(mapping) => {
            println!("  Id:        {}", mapping.id.to_string().bright_black());
            println!("  Long URL:  {}", mapping.long_url.cyan());
            println!(
                "  Short URL: {}",
                service.short_url(&mapping).bright_yellow().bold()
            );
        }
        None => {
            println!("{}", format!("❌ No mapping for '{}'", code).red());
        }
    }

    Ok(())
}

/// Lists mappings, newest first.
///
/// # Output Format
///
/// ```text
/// 📋 Mappings
///
///   ID     Code       Long URL
///   ──────────────────────────────────────────────────────────────
///   2      2          https://example.org
///   1      1          https://example.com
/// ```
async fn list_mappings(
    config: &Config,
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
) -> Result<()> {
    println!("{}", "📋 Mappings".bright_blue().bold());
    println!();

    let repo = repository(pool);

    let mappings = repo
        .list(limit.clamp(1, 1000), offset.max(0))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list mappings: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        println!();
        println!(
            "  Create one with: {} admin shorten <URL>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<6} {:<10} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Long URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<6} {:<10} {}",
            mapping.id.to_string().bright_black(),
            mapping.short_code.bright_yellow(),
            mapping.long_url.cyan()
        );
    }

    let total = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!();
    println!(
        "  Showing {} of {} (prefix {})",
        mappings.len().to_string().bright_white().bold(),
        total.to_string().bright_white().bold(),
        config.short_url_prefix.bright_black()
    );
    println!();

    Ok(())
}
