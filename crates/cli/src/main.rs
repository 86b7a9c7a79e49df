//! Larder CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! larder-cli migrate
//!
//! # Backfill nutrition data for products that still need it
//! larder-cli backfill --limit 50 --delay 1.5
//!
//! # Mint a bearer token for API access
//! larder-cli token --subject ops@example.com --ttl-hours 24
//!
//! # Seed database with sample data
//! larder-cli seed
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `backfill` - Enrich products missing nutrition data
//! - `token` - Mint a signed bearer token
//! - `seed` - Seed database with sample data

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "larder-cli")]
#[command(author, version, about = "Larder CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Backfill nutrition data for products that still need it
    Backfill {
        /// Maximum number of products to process (0 = no limit)
        #[arg(long, default_value_t = 0)]
        limit: u32,

        /// Seconds to sleep after each provider request
        #[arg(long, default_value_t = 1.0)]
        delay: f64,
    },
    /// Mint a signed bearer token for API access
    Token {
        /// Token subject (who the token identifies)
        #[arg(short, long)]
        subject: String,

        /// Token lifetime in hours
        #[arg(long, default_value_t = 24)]
        ttl_hours: i64,
    },
    /// Seed database with sample data
    Seed,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Backfill { limit, delay } => commands::backfill::run(limit, delay).await?,
        Commands::Token { subject, ttl_hours } => commands::token::mint(&subject, ttl_hours)?,
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}
