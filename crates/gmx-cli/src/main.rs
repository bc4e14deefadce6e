mod extract;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gmx-cli")]
#[command(about = "Extract business listings from the place-search API into Postgres")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search, enrich and store listings for a keyword/location pair
    Extract {
        /// Business keyword (e.g. "Hospital"); prompted for when omitted
        #[arg(long)]
        keyword: Option<String>,

        /// Location to search in (e.g. "Chennai"); prompted for when omitted
        #[arg(long)]
        location: Option<String>,

        /// Run the pipeline against an in-memory store; DATABASE_URL is not needed
        #[arg(long)]
        dry_run: bool,
    },
    /// Database utilities
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check that the database is reachable
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = gmx_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Extract {
            keyword,
            location,
            dry_run,
        }) => extract::run_extract(&config, keyword, location, dry_run).await,
        None => extract::run_extract(&config, None, None, false).await,
        Some(Commands::Db {
            command: DbCommands::Ping,
        }) => run_db_ping(&config).await,
    }
}

/// Returns the configured database URL, or an error naming the command that
/// needed it.
pub(crate) fn require_database_url<'a>(
    config: &'a gmx_core::AppConfig,
    command: &str,
) -> anyhow::Result<&'a str> {
    config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is not set; cannot run {command}"))
}

async fn run_db_ping(config: &gmx_core::AppConfig) -> anyhow::Result<()> {
    let database_url = require_database_url(config, "db ping")?;
    let pool =
        gmx_db::connect_pool(database_url, gmx_db::PoolConfig::from_app_config(config)).await?;
    gmx_db::ping(&pool).await?;
    println!("database connection ok");
    Ok(())
}

#[cfg(test)]
mod tests;
