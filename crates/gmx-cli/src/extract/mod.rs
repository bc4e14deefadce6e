//! The `extract` command: search a keyword/location pair, enrich each listing
//! and append new businesses to the store.

mod input;
mod pipeline;
mod progress;

use gmx_db::{MemoryBusinessStore, PgBusinessStore, PoolConfig};
use gmx_places::PlacesClient;

use pipeline::{run_ingestion, RunSummary};

/// Runs one extraction.
///
/// Missing `keyword`/`location` values are prompted for. With `dry_run` the
/// pipeline writes to an in-memory store instead of Postgres, so dedup only
/// sees listings from this run and `DATABASE_URL` may be unset.
///
/// # Errors
///
/// Returns an error if `DATABASE_URL` is missing for a real run, input cannot
/// be read, the client or pool cannot be built, or any search, details or
/// store operation fails.
pub(crate) async fn run_extract(
    config: &gmx_core::AppConfig,
    keyword: Option<String>,
    location: Option<String>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let database_url = if dry_run {
        None
    } else {
        Some(crate::require_database_url(config, "extract")?)
    };

    let keyword = input::value_or_prompt(keyword, input::KEYWORD_PROMPT)?;
    let location = input::value_or_prompt(location, input::LOCATION_PROMPT)?;
    let query = gmx_core::build_query(&keyword, &location);

    let client = PlacesClient::new(
        &config.google_api_key,
        config.places_request_timeout_secs,
        &config.places_user_agent,
    )?;

    tracing::info!(%query, dry_run, "starting extraction");

    let summary = if let Some(database_url) = database_url {
        let pool = gmx_db::connect_pool(database_url, PoolConfig::from_app_config(config)).await?;
        let mut store = PgBusinessStore::acquire(&pool).await?;
        run_ingestion(
            &client,
            &mut store,
            &query,
            config.details_concurrency,
            progress::print_event,
        )
        .await?
    } else {
        let mut store = MemoryBusinessStore::new();
        run_ingestion(
            &client,
            &mut store,
            &query,
            config.details_concurrency,
            progress::print_event,
        )
        .await?
    };

    print_summary(&summary, dry_run);
    Ok(())
}

fn print_summary(summary: &RunSummary, dry_run: bool) {
    tracing::info!(
        pages = summary.pages,
        listings = summary.listings,
        inserted = summary.inserted,
        skipped = summary.skipped,
        "extraction finished"
    );
    if dry_run {
        println!(
            "dry-run: would insert {} businesses ({} skipped across {} pages)",
            summary.inserted, summary.skipped, summary.pages
        );
    } else {
        println!(
            "All data inserted successfully! ({} inserted, {} skipped across {} pages)",
            summary.inserted, summary.skipped, summary.pages
        );
    }
}
