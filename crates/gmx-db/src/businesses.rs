//! Database operations for the `businesses` table.
//!
//! The table is owned outside this crate; these functions only count and
//! append rows. `(name, address)` is the application-level dedup key, not a
//! constraint the store enforces.

use gmx_core::EnrichedRecord;
use sqlx::PgExecutor;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `businesses` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BusinessRow {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub address: String,
    pub pincode: String,
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Counts rows whose `name` and `address` both equal the given values exactly
/// (case-sensitive, no normalisation).
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_businesses_matching<'e, E>(
    executor: E,
    name: &str,
    address: &str,
) -> Result<i64, DbError>
where
    E: PgExecutor<'e>,
{
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM businesses WHERE name = $1 AND address = $2",
    )
    .bind(name)
    .bind(address)
    .fetch_one(executor)
    .await?;

    Ok(count)
}

/// Appends one business row. Performs no duplicate check of its own.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_business<'e, E>(executor: E, record: &EnrichedRecord) -> Result<(), DbError>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO businesses \
             (name, phone, email, website, address, pincode, latitude, longitude) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(&record.name)
    .bind(&record.phone)
    .bind(&record.email)
    .bind(&record.website)
    .bind(&record.address)
    .bind(&record.pincode)
    .bind(record.latitude)
    .bind(record.longitude)
    .execute(executor)
    .await?;

    Ok(())
}
