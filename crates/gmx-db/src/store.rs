//! The sink the ingestion pipeline writes to.
//!
//! [`PgBusinessStore`] holds one pooled connection for the whole run.
//! [`MemoryBusinessStore`] keeps rows in a `Vec` and backs dry runs.

use gmx_core::EnrichedRecord;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

use crate::businesses::{count_businesses_matching, insert_business};
use crate::DbError;

/// Count-and-append access to persisted businesses.
#[allow(async_fn_in_trait)]
pub trait BusinessStore {
    /// Number of stored rows with exactly this `(name, address)` pair.
    async fn count_matching(&mut self, name: &str, address: &str) -> Result<i64, DbError>;

    async fn insert(&mut self, record: &EnrichedRecord) -> Result<(), DbError>;
}

/// Postgres-backed store using a single connection acquired up front.
pub struct PgBusinessStore {
    conn: PoolConnection<Postgres>,
}

impl PgBusinessStore {
    /// Acquires the connection this store will use for its lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlx`] if no connection can be acquired.
    pub async fn acquire(pool: &PgPool) -> Result<Self, DbError> {
        let conn = pool.acquire().await?;
        Ok(Self { conn })
    }
}

impl BusinessStore for PgBusinessStore {
    async fn count_matching(&mut self, name: &str, address: &str) -> Result<i64, DbError> {
        count_businesses_matching(&mut *self.conn, name, address).await
    }

    async fn insert(&mut self, record: &EnrichedRecord) -> Result<(), DbError> {
        insert_business(&mut *self.conn, record).await
    }
}

/// In-memory store. Starts empty unless seeded with [`MemoryBusinessStore::with_rows`].
#[derive(Debug, Default)]
pub struct MemoryBusinessStore {
    rows: Vec<EnrichedRecord>,
}

impl MemoryBusinessStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rows(rows: Vec<EnrichedRecord>) -> Self {
        Self { rows }
    }

    /// Rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[EnrichedRecord] {
        &self.rows
    }
}

impl BusinessStore for MemoryBusinessStore {
    async fn count_matching(&mut self, name: &str, address: &str) -> Result<i64, DbError> {
        let count = self
            .rows
            .iter()
            .filter(|row| row.name == name && row.address == address)
            .count();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn insert(&mut self, record: &EnrichedRecord) -> Result<(), DbError> {
        self.rows.push(record.clone());
        Ok(())
    }
}
