//! Check-then-insert gate keyed on `(name, address)`.
//!
//! The count and the insert are two separate statements with no transaction
//! around them. Within one single-writer run that cannot race; two runs
//! writing to the same table at once can still both insert the same key.

use gmx_core::EnrichedRecord;

use crate::store::BusinessStore;
use crate::DbError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `name` or `address` is empty.
    MissingDedupKey,
    /// A row with the same `(name, address)` already exists.
    Duplicate,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingDedupKey => write!(f, "missing name or address"),
            SkipReason::Duplicate => write!(f, "duplicate"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Skipped(SkipReason),
}

/// Inserts `record` unless its dedup key is incomplete or already stored.
///
/// Records with an empty `name` or `address` are rejected before the store is
/// queried.
///
/// # Errors
///
/// Returns [`DbError`] if the count or the insert fails.
pub async fn insert_if_new<S>(store: &mut S, record: &EnrichedRecord) -> Result<InsertOutcome, DbError>
where
    S: BusinessStore,
{
    if !record.has_dedup_key() {
        return Ok(InsertOutcome::Skipped(SkipReason::MissingDedupKey));
    }

    if store.count_matching(&record.name, &record.address).await? > 0 {
        tracing::debug!(name = %record.name, address = %record.address, "duplicate business");
        return Ok(InsertOutcome::Skipped(SkipReason::Duplicate));
    }

    store.insert(record).await?;
    Ok(InsertOutcome::Inserted)
}
