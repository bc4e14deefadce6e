//! Search → enrich → pincode → dedup → insert, one page at a time.
//!
//! Pages are pulled lazily from the [`SearchPager`]; the next page is not
//! requested until every listing of the current page has been through the
//! dedup gate. Details fetches for a page go through a `buffered` stream, so
//! with a width above 1 several requests may be in flight, but records still
//! reach the gate in listing order. Any error ends the run immediately.

use std::pin::pin;

use futures::stream::{self, StreamExt};
use gmx_core::EnrichedRecord;
use gmx_db::{insert_if_new, BusinessStore, DbError, InsertOutcome, SkipReason};
use gmx_places::{PlacesClient, PlacesError, SearchPager};

/// Failures that abort an ingestion run.
#[derive(Debug, thiserror::Error)]
pub(crate) enum PipelineError {
    #[error("place search failed: {0}")]
    Places(#[from] PlacesError),

    #[error("business store failed: {0}")]
    Store(#[from] DbError),
}

/// Progress notifications, emitted in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProgressEvent {
    PageFetched {
        page: usize,
        listings: usize,
    },
    Inserted {
        name: String,
    },
    Skipped {
        name: String,
        address: String,
        reason: SkipReason,
    },
}

/// Counters for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub pages: usize,
    pub listings: usize,
    pub inserted: usize,
    pub skipped: usize,
}

/// Runs the full pipeline for `query` against `store`.
///
/// `details_concurrency` is clamped to at least 1.
///
/// # Errors
///
/// Returns the first [`PipelineError`] hit. Rows inserted before the failure
/// stay in the store.
pub(crate) async fn run_ingestion<S, P>(
    client: &PlacesClient,
    store: &mut S,
    query: &str,
    details_concurrency: usize,
    mut progress: P,
) -> Result<RunSummary, PipelineError>
where
    S: BusinessStore,
    P: FnMut(&ProgressEvent),
{
    let width = details_concurrency.max(1);
    let mut pager = SearchPager::new(client, query);
    let mut summary = RunSummary::default();

    while let Some(page) = pager.next_page().await? {
        summary.pages += 1;
        summary.listings += page.listings.len();
        progress(&ProgressEvent::PageFetched {
            page: page.number,
            listings: page.listings.len(),
        });

        let mut enriched = pin!(stream::iter(page.listings)
            .map(|candidate| async move {
                let contact = client
                    .fetch_contact_details(candidate.external_id.as_deref())
                    .await?;
                Ok::<_, PlacesError>(EnrichedRecord::assemble(candidate, contact))
            })
            .buffered(width));

        while let Some(record) = enriched.next().await {
            let record = record?;
            match insert_if_new(store, &record).await? {
                InsertOutcome::Inserted => {
                    summary.inserted += 1;
                    progress(&ProgressEvent::Inserted { name: record.name });
                }
                InsertOutcome::Skipped(reason) => {
                    summary.skipped += 1;
                    progress(&ProgressEvent::Skipped {
                        name: record.name,
                        address: record.address,
                        reason,
                    });
                }
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
