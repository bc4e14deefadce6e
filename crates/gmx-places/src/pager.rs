//! Continuation-token paging over the text-search endpoint.
//!
//! The first request carries only the query. Each response may include a
//! `next_page_token`; the next request repeats the query with that token
//! appended, after waiting [`crate::PAGE_TOKEN_DELAY`]. A response without a
//! token ends the sequence.

use gmx_core::ListingCandidate;

use crate::client::PlacesClient;
use crate::error::PlacesError;

/// Upper bound on pages per query. The upstream stops issuing tokens well
/// before this; hitting it means the token is cycling.
pub const MAX_PAGES: usize = 50;

/// One page of listings, in the order the endpoint returned them.
#[derive(Debug, Clone)]
pub struct SearchPage {
    /// 1-based page number within the run.
    pub number: usize,
    pub listings: Vec<ListingCandidate>,
}

/// Lazily walks every page of results for a single query.
///
/// Nothing is fetched until [`SearchPager::next_page`] is called, and the
/// next page is only requested when the caller asks for it, so a page's
/// listings can be fully processed before the following request goes out.
pub struct SearchPager<'c> {
    client: &'c PlacesClient,
    query: String,
    next_token: Option<String>,
    pages_fetched: usize,
    exhausted: bool,
}

impl<'c> SearchPager<'c> {
    #[must_use]
    pub fn new(client: &'c PlacesClient, query: impl Into<String>) -> Self {
        Self {
            client,
            query: query.into(),
            next_token: None,
            pages_fetched: 0,
            exhausted: false,
        }
    }

    #[must_use]
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Fetches the next page, or returns `Ok(None)` once the previous response
    /// carried no continuation token.
    ///
    /// # Errors
    ///
    /// Propagates transport and parse errors from the search request; the
    /// pager is left exhausted afterwards. Returns [`PlacesError::PaginationLimit`] if
    /// the endpoint keeps issuing tokens past [`MAX_PAGES`].
    pub async fn next_page(&mut self) -> Result<Option<SearchPage>, PlacesError> {
        if self.exhausted {
            return Ok(None);
        }

        if self.pages_fetched >= MAX_PAGES {
            self.exhausted = true;
            return Err(PlacesError::PaginationLimit {
                max_pages: MAX_PAGES,
            });
        }

        let token = self.next_token.take();
        if token.is_some() {
            let delay = self.client.page_token_delay();
            tracing::debug!(
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "waiting for continuation token to activate"
            );
            tokio::time::sleep(delay).await;
        }

        let response = match self.client.search_page(&self.query, token.as_deref()).await {
            Ok(response) => response,
            Err(err) => {
                self.exhausted = true;
                return Err(err);
            }
        };

        self.pages_fetched += 1;
        self.next_token = response.next_page_token.filter(|t| !t.is_empty());
        if self.next_token.is_none() {
            self.exhausted = true;
        }

        let listings: Vec<ListingCandidate> =
            response.results.into_iter().map(ListingCandidate::from).collect();
        tracing::info!(
            page = self.pages_fetched,
            listings = listings.len(),
            has_more = !self.exhausted,
            "fetched search page"
        );

        Ok(Some(SearchPage {
            number: self.pages_fetched,
            listings,
        }))
    }
}
