//! HTTP client for the place text-search and place-details endpoints.
//!
//! Every request is a plain GET with percent-encoded query parameters and the
//! API key passed as `key`. Nothing is retried: transport and parse failures
//! come back as [`PlacesError`] for the caller to propagate. An error status
//! inside a well-formed JSON envelope is only logged; the body is used as-is.

use std::time::Duration;

use gmx_core::ContactDetails;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::types::{DetailsResponse, TextSearchResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";
const TEXT_SEARCH_PATH: &str = "textsearch/json";
const DETAILS_PATH: &str = "details/json";
const DETAILS_FIELDS: &str = "name,formatted_phone_number,website";

/// Wait imposed before any request carrying a continuation token. The upstream
/// rejects a token that is used before it has become valid.
pub const PAGE_TOKEN_DELAY: Duration = Duration::from_secs(3);

/// Envelope statuses worth a warning. `ZERO_RESULTS` and `NOT_FOUND` are not
/// in this list: they are valid, empty answers.
const ERROR_STATUSES: &[&str] = &[
    "INVALID_REQUEST",
    "OVER_QUERY_LIMIT",
    "REQUEST_DENIED",
    "UNKNOWN_ERROR",
];

/// Client for the place-search API.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    search_url: Url,
    details_url: Url,
    page_token_delay: Duration,
}

impl PlacesClient {
    /// Creates a client pointed at the production endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `join` appends to the path instead of
        // replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| invalid_base_url(base_url, e))?;
        let search_url = base
            .join(TEXT_SEARCH_PATH)
            .map_err(|e| invalid_base_url(base_url, e))?;
        let details_url = base
            .join(DETAILS_PATH)
            .map_err(|e| invalid_base_url(base_url, e))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url,
            details_url,
            page_token_delay: PAGE_TOKEN_DELAY,
        })
    }

    /// Overrides the continuation-token delay.
    ///
    /// Only meant for tests against a local mock server; the real endpoint
    /// needs the full [`PAGE_TOKEN_DELAY`].
    #[must_use]
    pub fn with_page_token_delay(mut self, delay: Duration) -> Self {
        self.page_token_delay = delay;
        self
    }

    #[must_use]
    pub fn page_token_delay(&self) -> Duration {
        self.page_token_delay
    }

    /// Fetches one page of text-search results.
    ///
    /// Issues the request immediately, so it stays crate-private: token
    /// requests must go through [`crate::SearchPager`], which waits out the
    /// delay first.
    ///
    /// An error status such as `INVALID_REQUEST` is logged and the page is
    /// returned; without a `next_page_token` it ends the search.
    pub(crate) async fn search_page(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<TextSearchResponse, PlacesError> {
        let url = self.search_request_url(query, page_token);
        tracing::debug!(query, has_page_token = page_token.is_some(), "text search request");

        let context = if page_token.is_some() {
            format!("textsearch(query={query}, continued)")
        } else {
            format!("textsearch(query={query})")
        };
        let response: TextSearchResponse = self.get_json(url, &context).await?;
        warn_on_error_status(
            "textsearch",
            response.status.as_deref(),
            response.error_message.as_deref(),
        );
        Ok(response)
    }

    /// Fetches phone and website for a place.
    ///
    /// With no `place_id` this returns empty details without touching the
    /// network. A details payload without a `result` object also yields empty
    /// details, whatever its `status` says.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or a non-2xx status.
    /// - [`PlacesError::Deserialize`] if the body is not valid JSON.
    pub async fn fetch_contact_details(
        &self,
        place_id: Option<&str>,
    ) -> Result<ContactDetails, PlacesError> {
        let Some(place_id) = place_id else {
            return Ok(ContactDetails::default());
        };

        let url = self.details_request_url(place_id);
        tracing::debug!(place_id, "place details request");

        let response: DetailsResponse = self
            .get_json(url, &format!("details(place_id={place_id})"))
            .await?;
        warn_on_error_status(
            "details",
            response.status.as_deref(),
            response.error_message.as_deref(),
        );
        Ok(response.into())
    }

    fn search_request_url(&self, query: &str, page_token: Option<&str>) -> Url {
        let mut url = self.search_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            pairs.append_pair("key", &self.api_key);
            if let Some(token) = page_token {
                pairs.append_pair("pagetoken", token);
            }
        }
        url
    }

    fn details_request_url(&self, place_id: &str) -> Url {
        let mut url = self.details_url.clone();
        url.query_pairs_mut()
            .append_pair("place_id", place_id)
            .append_pair("fields", DETAILS_FIELDS)
            .append_pair("key", &self.api_key);
        url
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as `T`.
    ///
    /// `context` goes into parse errors instead of the URL; the URL carries
    /// the API key.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, PlacesError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(redact)?;
        let body = response.text().await.map_err(redact)?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

/// Strips the request URL (and with it the API key) from a transport error.
fn redact(err: reqwest::Error) -> PlacesError {
    PlacesError::Http(err.without_url())
}

fn invalid_base_url(base_url: &str, reason: impl std::fmt::Display) -> PlacesError {
    PlacesError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: reason.to_string(),
    }
}

/// Logs envelope error statuses. Returns whether the status was one of them.
fn warn_on_error_status(
    endpoint: &'static str,
    status: Option<&str>,
    error_message: Option<&str>,
) -> bool {
    match status {
        Some(status) if ERROR_STATUSES.contains(&status) => {
            tracing::warn!(
                endpoint,
                status,
                message = error_message.unwrap_or("no error message"),
                "places API returned an error status; continuing with the body as-is"
            );
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
