//! Response types for the place text-search and place-details endpoints.
//!
//! Only the fields this crate reads are modelled; everything else in the
//! payload is ignored. Any field the upstream may omit is optional here and
//! defaulted during conversion, except `results`, whose absence means the body
//! is not a search response at all.

use gmx_core::{ContactDetails, ListingCandidate};
use serde::Deserialize;

/// Top-level response from `GET textsearch/json`.
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    pub results: Vec<PlaceResult>,
    /// Continuation token for the next page. Absent on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A single search hit.
#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub place_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// Top-level response from `GET details/json`.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<PlaceDetails>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl From<PlaceResult> for ListingCandidate {
    fn from(place: PlaceResult) -> Self {
        let location = place.geometry.and_then(|g| g.location);
        let (latitude, longitude) = location.map_or((0.0, 0.0), |loc| {
            (loc.lat.unwrap_or(0.0), loc.lng.unwrap_or(0.0))
        });

        Self {
            name: place.name.unwrap_or_default(),
            formatted_address: place.formatted_address.unwrap_or_default(),
            external_id: place.place_id,
            latitude,
            longitude,
        }
    }
}

impl From<DetailsResponse> for ContactDetails {
    fn from(response: DetailsResponse) -> Self {
        response
            .result
            .map(|details| ContactDetails {
                phone: details.formatted_phone_number.unwrap_or_default(),
                website: details.website.unwrap_or_default(),
            })
            .unwrap_or_default()
    }
}
