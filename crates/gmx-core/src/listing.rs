//! Listing records as they move through search, enrichment and persistence.

use crate::pincode::extract_pincode;

/// One business listing returned by the place-search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCandidate {
    /// Display name. Empty when the source omitted it.
    pub name: String,
    /// Free-text address. Empty when the source omitted it.
    pub formatted_address: String,
    /// Place identifier used to fetch contact details.
    pub external_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Supplemental fields from the per-place details endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub phone: String,
    pub website: String,
}

/// A listing merged with its contact details and derived pincode, ready for
/// the dedup gate.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub name: String,
    pub address: String,
    pub external_id: Option<String>,
    pub phone: String,
    /// No upstream field supplies an email; always empty.
    pub email: String,
    pub website: String,
    pub pincode: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl EnrichedRecord {
    /// Merges a candidate with its contact details and derives the pincode
    /// from the address.
    #[must_use]
    pub fn assemble(candidate: ListingCandidate, contact: ContactDetails) -> Self {
        let pincode = extract_pincode(Some(&candidate.formatted_address));
        Self {
            name: candidate.name,
            address: candidate.formatted_address,
            external_id: candidate.external_id,
            phone: contact.phone,
            email: String::new(),
            website: contact.website,
            pincode,
            latitude: candidate.latitude,
            longitude: candidate.longitude,
        }
    }

    /// `true` when both halves of the `(name, address)` dedup key are present.
    #[must_use]
    pub fn has_dedup_key(&self) -> bool {
        !self.name.is_empty() && !self.address.is_empty()
    }
}
