pub mod client;
pub mod error;
pub mod pager;
pub mod types;

pub use client::{PlacesClient, PAGE_TOKEN_DELAY};
pub use error::PlacesError;
pub use pager::{SearchPage, SearchPager, MAX_PAGES};
pub use types::{DetailsResponse, PlaceResult, TextSearchResponse};
