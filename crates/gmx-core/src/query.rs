/// Composes the free-text search query sent to the place-search endpoint.
///
/// Inputs are used as given; callers trim them. Empty inputs still produce a
/// well-formed (if useless) query such as `" in "`.
#[must_use]
pub fn build_query(keyword: &str, location: &str) -> String {
    format!("{keyword} in {location}")
}
