//! Heuristic postal-code extraction from free-text addresses.
//!
//! Picks the first maximal run of ASCII digits whose length is 5 or 6. There
//! is no country awareness: a six-digit building number will match just as
//! readily as a real postal code.

use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// Returns the first 5- or 6-digit run in `address` that is bounded by
/// non-digits (or the string edges), or an empty string if there is none.
#[must_use]
pub fn extract_pincode(address: Option<&str>) -> String {
    let Some(address) = address else {
        return String::new();
    };

    DIGIT_RUN_RE
        .find_iter(address)
        .map(|m| m.as_str())
        .find(|run| matches!(run.len(), 5 | 6))
        .unwrap_or_default()
        .to_owned()
}
