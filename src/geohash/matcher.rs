//! Matching of hand-typed codes against stored ones.
//!
//! Both sides are normalized first, so `9q8yy-gpu`, `9Q8YY GPU` and
//! `9Q8YYGPU` all refer to the same stored identifier.

use crate::geohash::normalizer::normalize_geohash;

/// Check whether a typed code refers to a stored code.
///
/// # Examples
///
/// ```
/// use geocode_id::matches_code;
///
/// assert!(matches_code("82fm8-gpu", "82FM8-GPU"));
/// assert!(matches_code("WFBNU-1QG", "wfbnu 1qg"));
/// assert!(!matches_code("82FM8-GPU", "82FM8-GPV"));
/// ```
pub fn matches_code(typed: &str, stored: &str) -> bool {
    let typed = normalize_geohash(typed);
    !typed.is_empty() && typed == normalize_geohash(stored)
}

/// Check whether an identifier was issued inside the cell named by `hash`.
///
/// This is a prefix test on the normalized forms; an empty hash matches nothing.
pub fn in_cell(identifier: &str, hash: &str) -> bool {
    let hash = normalize_geohash(hash);
    !hash.is_empty() && normalize_geohash(identifier).starts_with(&hash)
}
