//! Normalization of hand-typed codes.

/// Normalize a hand-typed geohash or identifier.
///
/// This function:
/// 1. Converts ASCII letters to uppercase
/// 2. Maps `O` to `0` and `I`/`L` to `1`
/// 3. Drops every character outside `[0-9A-Z]`
///
/// It never fails and does not check that the result is a well-formed hash.
/// Applying it twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use geocode_id::normalize_geohash;
///
/// assert_eq!(normalize_geohash("word"), "W0RD");
/// assert_eq!(normalize_geohash("L1FE"), "11FE");
/// assert_eq!(normalize_geohash("A-B-C"), "ABC");
/// ```
pub fn normalize_geohash(input: &str) -> String {
    input
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter_map(|c| match c {
            'O' => Some('0'),
            'I' | 'L' => Some('1'),
            '0'..='9' | 'A'..='Z' => Some(c),
            _ => None,
        })
        .collect()
}
