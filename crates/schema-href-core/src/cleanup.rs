//! Anchor and query stripping for base locations.

/// Everything before the first `#`.
pub fn strip_anchor(location: &str) -> &str {
    match location.find('#') {
        Some(pos) => &location[..pos],
        None => location,
    }
}

/// Everything before the first `?`.
pub fn strip_query(location: &str) -> &str {
    match location.find('?') {
        Some(pos) => &location[..pos],
        None => location,
    }
}

/// Removes the anchor, then the query.
///
/// A `?` that only appears inside the anchor is not treated as a query:
/// `http://a/b#x?y` becomes `http://a/b`.
pub fn strip_query_and_anchor(location: &str) -> &str {
    strip_query(strip_anchor(location))
}
