//! Request path normalization.
//!
//! Turns a raw request URI into the key the route table is matched against:
//! the mount prefix is removed and a single trailing slash is dropped, so
//! `/app/users/` and `/users` reach the same route.

/// Normalize `uri` for matching.
///
/// Every occurrence of `subdir` is removed (an empty `subdir` is a no-op),
/// then one trailing slash is stripped unless the path is exactly `/`.
///
/// ```
/// use route_table::routing::normalize;
///
/// assert_eq!(normalize("/app/users/", "/app"), "/users");
/// assert_eq!(normalize("/", "/app"), "/");
/// ```
pub fn normalize(uri: &str, subdir: &str) -> String {
    let stripped = if subdir.is_empty() {
        uri.to_string()
    } else {
        uri.replace(subdir, "")
    };

    if stripped.is_empty() {
        return "/".to_string();
    }

    match stripped.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => stripped,
    }
}
