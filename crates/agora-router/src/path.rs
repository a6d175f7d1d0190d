//! Path validation and normalization.
//!
//! Both functions are pure. `normalize_path` returns `Cow::Borrowed` when the
//! input is already canonical, so the common case allocates nothing.

use std::borrow::Cow;

/// Checks whether a path is already in canonical form.
///
/// Canonical paths start with `/`, contain no `//` or `\`, and do not end
/// with `/` (except the root itself).
///
/// # Examples
///
/// ```
/// use agora_router::path::is_canonical_path;
///
/// assert!(is_canonical_path("/"));
/// assert!(is_canonical_path("/threads/general"));
///
/// assert!(!is_canonical_path("threads"));
/// assert!(!is_canonical_path("/threads/"));
/// assert!(!is_canonical_path("/threads//general"));
/// ```
pub fn is_canonical_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }
    if path.contains("//") || path.contains('\\') {
        return false;
    }
    if path == "/" {
        return true;
    }
    !path.ends_with('/')
}

/// Normalizes a request path to canonical form.
///
/// Collapses duplicate slashes, strips trailing slashes, and converts
/// backslashes. Already-canonical input is returned borrowed.
///
/// # Examples
///
/// ```
/// use agora_router::path::normalize_path;
///
/// assert_eq!(normalize_path("/threads/"), "/threads");
/// assert_eq!(normalize_path("/threads//general"), "/threads/general");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_canonical_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_canonical_path() {
        assert!(is_canonical_path("/"));
        assert!(is_canonical_path("/threads"));
        assert!(is_canonical_path("/threads/general/posts"));

        assert!(!is_canonical_path(""));
        assert!(!is_canonical_path("threads"));
        assert!(!is_canonical_path("/threads/"));
        assert!(!is_canonical_path("/threads//general"));
        assert!(!is_canonical_path("/threads\\general"));
    }

    #[test]
    fn test_normalize_valid_is_borrowed() {
        assert!(matches!(normalize_path("/threads"), Cow::Borrowed("/threads")));
        assert!(matches!(normalize_path("/"), Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_trailing_slash() {
        assert_eq!(normalize_path("/threads/"), "/threads");
        assert_eq!(normalize_path("/threads/general/"), "/threads/general");
    }

    #[test]
    fn test_normalize_double_slash() {
        assert_eq!(normalize_path("/threads//general"), "/threads/general");
        assert_eq!(normalize_path("/a///b////c"), "/a/b/c");
    }

    #[test]
    fn test_normalize_backslash() {
        assert_eq!(normalize_path("\\threads\\general"), "/threads/general");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
    }
}
