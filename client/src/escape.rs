//! Object key escaping for URL path segments.

use std::borrow::Cow;

use crate::error::{CmdbError, CmdbResult};

/// Percent-encode an object key so it can be appended as a single path segment.
///
/// Everything except the RFC 3986 unreserved set (`A-Z a-z 0-9 - _ . ~`) is
/// encoded, so `/`, `?`, `#`, `%` and spaces can never split or truncate the
/// path. Spaces become `%20`, never `+`.
pub fn escape_mkey(mkey: &str) -> Cow<'_, str> {
    urlencoding::encode(mkey)
}

/// Escape `mkey`, rejecting keys that cannot address a single member.
///
/// An empty key, `.` or `..` would be removed or resolved against the
/// collection by URL normalization (`%2E` counts as a dot too), so the request
/// would hit the collection or its parent instead of one member.
pub fn checked_mkey(mkey: &str) -> CmdbResult<Cow<'_, str>> {
    match mkey {
        "" | "." | ".." => Err(CmdbError::InvalidKey(mkey.to_string())),
        _ => Ok(escape_mkey(mkey)),
    }
}
