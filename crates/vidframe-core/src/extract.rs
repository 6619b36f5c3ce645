//! Video identifier and file extension extraction from user URLs
//!
//! Path-based extraction splits the URL on `/` after dropping the query
//! string. A URL has to split into more than three parts (`scheme:`, the
//! empty part after `//`, host, path...) before its last part counts, so a
//! bare domain never yields an identifier or an extension.

use url::Url;

/// Parts a URL must exceed before its last path segment is used
const MIN_URL_PARTS: usize = 3;

/// Everything before the first `?`
pub fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

/// Last `/`-delimited segment of the URL, ignoring the query string
pub fn last_path_segment(url: &str) -> Option<&str> {
    let parts: Vec<&str> = strip_query(url).split('/').collect();
    if parts.len() <= MIN_URL_PARTS {
        return None;
    }
    parts.last().copied().filter(|segment| !segment.is_empty())
}

/// Value of the `v` query parameter, if present and non-empty
pub fn query_video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(name, _)| name == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// YouTube identifier: `?v=` first, then the last path segment
pub fn youtube_id(url: &str) -> Option<String> {
    query_video_id(url).or_else(|| path_id(url))
}

/// Identifier taken from the last path segment only (Vimeo, Dailymotion)
pub fn path_id(url: &str) -> Option<String> {
    last_path_segment(url).map(str::to_string)
}

/// Extension of the file named by the last path segment
pub fn file_extension(url: &str) -> Option<&str> {
    let segment = last_path_segment(url)?;
    let (_, extension) = segment.rsplit_once('.')?;
    Some(extension).filter(|ext| !ext.is_empty())
}
