use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::types::{SearchParams, SearchResponse};

/// Characters left as-is in a URI component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the catalog query string for a title/artist pair.
pub fn build_search_query(title: &str, artist: &str) -> String {
    format!("track:{} artist:{}", title, artist)
}

/// Builds the search-page link used when the catalog has no match.
///
/// The `"<title> <artist>"` string is percent-encoded as a single path segment
/// and appended to `base`.
pub fn fallback_url(base: &str, title: &str, artist: &str) -> String {
    let query = format!("{} {}", title, artist);
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        utf8_percent_encode(&query, URI_COMPONENT)
    )
}

/// Picks the share URL of the first track, or the fallback link when the
/// response carries no tracks.
pub fn share_url(response: &SearchResponse, search_page_url: &str, title: &str, artist: &str) -> String {
    match response
        .tracks
        .as_ref()
        .and_then(|tracks| tracks.items.first())
    {
        Some(track) => track.external_urls.spotify.clone(),
        None => fallback_url(search_page_url, title, artist),
    }
}

/// Returns the value if present and non-empty.
pub fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Collects `title` and `artist` from raw query pairs. When a key repeats,
/// the first occurrence wins.
pub fn search_params(pairs: Vec<(String, String)>) -> SearchParams {
    let mut params = SearchParams::default();
    for (key, value) in pairs {
        let slot = match key.as_str() {
            "title" => &mut params.title,
            "artist" => &mut params.artist,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }
    params
}
