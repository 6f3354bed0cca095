use reqwest::Client;

use crate::{
    error::{Error, Result},
    types::SearchResponse,
    utils,
};

/// Searches the catalog for a single track matching `title` and `artist`.
///
/// Issues `GET {api_url}/search?q=track:<title> artist:<artist>&type=track&limit=1`
/// with the bearer token. An empty result is returned as-is; deciding on the
/// fallback link is left to the caller.
///
/// # Errors
///
/// Returns [`Error::UpstreamSearch`] on network failure, a non-success status
/// (including an expired or rejected token) or a malformed body.
pub async fn search_track(
    client: &Client,
    api_url: &str,
    token: &str,
    title: &str,
    artist: &str,
) -> Result<SearchResponse> {
    let url = format!("{}/search", api_url.trim_end_matches('/'));
    let query = utils::build_search_query(title, artist);

    let res = client
        .get(&url)
        .bearer_auth(token)
        .query(&[("q", query.as_str()), ("type", "track"), ("limit", "1")])
        .send()
        .await
        .map_err(|e| Error::UpstreamSearch(e.to_string()))?
        .error_for_status()
        .map_err(|e| Error::UpstreamSearch(e.to_string()))?;

    res.json::<SearchResponse>()
        .await
        .map_err(|e| Error::UpstreamSearch(e.to_string()))
}
