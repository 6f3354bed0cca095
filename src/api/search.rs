use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::{
    error::{Error, Result},
    server::AppState,
    spotify,
    types::UrlResponse,
    utils,
};

pub const MISSING_PARAMS_MESSAGE: &str = "Missing title or artist parameter";

pub async fn search(
    State(state): State<AppState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<UrlResponse>> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!("Unreadable query string: {}", rejection);
            Vec::new()
        }
    };
    let params = utils::search_params(pairs);

    let (Some(title), Some(artist)) = (
        utils::non_empty(params.title.as_ref()),
        utils::non_empty(params.artist.as_ref()),
    ) else {
        return Err(Error::Validation(MISSING_PARAMS_MESSAGE.to_string()));
    };

    let url = find_share_url(&state, title, artist).await?;
    Ok(Json(UrlResponse { url }))
}

/// Resolves a title/artist pair to a share URL, falling back to the search
/// page when the catalog has no match.
pub async fn find_share_url(state: &AppState, title: &str, artist: &str) -> Result<String> {
    let token = state.tokens.get_valid_token().await?;
    let response =
        spotify::search::search_track(&state.client, &state.config.api_url, &token, title, artist)
            .await?;

    let url = utils::share_url(&response, &state.config.search_page_url, title, artist);
    tracing::debug!(title, artist, %url, "Resolved share url");
    Ok(url)
}
