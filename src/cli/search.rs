use crate::{api, config::Config, error, info, server::AppState, success, warning};

/// Resolves one title/artist pair from the command line and prints the link.
///
/// Goes through the same token cache and catalog search as the HTTP
/// endpoint, so the printed URL is exactly what `GET /api/search` would
/// return. With `open` set, the link is also opened in the default browser.
pub async fn search(config: Config, title: String, artist: String, open: bool) {
    if title.is_empty() || artist.is_empty() {
        error!("{}", api::MISSING_PARAMS_MESSAGE);
    }

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => error!("{}", e),
    };

    info!("Searching for \"{}\" by {}", title, artist);

    let url = match api::find_share_url(&state, &title, &artist).await {
        Ok(url) => url,
        Err(e) => error!("{}", e),
    };

    success!("{}", url);

    if open && webbrowser::open(&url).is_err() {
        warning!("Failed to open browser. Open the link above manually.");
    }
}
