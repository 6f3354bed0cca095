use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bearer token together with the moment it stops being valid.
///
/// The two fields are always replaced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Token {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Body returned by the client-credentials token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

/// Query parameters accepted by `GET /api/search`, built from the raw query
/// pairs by [`crate::utils::search_params`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub title: Option<String>,
    pub artist: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<Tracks>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracks {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn token_expires_strictly_after_expiry() {
        let now = Utc::now();
        let token = Token {
            access_token: "abc".to_string(),
            expires_at: now,
        };

        assert!(!token.is_expired_at(now));
        assert!(token.is_expired_at(now + Duration::milliseconds(1)));
    }
}
