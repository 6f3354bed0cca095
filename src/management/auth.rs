use reqwest::Client;
use tokio::sync::Mutex;

use crate::{config::Credentials, error::Result, spotify, types::Token};

/// In-memory cache for the client-credentials token.
///
/// Holds the token and its expiry as one value behind a single lock, so a
/// reader never sees a new token paired with an old expiry. Nothing is
/// persisted; a restart starts with an empty cache.
pub struct TokenManager {
    client: Client,
    token_url: String,
    credentials: Credentials,
    token: Mutex<Option<Token>>,
}

impl TokenManager {
    pub fn new(client: Client, token_url: impl Into<String>, credentials: Credentials) -> Self {
        TokenManager {
            client,
            token_url: token_url.into(),
            credentials,
            token: Mutex::new(None),
        }
    }

    /// Returns a token that is valid right now, fetching a new one first when
    /// the cache is empty or expired.
    ///
    /// The lock is held while a refresh is in flight, so requests arriving in
    /// the meantime wait for that refresh instead of starting their own.
    ///
    /// # Errors
    ///
    /// Propagates the token endpoint failure. The cached token, if any, is
    /// left untouched in that case.
    pub async fn get_valid_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref().filter(|token| !token.is_expired()) {
            return Ok(token.access_token.clone());
        }

        tracing::debug!("Access token missing or expired, requesting a new one");
        let token =
            spotify::auth::request_client_token(&self.client, &self.token_url, &self.credentials)
                .await?;
        tracing::info!("Obtained access token valid until {}", token.expires_at);

        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }

    pub async fn current_token(&self) -> Option<Token> {
        self.token.lock().await.clone()
    }

    #[cfg(test)]
    pub(crate) async fn set_token(&self, token: Token) {
        *self.token.lock().await = Some(token);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn manager() -> TokenManager {
        // Unroutable endpoint: any refresh attempt fails.
        TokenManager::new(
            Client::new(),
            "http://127.0.0.1:9/api/token",
            Credentials::default(),
        )
    }

    #[tokio::test]
    async fn fresh_token_is_reused_without_network() {
        let manager = manager();
        manager
            .set_token(Token {
                access_token: "cached".to_string(),
                expires_at: Utc::now() + Duration::seconds(3600),
            })
            .await;

        assert_eq!(manager.get_valid_token().await.unwrap(), "cached");
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_token() {
        let manager = manager();
        let stale = Token {
            access_token: "stale".to_string(),
            expires_at: Utc::now() - Duration::seconds(1),
        };
        manager.set_token(stale.clone()).await;

        let err = manager.get_valid_token().await.unwrap_err();

        assert_eq!(err.kind(), "token_acquisition");
        assert_eq!(manager.current_token().await, Some(stale));
    }

    #[tokio::test]
    async fn empty_cache_reports_no_token() {
        assert!(manager().current_token().await.is_none());
    }
}
