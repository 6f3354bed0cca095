use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{Duration, Utc};
use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    config::Credentials,
    error::{Error, Result},
    types::{Token, TokenResponse},
};

/// Exchanges client credentials for an access token.
///
/// Sends `grant_type=client_credentials` as a form body to the token endpoint,
/// authenticated with HTTP Basic auth built from the client id and secret. The
/// returned token expires `expires_in` seconds after the response is received.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `token_url` - Token endpoint, e.g. `https://accounts.spotify.com/api/token`
/// * `credentials` - Client id and secret; not validated locally
///
/// # Errors
///
/// Returns [`Error::TokenAcquisition`] on network failure, a non-success status
/// or a body that does not contain `access_token` and `expires_in`.
///
/// # Example
///
/// ```
/// let token = request_client_token(&client, config::DEFAULT_TOKEN_URL, &credentials).await?;
/// println!("Token valid until {}", token.expires_at);
/// ```
pub async fn request_client_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<Token> {
    let res = client
        .post(token_url)
        .header(AUTHORIZATION, basic_auth_header(credentials))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| Error::TokenAcquisition(e.to_string()))?
        .error_for_status()
        .map_err(|e| Error::TokenAcquisition(e.to_string()))?;

    let body: TokenResponse = res
        .json()
        .await
        .map_err(|e| Error::TokenAcquisition(e.to_string()))?;

    let expires_at = Duration::try_seconds(body.expires_in)
        .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
        .ok_or_else(|| {
            Error::TokenAcquisition(format!("Invalid expires_in: {}", body.expires_in))
        })?;

    Ok(Token {
        access_token: body.access_token,
        expires_at,
    })
}

/// Builds the `Authorization` header value `Basic base64(id:secret)`.
pub fn basic_auth_header(credentials: &Credentials) -> String {
    let raw = format!("{}:{}", credentials.client_id, credentials.client_secret);
    format!("Basic {}", STANDARD.encode(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_header_encodes_id_and_secret() {
        let credentials = Credentials {
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
        };

        // base64("client:secret")
        assert_eq!(basic_auth_header(&credentials), "Basic Y2xpZW50OnNlY3JldA==");
    }

    #[test]
    fn empty_credentials_still_produce_a_header() {
        assert_eq!(basic_auth_header(&Credentials::default()), "Basic Og==");
    }
}
