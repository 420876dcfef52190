use std::{sync::Arc, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::{
    error::{ExtractError, Res},
    info,
    spotify::transport::Transport,
    types::{AccessToken, Credentials, TokenResponse},
    utils, warning,
};

pub const TOKEN_REQUEST_ATTEMPTS: u32 = 3;
pub const TOKEN_RETRY_DELAY: Duration = Duration::from_secs(30);
pub const DEFAULT_TOKEN_LIFETIME: u64 = 3600;

/// Owns the client credentials of one region app and the bearer token
/// derived from them.
///
/// The token sits behind an async mutex: a refresh holds the lock for the
/// whole exchange, so concurrent callers observe the new token instead of
/// starting refreshes of their own.
pub struct AuthClient {
    credentials: Credentials,
    token_url: String,
    transport: Arc<dyn Transport>,
    token: Mutex<Option<AccessToken>>,
    cancel: CancellationToken,
    retry_delay: Duration,
}

impl AuthClient {
    pub fn new(
        credentials: Credentials,
        token_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            credentials,
            token_url: token_url.into(),
            transport,
            token: Mutex::new(None),
            cancel,
            retry_delay: TOKEN_RETRY_DELAY,
        }
    }

    /// Overrides the pause between failed token requests.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Exchanges the credentials for a fresh token and caches it, replacing
    /// any previous one.
    pub async fn authenticate(&self) -> Res<AccessToken> {
        let mut lock = self.token.lock().await;
        let token = self.request_token().await?;
        *lock = Some(token.clone());
        Ok(token)
    }

    /// Returns the cached token without touching the network.
    pub async fn current_token(&self) -> Option<AccessToken> {
        self.token.lock().await.clone()
    }

    /// Returns the cached token, authenticating first when there is none or
    /// it is about to expire.
    pub async fn valid_token(&self) -> Res<AccessToken> {
        let mut lock = self.token.lock().await;
        if let Some(token) = lock.as_ref() {
            if !token.is_expired() {
                return Ok(token.clone());
            }
        }

        let token = self.request_token().await?;
        *lock = Some(token.clone());
        Ok(token)
    }

    /// Re-authenticates after `stale` was rejected. When another caller has
    /// already replaced that token, the newer one is returned as is.
    pub async fn reauthenticate(&self, stale: &str) -> Res<AccessToken> {
        let mut lock = self.token.lock().await;
        if let Some(token) = lock.as_ref() {
            if token.access_token != stale {
                return Ok(token.clone());
            }
        }

        let token = self.request_token().await?;
        *lock = Some(token.clone());
        Ok(token)
    }

    fn authorization(&self) -> String {
        let raw = format!(
            "{id}:{secret}",
            id = self.credentials.client_id(),
            secret = self.credentials.client_secret()
        );
        format!("Basic {}", STANDARD.encode(raw))
    }

    async fn request_token(&self) -> Res<AccessToken> {
        let authorization = self.authorization();
        let form = [("grant_type", "client_credentials")];
        let mut last = String::new();

        for attempt in 1..=TOKEN_REQUEST_ATTEMPTS {
            match self
                .transport
                .post_form(&self.token_url, &authorization, &form)
                .await
            {
                Ok(response) if response.is_success() => {
                    let json: TokenResponse =
                        serde_json::from_str(&response.body).map_err(|e| ExtractError::Decode {
                            url: self.token_url.clone(),
                            source: e,
                        })?;
                    let token = AccessToken::new(
                        json.access_token,
                        json.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME),
                    );
                    info!(
                        "Access token obtained for client {} (expires in {} seconds)",
                        self.credentials.client_id(),
                        token.expires_in
                    );
                    return Ok(token);
                }
                Ok(response) => {
                    return Err(ExtractError::TokenRejected {
                        status: response.status,
                        message: response.body,
                    });
                }
                Err(e) => {
                    warning!(
                        "Connection error occurred while requesting access token ({}/{}): {}",
                        attempt,
                        TOKEN_REQUEST_ATTEMPTS,
                        e
                    );
                    last = e.to_string();
                }
            }

            if attempt < TOKEN_REQUEST_ATTEMPTS {
                utils::pause(self.retry_delay, &self.cancel).await?;
            }
        }

        Err(ExtractError::TokenRequestExhausted {
            attempts: TOKEN_REQUEST_ATTEMPTS,
            last,
        })
    }
}
