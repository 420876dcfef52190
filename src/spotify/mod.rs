//! # Spotify Integration Module
//!
//! Authenticated access to the parts of the Spotify Web API the extraction
//! needs.
//!
//! ```text
//! Extractor
//!     ↓
//! SpotifyApi          (endpoint URLs, JSON decoding)
//!     ↓
//! RateLimitedRequester (pacing, 401/429 handling, retry budget)
//!     ├── AuthClient   (client credentials grant, token cache)
//!     ↓
//! Transport           (reqwest in production)
//! ```
//!
//! ## Endpoints
//!
//! - `POST /api/token` - client credentials grant
//! - `GET /browse/featured-playlists` - featured playlists per country and hour
//! - `GET /playlists/{id}` - playlist metadata and track list
//! - `GET /tracks?ids=` - up to 50 tracks per call
//! - `GET /audio-features?ids=` - up to 100 tracks per call
//!
//! ## Failure handling
//!
//! Connection failures, 401 and 429 are absorbed by the requester within a
//! budget of three attempts per call. A `retry-after` beyond 23 hours, an
//! exhausted budget or an undecodable body ends the run with an
//! [`ExtractError`].

pub mod auth;
mod playlists;
pub mod requester;
mod tracks;
pub mod transport;

use std::sync::Arc;

use serde::de::DeserializeOwned;

pub use auth::AuthClient;
pub use requester::{RateLimitedRequester, RetryPolicy, Verdict};
pub use tracks::{AUDIO_FEATURES_BATCH_LIMIT, TRACKS_BATCH_LIMIT};
pub use transport::{HttpResponse, ReqwestTransport, Transport, TransportError};

use crate::error::{ExtractError, Res};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Typed wrapper over the provider endpoints.
#[derive(Clone)]
pub struct SpotifyApi {
    requester: Arc<RateLimitedRequester>,
    api_url: String,
}

impl SpotifyApi {
    pub fn new(requester: Arc<RateLimitedRequester>, api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            requester,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn requester(&self) -> &RateLimitedRequester {
        &self.requester
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Res<T> {
        let response = self.requester.get(url).await?;
        serde_json::from_str(&response.body).map_err(|e| ExtractError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}
