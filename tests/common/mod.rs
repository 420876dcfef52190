#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet, VecDeque},
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use featurd::{
    pipeline::{Extractor, Pipeline},
    region::{Market, Region, RegionLookup},
    spotify::{
        AuthClient, HttpResponse, RateLimitedRequester, RetryPolicy, SpotifyApi, Transport,
        TransportError,
    },
    types::Credentials,
};
use serde_json::json;
use tokio_util::sync::CancellationToken;

pub const TOKEN_URL: &str = "https://accounts.test/api/token";
pub const API_URL: &str = "https://api.test/v1";

type Handler = Box<dyn Fn(&str) -> Result<HttpResponse, TransportError> + Send + Sync>;

/// In-memory transport. Queued responses are served first, then the
/// fallback handler answers. Token requests hand out `token-1`, `token-2`, ...
pub struct FakeTransport {
    handler: Handler,
    queued_gets: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    queued_posts: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    gets: Mutex<Vec<(String, String)>>,
    posts: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&str) -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            queued_gets: Mutex::new(VecDeque::new()),
            queued_posts: Mutex::new(VecDeque::new()),
            gets: Mutex::new(Vec::new()),
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn ok() -> Self {
        Self::new(|_| Ok(HttpResponse::new(200, "{}")))
    }

    pub fn queue_get(self, response: Result<HttpResponse, TransportError>) -> Self {
        self.queued_gets.lock().unwrap().push_back(response);
        self
    }

    pub fn queue_post(self, response: Result<HttpResponse, TransportError>) -> Self {
        self.queued_posts.lock().unwrap().push_back(response);
        self
    }

    /// (url, bearer token) of every GET, in order.
    pub fn gets(&self) -> Vec<(String, String)> {
        self.gets.lock().unwrap().clone()
    }

    pub fn get_urls(&self) -> Vec<String> {
        self.gets().into_iter().map(|(url, _)| url).collect()
    }

    /// Authorization header of every token request, in order.
    pub fn posts(&self) -> Vec<String> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: &str, bearer: &str) -> Result<HttpResponse, TransportError> {
        self.gets
            .lock()
            .unwrap()
            .push((url.to_string(), bearer.to_string()));
        if let Some(response) = self.queued_gets.lock().unwrap().pop_front() {
            return response;
        }
        (self.handler)(url)
    }

    async fn post_form(
        &self,
        _url: &str,
        authorization: &str,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        assert_eq!(form, &[("grant_type", "client_credentials")]);
        let count = {
            let mut posts = self.posts.lock().unwrap();
            posts.push(authorization.to_string());
            posts.len()
        };
        if let Some(response) = self.queued_posts.lock().unwrap().pop_front() {
            return response;
        }
        Ok(HttpResponse::new(
            200,
            json!({
                "access_token": format!("token-{count}"),
                "token_type": "Bearer",
                "expires_in": 3600
            })
            .to_string(),
        ))
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("client-id", "client-secret")
}

pub fn auth_client(transport: &Arc<FakeTransport>, cancel: &CancellationToken) -> Arc<AuthClient> {
    Arc::new(
        AuthClient::new(
            credentials(),
            TOKEN_URL,
            Arc::clone(transport) as Arc<dyn Transport>,
            cancel.clone(),
        )
        .with_retry_delay(Duration::from_secs(30)),
    )
}

pub fn requester(
    transport: &Arc<FakeTransport>,
    cancel: &CancellationToken,
) -> Arc<RateLimitedRequester> {
    Arc::new(RateLimitedRequester::new(
        auth_client(transport, cancel),
        Arc::clone(transport) as Arc<dyn Transport>,
        RetryPolicy::default(),
        cancel.clone(),
    ))
}

pub fn extractor(transport: &Arc<FakeTransport>) -> Extractor {
    let cancel = CancellationToken::new();
    Extractor::new(SpotifyApi::new(requester(transport, &cancel), API_URL)).with_progress(false)
}

pub fn pipeline(transport: &Arc<FakeTransport>, lookup: RegionLookup) -> Pipeline {
    Pipeline::new(extractor(transport), Arc::new(lookup))
}

/// Lookup with two known markets, used as a fixture.
pub fn fixture_lookup() -> RegionLookup {
    RegionLookup::from_markets(vec![
        Market {
            iso: "SE".to_string(),
            country: "Sweden".to_string(),
            region: "Europe".to_string(),
            group: Region::Eu,
        },
        Market {
            iso: "NO".to_string(),
            country: "Norway".to_string(),
            region: "Europe".to_string(),
            group: Region::Eu,
        },
    ])
}

/// A provider catalogue answering the four read endpoints.
#[derive(Debug, Clone, Default)]
pub struct FakeCatalog {
    /// Featured playlist IDs per country, identical for every hour.
    pub featured: HashMap<String, Vec<Option<String>>>,
    /// Track IDs per playlist, `None` for withdrawn tracks.
    pub playlists: HashMap<String, Vec<Option<String>>>,
    pub tracks: HashSet<String>,
    pub audio_features: HashSet<String>,
}

impl FakeCatalog {
    pub fn feature(mut self, country: &str, playlist_ids: &[Option<&str>]) -> Self {
        self.featured.insert(
            country.to_string(),
            playlist_ids.iter().map(|p| p.map(str::to_string)).collect(),
        );
        self
    }

    pub fn playlist(mut self, playlist_id: &str, track_ids: &[Option<&str>]) -> Self {
        self.playlists.insert(
            playlist_id.to_string(),
            track_ids.iter().map(|t| t.map(str::to_string)).collect(),
        );
        self
    }

    /// Registers tracks with metadata and, when `with_features`, audio features.
    pub fn tracks(mut self, track_ids: &[&str], with_features: bool) -> Self {
        for id in track_ids {
            self.tracks.insert(id.to_string());
            if with_features {
                self.audio_features.insert(id.to_string());
            }
        }
        self
    }

    pub fn into_transport(self) -> Arc<FakeTransport> {
        Arc::new(FakeTransport::new(move |url| Ok(self.respond(url))))
    }

    pub fn respond(&self, url: &str) -> HttpResponse {
        let path = url.strip_prefix(API_URL).unwrap_or(url);

        if let Some(query) = path.strip_prefix("/browse/featured-playlists?") {
            let country = query_param(query, "country").unwrap_or_default();
            let items: Vec<serde_json::Value> = self
                .featured
                .get(&country)
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .map(|id| match id {
                    Some(id) => json!({ "id": id, "name": format!("Playlist {id}") }),
                    None => serde_json::Value::Null,
                })
                .collect();
            return HttpResponse::new(
                200,
                json!({ "message": "Featured", "playlists": { "items": items } }).to_string(),
            );
        }

        if let Some(ids) = path.strip_prefix("/tracks?ids=") {
            let tracks: Vec<serde_json::Value> = ids
                .split(',')
                .map(|id| {
                    if self.tracks.contains(id) {
                        track_json(id)
                    } else {
                        serde_json::Value::Null
                    }
                })
                .collect();
            return HttpResponse::new(200, json!({ "tracks": tracks }).to_string());
        }

        if let Some(ids) = path.strip_prefix("/audio-features?ids=") {
            let features: Vec<serde_json::Value> = ids
                .split(',')
                .map(|id| {
                    if self.audio_features.contains(id) {
                        audio_features_json(id)
                    } else {
                        serde_json::Value::Null
                    }
                })
                .collect();
            return HttpResponse::new(200, json!({ "audio_features": features }).to_string());
        }

        if let Some(id) = path.strip_prefix("/playlists/") {
            return match self.playlists.get(id) {
                Some(track_ids) => {
                    HttpResponse::new(200, playlist_json(id, track_ids).to_string())
                }
                None => HttpResponse::new(404, r#"{"error":{"status":404}}"#),
            };
        }

        HttpResponse::new(404, r#"{"error":{"status":404}}"#)
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

pub fn playlist_json(id: &str, track_ids: &[Option<String>]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = track_ids
        .iter()
        .map(|t| match t {
            Some(id) => json!({ "track": { "id": id } }),
            None => json!({ "track": null }),
        })
        .collect();

    json!({
        "id": id,
        "name": format!("Playlist {id}"),
        "followers": { "href": null, "total": 1200 },
        "tracks": { "total": track_ids.len(), "items": items }
    })
}

pub fn track_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Track {id}"),
        "popularity": 64,
        "duration_ms": 215000,
        "explicit": false,
        "artists": [
            { "id": format!("artist-{id}"), "name": format!("Artist {id}") },
            { "id": "featured-artist", "name": "Featured Artist" }
        ],
        "album": {
            "id": format!("album-{id}"),
            "name": format!("Album {id}"),
            "album_type": "single",
            "type": "album",
            "release_date": "2023-04-14"
        }
    })
}

pub fn audio_features_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "danceability": 0.735,
        "energy": 0.578,
        "key": 5,
        "loudness": -11.84,
        "mode": 0,
        "speechiness": 0.0461,
        "acousticness": 0.514,
        "instrumentalness": 0.0902,
        "liveness": 0.159,
        "valence": 0.636,
        "tempo": 98.002,
        "time_signature": 4
    })
}
