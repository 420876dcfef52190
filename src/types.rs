use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Client credentials of one Spotify app.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Bearer token obtained through the client credentials grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl AccessToken {
    pub fn new(access_token: String, expires_in: u64) -> Self {
        Self {
            access_token,
            expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        }
    }

    /// A token counts as expired four minutes before the provider drops it.
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + 240 >= self.obtained_at + self.expires_in
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: Option<u64>,
}

// Provider payloads. Nullable list entries stay `Option` so that the
// extractor can drop them explicitly.

#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedPlaylistsResponse {
    pub playlists: PlaylistPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistPage {
    #[serde(default)]
    pub items: Vec<Option<PlaylistRef>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistRef {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistResponse {
    pub id: String,
    pub name: String,
    pub followers: Followers,
    pub tracks: PlaylistTracks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracks {
    pub total: u64,
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<TrackRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackRef {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeveralTracksResponse {
    #[serde(default)]
    pub tracks: Vec<Option<TrackObject>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
    pub id: String,
    pub name: String,
    pub popularity: u32,
    pub duration_ms: u64,
    pub explicit: bool,
    #[serde(default)]
    pub artists: Vec<SimpleArtist>,
    pub album: SimpleAlbum,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimpleArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimpleAlbum {
    pub id: String,
    pub name: String,
    pub album_type: String,
    pub release_date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeveralAudioFeaturesResponse {
    #[serde(default)]
    pub audio_features: Vec<Option<AudioFeatureObject>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioFeatureObject {
    pub id: String,
    pub danceability: f64,
    pub energy: f64,
    pub key: i32,
    pub loudness: f64,
    pub mode: i32,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    pub time_signature: i32,
}

/// One playlist seen in one hourly featured snapshot of one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedSample {
    pub playlist_id: String,
    pub iso: String,
    pub featured: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRecord {
    pub playlist_id: String,
    pub name: String,
    pub followers_total: u64,
    pub tracks_total: u64,
    pub track_ids: Vec<String>,
}

impl From<PlaylistResponse> for PlaylistRecord {
    fn from(p: PlaylistResponse) -> Self {
        let track_ids = p
            .tracks
            .items
            .into_iter()
            .filter_map(|item| item.track.and_then(|t| t.id))
            .collect();

        Self {
            playlist_id: p.id,
            name: p.name,
            followers_total: p.followers.total,
            tracks_total: p.tracks.total,
            track_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub track_id: String,
    pub name: String,
    pub popularity: u32,
    pub duration_ms: u64,
    pub explicit: bool,
    pub artist_id: Option<String>,
    pub artist_name: Option<String>,
    pub album_id: String,
    pub album_name: String,
    pub album_type: String,
    pub album_release_date: String,
}

impl From<TrackObject> for TrackRecord {
    fn from(t: TrackObject) -> Self {
        let first_artist = t.artists.into_iter().next();

        Self {
            track_id: t.id,
            name: t.name,
            popularity: t.popularity,
            duration_ms: t.duration_ms,
            explicit: t.explicit,
            artist_id: first_artist.as_ref().map(|a| a.id.clone()),
            artist_name: first_artist.map(|a| a.name),
            album_id: t.album.id,
            album_name: t.album.name,
            album_type: t.album.album_type,
            album_release_date: t.album.release_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioFeatureRecord {
    pub track_id: String,
    pub danceability: f64,
    pub energy: f64,
    pub tonality: i32,
    pub loudness: f64,
    pub mode: i32,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    pub time_signature: i32,
}

impl From<AudioFeatureObject> for AudioFeatureRecord {
    fn from(a: AudioFeatureObject) -> Self {
        Self {
            track_id: a.id,
            danceability: a.danceability,
            energy: a.energy,
            tonality: a.key,
            loudness: a.loudness,
            mode: a.mode,
            speechiness: a.speechiness,
            acousticness: a.acousticness,
            instrumentalness: a.instrumentalness,
            liveness: a.liveness,
            valence: a.valence,
            tempo: a.tempo,
            time_signature: a.time_signature,
        }
    }
}

/// One output row. Fields are declared in alphabetical order so that every
/// serializer emits the same column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledRecord {
    pub country: Option<String>,
    pub featured: Option<NaiveDateTime>,
    pub iso: String,
    pub playlist_followers_total: i32,
    pub playlist_id: String,
    pub playlist_name: String,
    pub playlist_tracks_total: i32,
    pub region: Option<String>,
    pub track_album_id: String,
    pub track_album_name: String,
    pub track_album_release: Option<NaiveDate>,
    pub track_album_type: String,
    pub track_artist_id: Option<String>,
    pub track_artist_name: Option<String>,
    pub track_audio_acousticness: f32,
    pub track_audio_danceability: f32,
    pub track_audio_energy: f32,
    pub track_audio_instrumentalness: f32,
    pub track_audio_liveness: f32,
    pub track_audio_loudness: f32,
    pub track_audio_mode: i32,
    pub track_audio_speechiness: f32,
    pub track_audio_tempo: i32,
    pub track_audio_time_signature: i32,
    pub track_audio_tonality: i32,
    pub track_audio_valence: f32,
    pub track_duration: i32,
    pub track_explicit: bool,
    pub track_id: String,
    pub track_name: String,
    pub track_popularity: i32,
}

impl AssembledRecord {
    pub const COLUMNS: [&'static str; 31] = [
        "country",
        "featured",
        "iso",
        "playlist_followers_total",
        "playlist_id",
        "playlist_name",
        "playlist_tracks_total",
        "region",
        "track_album_id",
        "track_album_name",
        "track_album_release",
        "track_album_type",
        "track_artist_id",
        "track_artist_name",
        "track_audio_acousticness",
        "track_audio_danceability",
        "track_audio_energy",
        "track_audio_instrumentalness",
        "track_audio_liveness",
        "track_audio_loudness",
        "track_audio_mode",
        "track_audio_speechiness",
        "track_audio_tempo",
        "track_audio_time_signature",
        "track_audio_tonality",
        "track_audio_valence",
        "track_duration",
        "track_explicit",
        "track_id",
        "track_name",
        "track_popularity",
    ];
}

#[derive(Tabled)]
pub struct MarketTableRow {
    pub iso: String,
    pub country: String,
    pub region: String,
}

#[derive(Tabled)]
pub struct ExtractionTableRow {
    pub iso: String,
    pub rows: usize,
    pub dropped_samples: usize,
    pub dropped_tracks: usize,
    pub file: String,
}
