use crate::{
    error::Res,
    spotify::SpotifyApi,
    types::{SeveralAudioFeaturesResponse, SeveralTracksResponse},
};

/// Most track IDs accepted by `GET /tracks`.
pub const TRACKS_BATCH_LIMIT: usize = 50;
/// Most track IDs accepted by `GET /audio-features`.
pub const AUDIO_FEATURES_BATCH_LIMIT: usize = 100;

impl SpotifyApi {
    /// Track metadata for at most [`TRACKS_BATCH_LIMIT`] IDs. Unknown IDs come
    /// back as `null` entries.
    pub async fn tracks(&self, track_ids: &[String]) -> Res<SeveralTracksResponse> {
        let url = format!(
            "{uri}/tracks?ids={ids}",
            uri = self.api_url,
            ids = track_ids.join(",")
        );
        self.fetch_json(&url).await
    }

    /// Audio features for at most [`AUDIO_FEATURES_BATCH_LIMIT`] IDs.
    pub async fn audio_features(&self, track_ids: &[String]) -> Res<SeveralAudioFeaturesResponse> {
        let url = format!(
            "{uri}/audio-features?ids={ids}",
            uri = self.api_url,
            ids = track_ids.join(",")
        );
        self.fetch_json(&url).await
    }
}
