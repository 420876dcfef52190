use std::time::Duration;

use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error::Res,
    spotify::{AUDIO_FEATURES_BATCH_LIMIT, SpotifyApi, TRACKS_BATCH_LIMIT},
    types::{AudioFeatureRecord, FeaturedSample, PlaylistRecord, TrackRecord},
    utils,
};

/// Raw results of the four fetch stages of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub samples: Vec<FeaturedSample>,
    pub playlists: Vec<PlaylistRecord>,
    pub tracks: Vec<TrackRecord>,
    pub audio_features: Vec<AudioFeatureRecord>,
}

impl Extraction {
    /// Distinct track IDs over all playlists, in first-seen order.
    pub fn track_ids(&self) -> Vec<String> {
        unique_track_ids(&self.playlists)
    }
}

fn unique_track_ids(playlists: &[PlaylistRecord]) -> Vec<String> {
    utils::unique_in_order(playlists.iter().flat_map(|p| p.track_ids.iter().cloned()))
}

/// Drives featured playlists → playlists → tracks → audio features for one
/// set of countries and one date. Each stage finishes before the next one
/// starts; the first fatal error ends the run.
pub struct Extractor {
    api: SpotifyApi,
    show_progress: bool,
}

impl Extractor {
    pub fn new(api: SpotifyApi) -> Self {
        Self {
            api,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn api(&self) -> &SpotifyApi {
        &self.api
    }

    pub async fn extract(&self, countries: &[String], date: NaiveDate) -> Res<Extraction> {
        if countries.is_empty() {
            return Ok(Extraction::default());
        }

        let samples = self.featured_samples(countries, date).await?;

        let playlist_ids = utils::unique_in_order(samples.iter().map(|s| s.playlist_id.clone()));
        let playlists = self.playlists(&playlist_ids).await?;

        let track_ids = unique_track_ids(&playlists);
        let tracks = self.tracks(&track_ids).await?;
        let audio_features = self.audio_features(&track_ids).await?;

        Ok(Extraction {
            samples,
            playlists,
            tracks,
            audio_features,
        })
    }

    /// Stage A: one request per hour and country. Every playlist in a
    /// snapshot becomes a sample, repeats across hours included.
    pub async fn featured_samples(
        &self,
        countries: &[String],
        date: NaiveDate,
    ) -> Res<Vec<FeaturedSample>> {
        let timestamps = utils::hourly_timestamps(date);
        let pb = self.progress(
            (timestamps.len() * countries.len()) as u64,
            "Fetching featured playlists",
        );

        let mut samples = Vec::new();
        for timestamp in &timestamps {
            for country in countries {
                let page = self.api.featured_playlists(country, timestamp).await?;
                samples.extend(page.playlists.items.into_iter().flatten().map(|p| {
                    FeaturedSample {
                        playlist_id: p.id,
                        iso: country.clone(),
                        featured: timestamp.clone(),
                    }
                }));
                pb.inc(1);
            }
        }

        pb.finish_and_clear();
        Ok(samples)
    }

    /// Stage B: one request per playlist ID.
    pub async fn playlists(&self, playlist_ids: &[String]) -> Res<Vec<PlaylistRecord>> {
        let pb = self.progress(playlist_ids.len() as u64, "Fetching playlists");

        let mut playlists = Vec::with_capacity(playlist_ids.len());
        for playlist_id in playlist_ids {
            let playlist = self.api.playlist(playlist_id).await?;
            playlists.push(PlaylistRecord::from(playlist));
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(playlists)
    }

    /// Stage C: track metadata in batches of [`TRACKS_BATCH_LIMIT`].
    pub async fn tracks(&self, track_ids: &[String]) -> Res<Vec<TrackRecord>> {
        let pb = self.progress(
            track_ids.chunks(TRACKS_BATCH_LIMIT).len() as u64,
            "Fetching tracks",
        );

        let mut tracks = Vec::with_capacity(track_ids.len());
        for batch in track_ids.chunks(TRACKS_BATCH_LIMIT) {
            let response = self.api.tracks(batch).await?;
            tracks.extend(response.tracks.into_iter().flatten().map(TrackRecord::from));
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(tracks)
    }

    /// Stage D: audio features in batches of [`AUDIO_FEATURES_BATCH_LIMIT`].
    pub async fn audio_features(&self, track_ids: &[String]) -> Res<Vec<AudioFeatureRecord>> {
        let pb = self.progress(
            track_ids.chunks(AUDIO_FEATURES_BATCH_LIMIT).len() as u64,
            "Fetching audio features",
        );

        let mut features = Vec::with_capacity(track_ids.len());
        for batch in track_ids.chunks(AUDIO_FEATURES_BATCH_LIMIT) {
            let response = self.api.audio_features(batch).await?;
            features.extend(
                response
                    .audio_features
                    .into_iter()
                    .flatten()
                    .map(AudioFeatureRecord::from),
            );
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(features)
    }

    fn progress(&self, len: u64, message: &'static str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(style) =
            ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:30.blue}] {pos}/{len}")
        {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb
    }
}
