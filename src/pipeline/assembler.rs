use std::collections::{HashMap, HashSet};

use crate::{
    pipeline::Extraction,
    region::RegionLookup,
    types::{AssembledRecord, AudioFeatureRecord, FeaturedSample, PlaylistRecord, TrackRecord},
    utils,
};

/// Output of [`RecordAssembler::assemble`] plus what the inner joins dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembly {
    pub records: Vec<AssembledRecord>,
    /// Featured samples whose playlist was never resolved.
    pub dropped_samples: usize,
    /// Distinct referenced track IDs lacking track metadata or audio features.
    pub dropped_tracks: usize,
}

/// Folds the stage outputs into output rows.
///
/// All joins are inner joins. Samples without a playlist and tracks without
/// both metadata and audio features are left out of the result.
pub struct RecordAssembler<'a> {
    lookup: &'a RegionLookup,
}

impl<'a> RecordAssembler<'a> {
    pub fn new(lookup: &'a RegionLookup) -> Self {
        Self { lookup }
    }

    pub fn assemble(&self, extraction: &Extraction) -> Assembly {
        let mut playlists: HashMap<&str, &PlaylistRecord> = HashMap::new();
        for playlist in &extraction.playlists {
            playlists
                .entry(playlist.playlist_id.as_str())
                .or_insert(playlist);
        }

        let features: HashMap<&str, &AudioFeatureRecord> = extraction
            .audio_features
            .iter()
            .map(|a| (a.track_id.as_str(), a))
            .collect();

        let mut complete_tracks: HashMap<&str, (&TrackRecord, &AudioFeatureRecord)> =
            HashMap::new();
        for track in &extraction.tracks {
            if let Some(feature) = features.get(track.track_id.as_str()) {
                complete_tracks
                    .entry(track.track_id.as_str())
                    .or_insert((track, feature));
            }
        }

        let mut assembly = Assembly::default();
        let mut missing_tracks: HashSet<&str> = HashSet::new();

        for sample in &extraction.samples {
            let Some(playlist) = playlists.get(sample.playlist_id.as_str()) else {
                assembly.dropped_samples += 1;
                continue;
            };

            for track_id in &playlist.track_ids {
                match complete_tracks.get(track_id.as_str()) {
                    Some((track, feature)) => assembly
                        .records
                        .push(self.record(sample, playlist, track, feature)),
                    None => {
                        missing_tracks.insert(track_id.as_str());
                    }
                }
            }
        }

        assembly.dropped_tracks = missing_tracks.len();
        assembly
    }

    fn record(
        &self,
        sample: &FeaturedSample,
        playlist: &PlaylistRecord,
        track: &TrackRecord,
        feature: &AudioFeatureRecord,
    ) -> AssembledRecord {
        AssembledRecord {
            country: self.lookup.country_name(&sample.iso).map(str::to_string),
            featured: utils::parse_featured(&sample.featured),
            iso: sample.iso.clone(),
            playlist_followers_total: utils::saturating_i32(playlist.followers_total),
            playlist_id: playlist.playlist_id.clone(),
            playlist_name: playlist.name.clone(),
            playlist_tracks_total: utils::saturating_i32(playlist.tracks_total),
            region: self.lookup.region_name(&sample.iso).map(str::to_string),
            track_album_id: track.album_id.clone(),
            track_album_name: track.album_name.clone(),
            track_album_release: utils::parse_release_date(&track.album_release_date),
            track_album_type: track.album_type.clone(),
            track_artist_id: track.artist_id.clone(),
            track_artist_name: track.artist_name.clone(),
            track_audio_acousticness: feature.acousticness as f32,
            track_audio_danceability: feature.danceability as f32,
            track_audio_energy: feature.energy as f32,
            track_audio_instrumentalness: feature.instrumentalness as f32,
            track_audio_liveness: feature.liveness as f32,
            track_audio_loudness: feature.loudness as f32,
            track_audio_mode: feature.mode,
            track_audio_speechiness: feature.speechiness as f32,
            track_audio_tempo: feature.tempo as i32,
            track_audio_time_signature: feature.time_signature,
            track_audio_tonality: feature.tonality,
            track_audio_valence: feature.valence as f32,
            track_duration: utils::duration_seconds(track.duration_ms),
            track_explicit: track.explicit,
            track_id: track.track_id.clone(),
            track_name: track.name.clone(),
            track_popularity: utils::saturating_i32(track.popularity as u64),
        }
    }
}
