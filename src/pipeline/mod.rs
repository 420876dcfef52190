//! Fetch, join and normalize featured playlist data for one unit of work.
//!
//! A unit of work is a list of countries and a date. [`Extractor`] collects
//! the four partial result sets, [`RecordAssembler`] folds them into
//! [`AssembledRecord`] rows. A fatal error at any stage aborts the whole unit
//! and no rows are returned.

mod assembler;
mod extractor;

use std::sync::Arc;

use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;

pub use assembler::{Assembly, RecordAssembler};
pub use extractor::{Extraction, Extractor};

use crate::{
    config::Settings,
    error::Res,
    info,
    region::RegionLookup,
    spotify::{AuthClient, RateLimitedRequester, RetryPolicy, SpotifyApi, Transport},
    types::AssembledRecord,
};

pub struct Pipeline {
    extractor: Extractor,
    lookup: Arc<RegionLookup>,
}

impl Pipeline {
    pub fn new(extractor: Extractor, lookup: Arc<RegionLookup>) -> Self {
        Self { extractor, lookup }
    }

    /// Wires auth client, requester and API wrapper for the settings' region.
    pub fn from_settings(
        settings: &Settings,
        transport: Arc<dyn Transport>,
        lookup: Arc<RegionLookup>,
        cancel: CancellationToken,
    ) -> Self {
        let auth = Arc::new(AuthClient::new(
            settings.credentials.clone(),
            settings.token_url.clone(),
            Arc::clone(&transport),
            cancel.clone(),
        ));
        let requester = Arc::new(RateLimitedRequester::new(
            auth,
            transport,
            RetryPolicy::default(),
            cancel,
        ));
        let api = SpotifyApi::new(requester, settings.api_url.clone());

        Self::new(Extractor::new(api), lookup)
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.extractor = self.extractor.with_progress(show_progress);
        self
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub fn lookup(&self) -> &RegionLookup {
        &self.lookup
    }

    /// Runs all stages and returns the joined rows together with join-miss
    /// counts.
    pub async fn run(&self, countries: &[String], date: NaiveDate) -> Res<Assembly> {
        let extraction = self.extractor.extract(countries, date).await?;
        info!(
            "Fetched {} featured samples, {} playlists, {} tracks, {} audio features",
            extraction.samples.len(),
            extraction.playlists.len(),
            extraction.tracks.len(),
            extraction.audio_features.len()
        );

        let assembly = RecordAssembler::new(&self.lookup).assemble(&extraction);
        if assembly.dropped_samples > 0 || assembly.dropped_tracks > 0 {
            info!(
                "Dropped {} featured samples without playlist data and {} tracks without complete track data",
                assembly.dropped_samples,
                assembly.dropped_tracks
            );
        }

        Ok(assembly)
    }

    /// Same as [`Pipeline::run`] but returns the rows only.
    pub async fn records(&self, countries: &[String], date: NaiveDate) -> Res<Vec<AssembledRecord>> {
        Ok(self.run(countries, date).await?.records)
    }
}
