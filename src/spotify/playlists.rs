use crate::{
    error::Res,
    spotify::SpotifyApi,
    types::{FeaturedPlaylistsResponse, PlaylistResponse},
};

/// Page size requested from the featured playlists endpoint.
pub const FEATURED_PAGE_LIMIT: u32 = 50;

impl SpotifyApi {
    /// Featured playlists of `country` as they were at `timestamp`
    /// (`YYYY-MM-DDTHH:MM:SS`, local time of the market).
    pub async fn featured_playlists(
        &self,
        country: &str,
        timestamp: &str,
    ) -> Res<FeaturedPlaylistsResponse> {
        let url = format!(
            "{uri}/browse/featured-playlists?country={country}&timestamp={timestamp}&limit={limit}",
            uri = self.api_url,
            country = country,
            timestamp = timestamp,
            limit = FEATURED_PAGE_LIMIT
        );
        self.fetch_json(&url).await
    }

    /// A single playlist. The provider has no batch variant of this endpoint.
    pub async fn playlist(&self, playlist_id: &str) -> Res<PlaylistResponse> {
        let url = format!(
            "{uri}/playlists/{id}",
            uri = self.api_url,
            id = playlist_id
        );
        self.fetch_json(&url).await
    }
}
