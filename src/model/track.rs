//! Track data decoded from catalog search results

use std::fmt;

use reqwest::Url;
use serde::Deserialize;
use uuid::Uuid;

use super::duration::format_millis;

/// Client-side identity of a decoded track.
///
/// Generated on every decode, so two fetches of the same song yield different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrackId(Uuid);

impl TrackId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A song from the search results
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub track_name: String,
    pub artwork_url: String,
    pub duration_millis: u64,
    pub collection_name: Option<String>,
    pub artist_name: Option<String>,
}

impl Track {
    /// Parsed artwork location, `None` when the catalog sent something unusable.
    pub fn artwork(&self) -> Option<Url> {
        Url::parse(&self.artwork_url)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
    }

    pub fn duration_label(&self) -> String {
        format_millis(self.duration_millis)
    }
}

/// One entry of the `results` array as sent by the catalog
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireTrack {
    track_name: String,
    #[serde(rename = "artworkUrl100")]
    artwork_url: String,
    #[serde(rename = "trackTimeMillis")]
    duration_millis: u64,
    collection_name: Option<String>,
    artist_name: Option<String>,
}

impl From<WireTrack> for Track {
    fn from(wire: WireTrack) -> Self {
        Self {
            id: TrackId::generate(),
            track_name: wire.track_name,
            artwork_url: wire.artwork_url,
            duration_millis: wire.duration_millis,
            collection_name: wire.collection_name,
            artist_name: wire.artist_name,
        }
    }
}

/// Response envelope; lives only for the duration of one decode
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub(crate) results: Vec<WireTrack>,
}

impl SearchResponse {
    pub(crate) fn into_tracks(self) -> Vec<Track> {
        self.results.into_iter().map(Track::from).collect()
    }
}

#[cfg(test)]
pub(crate) fn sample_track(name: &str, duration_millis: u64) -> Track {
    Track {
        id: TrackId::generate(),
        track_name: name.to_string(),
        artwork_url: format!("https://example.com/{name}/100x100bb.jpg"),
        duration_millis,
        collection_name: Some("Believe".to_string()),
        artist_name: Some("Justin Bieber".to_string()),
    }
}
