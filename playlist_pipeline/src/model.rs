/// Name used for playlists which do not carry one
pub static UNKNOWN_PLAYLIST_NAME: &str = "Unknown";

/// A raw playlist document as written by the ingest function.
/// Only the fields needed for the csv summary are read, everything else is ignored.
#[derive(serde::Deserialize, Debug, Default, PartialEq, Eq)]
pub struct PlaylistPage {
    #[serde(default)]
    pub items: Option<Vec<PlaylistItem>>,
}

#[derive(serde::Deserialize, Debug, Default, PartialEq, Eq)]
pub struct PlaylistItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tracks: Option<TrackSummary>,
}

#[derive(serde::Deserialize, Debug, Default, PartialEq, Eq)]
pub struct TrackSummary {
    #[serde(default)]
    pub total: Option<u64>,
}

/// One row of the csv artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    pub track_count: u64,
}

impl Playlist {
    /// Renders the playlist as `name,track_count`. The name is written as is.
    pub fn to_csv_row(&self) -> String {
        format!("{},{}", self.name, self.track_count)
    }
}

impl From<PlaylistItem> for Playlist {
    fn from(item: PlaylistItem) -> Self {
        Playlist {
            name: item
                .name
                .unwrap_or_else(|| UNKNOWN_PLAYLIST_NAME.to_string()),
            track_count: item.tracks.and_then(|t| t.total).unwrap_or(0),
        }
    }
}

impl PlaylistPage {
    /// The playlists of the page in document order
    pub fn into_playlists(self) -> impl Iterator<Item = Playlist> {
        self.items.unwrap_or_default().into_iter().map(Playlist::from)
    }
}
