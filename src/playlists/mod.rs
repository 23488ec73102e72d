//! Playlist module
//!
//! Reshapes upstream catalog records into the flat JSON shapes the
//! front-end consumes, and implements the three catalog operations.

mod moods;
mod service;
mod thumbnail;

pub use moods::{resolve_mood, select_mood_item, titles_match, MoodSelection, MOOD_TABLE};
pub use service::PlaylistService;
pub use thumbnail::best_thumbnail;

use serde::{Deserialize, Serialize};

use crate::catalog::{MoodItem, RawPlaylist, SearchResultItem, Thumbnail};

/// Link template for a playlist id
pub const PLAYLIST_URL_PREFIX: &str = "https://www.youtube.com/playlist?list=";

/// Mood entry returned by `action=moods`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCategory {
    pub title: String,
    /// Opaque token, passed through unmodified
    pub params: String,
}

impl From<&MoodItem> for MoodCategory {
    fn from(item: &MoodItem) -> Self {
        Self {
            title: item.title.clone(),
            params: item.params.clone(),
        }
    }
}

/// Playlist entry returned by `action=browse` and `action=search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub url: String,
}

impl PlaylistSummary {
    /// Build a summary, rejecting records without a usable id
    fn build(
        id: Option<String>,
        title: Option<String>,
        description: Option<String>,
        thumbnails: &[Thumbnail],
    ) -> Option<Self> {
        let id = id.filter(|id| is_valid_playlist_id(id))?;
        Some(Self {
            url: format!("{PLAYLIST_URL_PREFIX}{id}"),
            id,
            title: title.unwrap_or_else(|| "Unknown".to_string()),
            description: description.unwrap_or_default(),
            thumbnail: best_thumbnail(thumbnails),
        })
    }

    pub fn from_raw(playlist: RawPlaylist) -> Option<Self> {
        Self::build(
            playlist.playlist_id,
            playlist.title,
            playlist.description,
            &playlist.thumbnails,
        )
    }

    pub fn from_search_item(item: SearchResultItem) -> Option<Self> {
        Self::build(item.playlist_id, item.title, item.description, &item.thumbnails)
    }
}

/// Upstream placeholder ids (`None`, `null`) are not real playlists
pub fn is_valid_playlist_id(id: &str) -> bool {
    !id.is_empty() && !id.eq_ignore_ascii_case("none") && !id.eq_ignore_ascii_case("null")
}
