//! Upstream catalog module
//!
//! Defines the seam between the playlist service and the music catalog
//! backend: the `CatalogClient` trait, the normalized records every client
//! produces, and the error channel for upstream failures.

mod error;
#[cfg(test)]
pub(crate) mod testing;
pub mod ytmusic;

pub use error::CatalogError;
pub use ytmusic::YtMusicClient;

use std::fmt::Display;
use std::future::Future;

/// Thumbnail descriptor; services list these in ascending resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
}

impl Thumbnail {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// One browsable mood/genre entry and its opaque params token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodItem {
    pub title: String,
    pub params: String,
}

/// Named category of mood items, e.g. "Moods & moments" or "Genres"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodSection {
    pub name: String,
    pub items: Vec<MoodItem>,
}

/// Mood taxonomy in the service's enumeration order
pub type MoodTaxonomy = Vec<MoodSection>;

/// Playlist record as the upstream describes it, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPlaylist {
    pub playlist_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Vec<Thumbnail>,
}

/// One entry of a mood page
///
/// Mood pages mix shelves of playlists with sections that are a single
/// playlist; both normalize into this type at the client boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistGroup {
    Shelf {
        title: Option<String>,
        playlists: Vec<RawPlaylist>,
    },
    Single(RawPlaylist),
    Unrecognized,
}

impl PlaylistGroup {
    /// Flatten the group into its playlist records
    pub fn into_playlists(self) -> Vec<RawPlaylist> {
        match self {
            Self::Shelf { playlists, .. } => playlists,
            Self::Single(playlist) => vec![playlist],
            Self::Unrecognized => Vec::new(),
        }
    }
}

/// One keyword search hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    /// Result kind such as `playlist`, `album`, `artist` or `song`
    pub result_type: String,
    pub playlist_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Vec<Thumbnail>,
}

/// Result kind a search is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFilter {
    Playlists,
}

impl SearchFilter {
    /// Singular result type reported for items of this kind
    pub const fn result_type(self) -> &'static str {
        match self {
            Self::Playlists => "playlist",
        }
    }
}

/// Catalog browsing backend
///
/// Every call may reach the network and may fail; failures are reported as
/// `CatalogError` and never panic.
pub trait CatalogClient {
    /// Mood/genre taxonomy, sections in service order
    fn mood_categories(&self) -> impl Future<Output = Result<MoodTaxonomy, CatalogError>> + Send;

    /// Playlist groups behind a mood's opaque params token
    fn mood_playlists(
        &self,
        params: &str,
    ) -> impl Future<Output = Result<Vec<PlaylistGroup>, CatalogError>> + Send;

    /// Keyword search restricted to one result kind
    ///
    /// `limit` is a hint; callers filter the hits and truncate themselves.
    fn search(
        &self,
        query: &str,
        filter: SearchFilter,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<SearchResultItem>, CatalogError>> + Send;
}

/// Process-owned handle to the catalog client
///
/// Built once by the entry point. A failed construction is kept so every
/// request can report why the catalog is unreachable.
#[derive(Debug)]
pub enum CatalogHandle<C> {
    Ready(C),
    Unavailable(String),
}

impl<C> CatalogHandle<C> {
    pub fn from_result<E: Display>(result: Result<C, E>) -> Self {
        match result {
            Ok(client) => Self::Ready(client),
            Err(e) => Self::Unavailable(e.to_string()),
        }
    }

    pub fn client(&self) -> Result<&C, CatalogError> {
        match self {
            Self::Ready(client) => Ok(client),
            Self::Unavailable(reason) => Err(CatalogError::Unavailable(reason.clone())),
        }
    }

    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
