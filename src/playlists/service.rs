//! Playlist service module
//!
//! The three catalog operations behind the playlist API

use super::{resolve_mood, select_mood_item, MoodCategory, MoodSelection, PlaylistSummary};
use crate::catalog::{CatalogClient, CatalogError, CatalogHandle, PlaylistGroup, SearchFilter};
use crate::logger;

/// Catalog operations over an injected client handle
pub struct PlaylistService<C> {
    catalog: CatalogHandle<C>,
}

impl<C: CatalogClient> PlaylistService<C> {
    pub const fn new(catalog: CatalogHandle<C>) -> Self {
        Self { catalog }
    }

    pub const fn catalog(&self) -> &CatalogHandle<C> {
        &self.catalog
    }

    /// Every mood item of every section, in service order
    pub async fn list_moods(&self) -> Result<Vec<MoodCategory>, CatalogError> {
        let taxonomy = self.catalog.client()?.mood_categories().await?;
        Ok(taxonomy
            .iter()
            .flat_map(|section| section.items.iter())
            .map(MoodCategory::from)
            .collect())
    }

    /// Playlists for a mood keyword, at most `limit` of them
    ///
    /// An unmatched keyword falls back to the first available mood rather
    /// than failing; an empty taxonomy yields an empty list.
    pub async fn browse_mood(
        &self,
        mood: &str,
        limit: usize,
    ) -> Result<Vec<PlaylistSummary>, CatalogError> {
        let client = self.catalog.client()?;
        let taxonomy = client.mood_categories().await?;
        let label = resolve_mood(mood);

        let names: Vec<&str> = taxonomy.iter().map(|s| s.name.as_str()).collect();
        logger::log_mood_lookup(&label, &names);

        let Some(selection) = select_mood_item(&taxonomy, &label) else {
            logger::log_playlists_returned(0);
            return Ok(Vec::new());
        };
        match selection {
            MoodSelection::Matched(item) => logger::log_mood_match(&item.title, &item.params),
            MoodSelection::Fallback(item) => logger::log_mood_fallback(&item.title),
        }

        let groups = client.mood_playlists(&selection.item().params).await?;
        logger::log_playlist_groups(groups.len());

        let playlists: Vec<PlaylistSummary> = groups
            .into_iter()
            .flat_map(PlaylistGroup::into_playlists)
            .filter_map(PlaylistSummary::from_raw)
            .take(limit)
            .collect();
        logger::log_playlists_returned(playlists.len());
        Ok(playlists)
    }

    /// Keyword search over playlists, at most `limit` of them
    pub async fn search_playlists(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<PlaylistSummary>, CatalogError> {
        let results = self
            .catalog
            .client()?
            .search(query, SearchFilter::Playlists, limit)
            .await?;

        Ok(results
            .into_iter()
            .filter(|item| item.result_type == SearchFilter::Playlists.result_type())
            .filter_map(PlaylistSummary::from_search_item)
            .take(limit)
            .collect())
    }
}
