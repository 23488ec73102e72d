//! In-memory catalog used by unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use super::{
    CatalogClient, CatalogError, MoodItem, MoodSection, MoodTaxonomy, PlaylistGroup, RawPlaylist,
    SearchFilter, SearchResultItem, Thumbnail,
};

/// Canned catalog that records every call it receives
#[derive(Default)]
pub struct FakeCatalog {
    taxonomy: MoodTaxonomy,
    groups: HashMap<String, Vec<PlaylistGroup>>,
    search_results: Vec<SearchResultItem>,
    failure: Option<u16>,
    calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, name: &str, items: &[(&str, &str)]) -> Self {
        self.taxonomy.push(MoodSection {
            name: name.to_string(),
            items: items
                .iter()
                .map(|(title, params)| MoodItem {
                    title: (*title).to_string(),
                    params: (*params).to_string(),
                })
                .collect(),
        });
        self
    }

    pub fn with_groups(mut self, params: &str, groups: Vec<PlaylistGroup>) -> Self {
        self.groups.insert(params.to_string(), groups);
        self
    }

    pub fn with_search_results(mut self, results: Vec<SearchResultItem>) -> Self {
        self.search_results = results;
        self
    }

    /// Make every call fail with the given upstream HTTP status
    pub fn failing(mut self, status: u16) -> Self {
        self.failure = Some(status);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), CatalogError> {
        self.calls.lock().unwrap().push(call);
        match self.failure {
            Some(status) => Err(CatalogError::Status {
                endpoint: "browse",
                status,
            }),
            None => Ok(()),
        }
    }
}

impl CatalogClient for FakeCatalog {
    async fn mood_categories(&self) -> Result<MoodTaxonomy, CatalogError> {
        self.record("mood_categories".to_string())?;
        Ok(self.taxonomy.clone())
    }

    async fn mood_playlists(&self, params: &str) -> Result<Vec<PlaylistGroup>, CatalogError> {
        self.record(format!("mood_playlists:{params}"))?;
        Ok(self.groups.get(params).cloned().unwrap_or_default())
    }

    async fn search(
        &self,
        query: &str,
        filter: SearchFilter,
        limit: usize,
    ) -> Result<Vec<SearchResultItem>, CatalogError> {
        self.record(format!("search:{query}:{}:{limit}", filter.result_type()))?;
        Ok(self.search_results.clone())
    }
}

pub fn raw_playlist(id: &str, title: &str) -> RawPlaylist {
    RawPlaylist {
        playlist_id: Some(id.to_string()),
        title: Some(title.to_string()),
        description: None,
        thumbnails: vec![
            Thumbnail::new(format!("https://img.example/{id}/small.jpg")),
            Thumbnail::new(format!("https://img.example/{id}/large.jpg")),
        ],
    }
}

pub fn search_hit(result_type: &str, id: Option<&str>, title: &str) -> SearchResultItem {
    SearchResultItem {
        result_type: result_type.to_string(),
        playlist_id: id.map(ToString::to_string),
        title: Some(title.to_string()),
        description: Some(format!("{title} description")),
        thumbnails: Vec::new(),
    }
}
