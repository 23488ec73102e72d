//! Mood resolution
//!
//! Maps user-facing mood keywords onto the catalog's mood titles. Matching is
//! deliberately loose: titles drift between this table and the live service.

use crate::catalog::{MoodItem, MoodSection};

/// Keyword to catalog label table
pub const MOOD_TABLE: [(&str, &str); 10] = [
    ("workout", "Workout"),
    ("energize", "Energize"),
    ("party", "Party"),
    ("chill", "Chill"),
    ("focus", "Focus"),
    ("romance", "Romance"),
    ("sad", "Sad"),
    ("sleep", "Sleep"),
    ("kids", "Kids"),
    ("commute", "Commute"),
];

/// Resolve a keyword to its catalog label, or the keyword itself when unknown
pub fn resolve_mood(keyword: &str) -> String {
    let key = keyword.to_lowercase();
    MOOD_TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map_or_else(|| keyword.to_string(), |(_, label)| (*label).to_string())
}

/// Case-insensitive substring match in either direction
pub fn titles_match(title: &str, label: &str) -> bool {
    let title = title.to_lowercase();
    let label = label.to_lowercase();
    title.contains(&label) || label.contains(&title)
}

/// How a mood item was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodSelection<'a> {
    Matched(&'a MoodItem),
    /// No title matched; first item of the first non-empty section
    Fallback(&'a MoodItem),
}

impl<'a> MoodSelection<'a> {
    pub const fn item(self) -> &'a MoodItem {
        match self {
            Self::Matched(item) | Self::Fallback(item) => item,
        }
    }
}

/// Find the mood item for a resolved label
///
/// Returns `None` only when the taxonomy has no items at all.
pub fn select_mood_item<'a>(
    taxonomy: &'a [MoodSection],
    label: &str,
) -> Option<MoodSelection<'a>> {
    let mut items = taxonomy.iter().flat_map(|section| section.items.iter());

    items
        .clone()
        .find(|item| titles_match(&item.title, label))
        .map(MoodSelection::Matched)
        .or_else(|| items.next().map(MoodSelection::Fallback))
}
