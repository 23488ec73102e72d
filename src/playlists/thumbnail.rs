use crate::catalog::Thumbnail;

/// Pick the highest resolution thumbnail URL
///
/// The catalog lists thumbnails in ascending resolution, so this is the last
/// entry. A descending list would yield the smallest one.
pub fn best_thumbnail(thumbnails: &[Thumbnail]) -> Option<String> {
    thumbnails.last().map(|t| t.url.clone())
}
