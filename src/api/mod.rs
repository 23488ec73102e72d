//! Playlist API module
//!
//! Turns query parameters into one catalog operation and a uniform JSON result

mod query;
mod response;

pub use query::{parse_limit, ApiQuery, DEFAULT_LIMIT};
pub use response::{api_headers, render_body};

use serde::Serialize;

use crate::catalog::{CatalogClient, CatalogError};
use crate::logger;
use crate::playlists::{MoodCategory, PlaylistService, PlaylistSummary};

pub const MISSING_QUERY_MESSAGE: &str = "Missing 'q' parameter for search";

/// Operation outcome as it appears under its result key
///
/// Failures stay in-band: `{"moods": {"error": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Items(Vec<T>),
    Failed { error: String },
}

impl<T> Listing<T> {
    fn from_result(operation: &str, result: Result<Vec<T>, CatalogError>) -> Self {
        match result {
            Ok(items) => Self::Items(items),
            Err(e) => {
                logger::log_upstream_failure(operation, &e);
                Self::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Response payload; exactly one key is ever present
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiResult {
    Moods(Listing<MoodCategory>),
    Playlists(Listing<PlaylistSummary>),
    Error(String),
}

/// Dispatch a parsed query to the playlist service
pub async fn dispatch<C: CatalogClient>(
    service: &PlaylistService<C>,
    query: &ApiQuery,
) -> ApiResult {
    match query.action.as_str() {
        "moods" => ApiResult::Moods(Listing::from_result(
            "list_moods",
            service.list_moods().await,
        )),
        "browse" => ApiResult::Playlists(Listing::from_result(
            "browse_mood",
            service.browse_mood(&query.mood, query.limit).await,
        )),
        "search" => match query.q.as_deref() {
            Some(q) => ApiResult::Playlists(Listing::from_result(
                "search_playlists",
                service.search_playlists(q, query.limit).await,
            )),
            None => ApiResult::Error(MISSING_QUERY_MESSAGE.to_string()),
        },
        other => ApiResult::Error(format!("Unknown action: {other}")),
    }
}

/// Parse, dispatch and serialize one API request
pub async fn handle_query<C: CatalogClient>(
    service: &PlaylistService<C>,
    query: &ApiQuery,
    raw_query: Option<&str>,
) -> String {
    logger::log_api_request(&query.action, raw_query);
    render_body(&dispatch(service, query).await)
}
