//! Serverless function host
//!
//! Maps an API-gateway style event onto the playlist API and wraps the JSON
//! body in the gateway's response envelope.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::api::{self, ApiQuery};
use crate::catalog::CatalogClient;
use crate::config::{ApiConfig, LoggingConfig};
use crate::logger::{self, AccessLogEntry};
use crate::playlists::PlaylistService;

/// Incoming invocation; only the query parameters matter
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub http_method: Option<String>,
}

/// Gateway response envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// Answer one invocation; always 200, errors travel in the body
pub async fn handle_event<C: CatalogClient>(
    service: &PlaylistService<C>,
    api_config: &ApiConfig,
    logging: &LoggingConfig,
    event: FunctionEvent,
) -> FunctionResponse {
    let started = Instant::now();
    let params = event.query_string_parameters.unwrap_or_default();
    let raw_query = encode_query(&params);
    let query = ApiQuery::from_pairs(&params);

    let body = api::handle_query(service, &query, Some(raw_query.as_str())).await;
    let headers = api::api_headers(Some(&api_config.cache_control))
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

    if logging.access_log {
        let path = event.path.unwrap_or_else(|| api_config.path.clone());
        let method = event.http_method.unwrap_or_else(|| "GET".to_string());
        let mut entry = AccessLogEntry::new("-".to_string(), method, path);
        entry.query = (!raw_query.is_empty()).then_some(raw_query);
        entry.body_bytes = body.len();
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &logging.access_log_format);
    }

    FunctionResponse {
        status_code: 200,
        headers,
        body,
    }
}

/// Stable query string for logs; keys are sorted since the event map is unordered
fn encode_query(params: &HashMap<String, String>) -> String {
    let sorted: BTreeMap<&String, &String> = params.iter().collect();
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(sorted)
        .finish()
}
