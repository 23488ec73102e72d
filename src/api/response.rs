//! API response utility functions module

use super::ApiResult;
use crate::logger;

/// Serialize an API result to its JSON body
pub fn render_body(result: &ApiResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to serialize response: {e}"));
        r#"{"error":"Internal server error"}"#.to_string()
    })
}

/// Headers every API response carries, plus an optional `Cache-Control`
pub fn api_headers(cache_control: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![
        ("Content-Type", "application/json".to_string()),
        ("Access-Control-Allow-Origin", "*".to_string()),
    ];
    if let Some(value) = cache_control {
        headers.push(("Cache-Control", value.to_string()));
    }
    headers
}
