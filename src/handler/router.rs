//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method validation,
//! route matching, dispatching and the access log line.

use crate::api::{self, ApiQuery};
use crate::catalog::CatalogClient;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for static file serving
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B, C: CatalogClient>(
    req: Request<B>,
    state: Arc<AppState<C>>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let response = route_request(&req, &state).await;

    let path = req.uri().path();
    if state.should_log_access(path) {
        let mut entry =
            AccessLogEntry::new(remote_addr.to_string(), req.method().to_string(), path.to_string());
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .map_or(0, |n| usize::try_from(n).unwrap_or(usize::MAX));
        entry.referer = header_value(&req, "referer");
        entry.user_agent = header_value(&req, "user-agent");
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on path and method
async fn route_request<B, C: CatalogClient>(
    req: &Request<B>,
    state: &AppState<C>,
) -> Response<Full<Bytes>> {
    let method = req.method();
    let path = req.uri().path();

    if path.starts_with(state.config.api.path.as_str()) {
        return match method {
            &Method::GET => serve_api(req.uri().query(), state).await,
            &Method::OPTIONS => http::build_options_response(),
            _ => method_not_allowed(method, "GET, OPTIONS"),
        };
    }

    match method {
        &Method::GET | &Method::HEAD => {
            let ctx = RequestContext {
                path,
                is_head: method == Method::HEAD,
                if_none_match: header_value(req, "if-none-match"),
            };
            static_files::serve_directory(
                &ctx,
                &state.config.static_files.root,
                &state.config.static_files.index_files,
            )
            .await
        }
        _ => method_not_allowed(method, "GET, HEAD"),
    }
}

async fn serve_api<C: CatalogClient>(
    raw_query: Option<&str>,
    state: &AppState<C>,
) -> Response<Full<Bytes>> {
    let query = ApiQuery::from_query_string(raw_query);
    let body = api::handle_query(&state.service, &query, raw_query).await;
    http::build_api_response(body)
}

fn method_not_allowed(method: &Method, allow: &str) -> Response<Full<Bytes>> {
    logger::log_warning(&format!("Method not allowed: {method}"));
    http::build_405_response(allow)
}

fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}
