//! YouTube Music catalog client
//!
//! Speaks the innertube JSON API used by the YouTube Music web client and
//! decodes its renderer trees into the normalized catalog records.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ORIGIN, REFERER};
use serde_json::{json, Value};

use super::{
    CatalogClient, CatalogError, MoodItem, MoodSection, MoodTaxonomy, PlaylistGroup, RawPlaylist,
    SearchFilter, SearchResultItem, Thumbnail,
};
use crate::config::CatalogConfig;
use crate::logger;

const MOODS_BROWSE_ID: &str = "FEmusic_moods_and_genres";
const MOOD_CATEGORY_BROWSE_ID: &str = "FEmusic_moods_and_genres_category";
const WEB_ORIGIN: &str = "https://music.youtube.com";

const BROWSE_SECTIONS: &str =
    "/contents/singleColumnBrowseResultsRenderer/tabs/0/tabRenderer/content/sectionListRenderer/contents";
const SEARCH_SECTIONS: &str =
    "/contents/tabbedSearchResultsRenderer/tabs/0/tabRenderer/content/sectionListRenderer/contents";

/// Innertube-backed catalog client
pub struct YtMusicClient {
    http: reqwest::Client,
    base_url: String,
    context: Value,
    retries: u32,
}

impl YtMusicClient {
    /// Build the client; no request is made until the first catalog call
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert(ORIGIN, HeaderValue::from_static(WEB_ORIGIN));
        headers.insert(REFERER, HeaderValue::from_static("https://music.youtube.com/"));

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|source| CatalogError::Transport {
                endpoint: "client setup",
                source,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            context: json!({
                "client": {
                    "clientName": "WEB_REMIX",
                    "clientVersion": config.client_version,
                    "hl": config.language,
                    "gl": config.region,
                },
                "user": {},
            }),
            retries: config.retries,
        })
    }

    /// POST to an innertube endpoint, retrying transient failures
    async fn post(&self, endpoint: &'static str, mut body: Value) -> Result<Value, CatalogError> {
        body["context"] = self.context.clone();
        let url = format!("{}/{endpoint}?prettyPrint=false", self.base_url);

        let mut attempt = 0;
        loop {
            match self.post_once(endpoint, &url, &body).await {
                Err(e) if e.is_transient() && attempt < self.retries => {
                    attempt += 1;
                    logger::log_upstream_retry(endpoint, attempt, &e);
                }
                result => return result,
            }
        }
    }

    async fn post_once(
        &self,
        endpoint: &'static str,
        url: &str,
        body: &Value,
    ) -> Result<Value, CatalogError> {
        let transport = |source| CatalogError::Transport { endpoint, source };

        let response = self.http.post(url).json(body).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }
        response.json::<Value>().await.map_err(transport)
    }
}

impl CatalogClient for YtMusicClient {
    async fn mood_categories(&self) -> Result<MoodTaxonomy, CatalogError> {
        let response = self
            .post("browse", json!({ "browseId": MOODS_BROWSE_ID }))
            .await?;
        parse_mood_categories(&response)
    }

    async fn mood_playlists(&self, params: &str) -> Result<Vec<PlaylistGroup>, CatalogError> {
        let response = self
            .post(
                "browse",
                json!({ "browseId": MOOD_CATEGORY_BROWSE_ID, "params": params }),
            )
            .await?;
        parse_mood_playlists(&response)
    }

    async fn search(
        &self,
        query: &str,
        filter: SearchFilter,
        limit: usize,
    ) -> Result<Vec<SearchResultItem>, CatalogError> {
        let response = self
            .post(
                "search",
                json!({ "query": query, "params": search_params(filter) }),
            )
            .await?;
        let results = parse_search_results(&response);
        logger::log_search_hits(results.len(), limit);
        Ok(results)
    }
}

/// Filter token the web client sends for a filtered search
const fn search_params(filter: SearchFilter) -> &'static str {
    match filter {
        SearchFilter::Playlists => "EgWKAQIoAWoMEA4QChADEAQQCRAF",
    }
}

fn text_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

/// Concatenate the `text` of every run in a runs array
fn joined_runs(runs: Option<&Value>) -> Option<String> {
    let text: String = runs?
        .as_array()?
        .iter()
        .filter_map(|run| run.get("text").and_then(Value::as_str))
        .collect();
    (!text.is_empty()).then_some(text)
}

fn parse_thumbnails(thumbnails: Option<&Value>) -> Vec<Thumbnail> {
    thumbnails
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|t| t.get("url").and_then(Value::as_str))
                .map(Thumbnail::new)
                .collect()
        })
        .unwrap_or_default()
}

/// Playlist browse ids carry a `VL` prefix the playlist id does not
fn playlist_id_from_browse_id(browse_id: &str) -> String {
    browse_id.strip_prefix("VL").unwrap_or(browse_id).to_string()
}

fn section_list<'a>(
    response: &'a Value,
    pointer: &str,
    endpoint: &'static str,
) -> Result<&'a Vec<Value>, CatalogError> {
    response
        .pointer(pointer)
        .and_then(Value::as_array)
        .ok_or_else(|| CatalogError::decode(endpoint, "missing section list"))
}

pub(crate) fn parse_mood_categories(response: &Value) -> Result<MoodTaxonomy, CatalogError> {
    let sections = section_list(response, BROWSE_SECTIONS, "browse")?;

    Ok(sections
        .iter()
        .filter_map(|section| section.get("gridRenderer"))
        .map(|grid| MoodSection {
            name: text_at(grid, "/header/gridHeaderRenderer/title/runs/0/text")
                .unwrap_or_default()
                .to_string(),
            items: grid
                .get("items")
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(parse_mood_item).collect())
                .unwrap_or_default(),
        })
        .collect())
}

fn parse_mood_item(item: &Value) -> Option<MoodItem> {
    let button = item.get("musicNavigationButtonRenderer")?;
    Some(MoodItem {
        title: text_at(button, "/buttonText/runs/0/text")?.to_string(),
        params: text_at(button, "/clickCommand/browseEndpoint/params")?.to_string(),
    })
}

pub(crate) fn parse_mood_playlists(response: &Value) -> Result<Vec<PlaylistGroup>, CatalogError> {
    let sections = section_list(response, BROWSE_SECTIONS, "browse")?;
    Ok(sections.iter().map(decode_group).collect())
}

/// Normalize one mood page section into a playlist group
fn decode_group(section: &Value) -> PlaylistGroup {
    if let Some(grid) = section.get("gridRenderer") {
        shelf(
            text_at(grid, "/header/gridHeaderRenderer/title/runs/0/text"),
            grid.get("items"),
        )
    } else if let Some(carousel) = section.get("musicCarouselShelfRenderer") {
        shelf(
            text_at(
                carousel,
                "/header/musicCarouselShelfBasicHeaderRenderer/title/runs/0/text",
            ),
            carousel.get("contents"),
        )
    } else if let Some(carousel) = section.get("musicImmersiveCarouselShelfRenderer") {
        shelf(
            text_at(
                carousel,
                "/header/musicImmersiveCarouselShelfBasicHeaderRenderer/title/runs/0/text",
            ),
            carousel.get("contents"),
        )
    } else if let Some(item) = section.get("musicTwoRowItemRenderer") {
        PlaylistGroup::Single(parse_two_row_item(item))
    } else {
        PlaylistGroup::Unrecognized
    }
}

fn shelf(title: Option<&str>, items: Option<&Value>) -> PlaylistGroup {
    PlaylistGroup::Shelf {
        title: title.map(ToString::to_string),
        playlists: items
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.get("musicTwoRowItemRenderer"))
                    .map(parse_two_row_item)
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn parse_two_row_item(item: &Value) -> RawPlaylist {
    let browse_id = text_at(item, "/title/runs/0/navigationEndpoint/browseEndpoint/browseId")
        .or_else(|| text_at(item, "/navigationEndpoint/browseEndpoint/browseId"));

    RawPlaylist {
        playlist_id: browse_id.map(playlist_id_from_browse_id),
        title: text_at(item, "/title/runs/0/text").map(ToString::to_string),
        description: joined_runs(item.pointer("/subtitle/runs")),
        thumbnails: parse_thumbnails(
            item.pointer("/thumbnailRenderer/musicThumbnailRenderer/thumbnail/thumbnails"),
        ),
    }
}

/// Decode search hits; a response without a result shelf has no hits
pub(crate) fn parse_search_results(response: &Value) -> Vec<SearchResultItem> {
    let Some(sections) = response.pointer(SEARCH_SECTIONS).and_then(Value::as_array) else {
        return Vec::new();
    };

    sections
        .iter()
        .filter_map(|section| section.pointer("/musicShelfRenderer/contents"))
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(|entry| entry.get("musicResponsiveListItemRenderer"))
        .map(parse_search_item)
        .collect()
}

fn parse_search_item(item: &Value) -> SearchResultItem {
    let column_runs = |n: usize| {
        item.pointer(&format!(
            "/flexColumns/{n}/musicResponsiveListItemFlexColumnRenderer/text/runs"
        ))
    };
    let browse = item.pointer("/navigationEndpoint/browseEndpoint");
    let page_type = browse.and_then(|b| {
        text_at(
            b,
            "/browseEndpointContextSupportedConfigs/browseEndpointContextMusicConfig/pageType",
        )
    });

    let result_type = match (browse, page_type) {
        (None, _) => "song",
        (Some(_), Some("MUSIC_PAGE_TYPE_PLAYLIST")) => "playlist",
        (Some(_), Some("MUSIC_PAGE_TYPE_ALBUM" | "MUSIC_PAGE_TYPE_AUDIOBOOK")) => "album",
        (Some(_), Some("MUSIC_PAGE_TYPE_ARTIST")) => "artist",
        (Some(_), Some("MUSIC_PAGE_TYPE_USER_CHANNEL")) => "profile",
        (Some(_), Some("MUSIC_PAGE_TYPE_PODCAST_SHOW_DETAIL_PAGE")) => "podcast",
        (Some(_), _) => "unknown",
    };

    let playlist_id = (result_type == "playlist")
        .then(|| browse.and_then(|b| text_at(b, "/browseId")))
        .flatten()
        .map(playlist_id_from_browse_id);

    SearchResultItem {
        result_type: result_type.to_string(),
        playlist_id,
        title: column_runs(0)
            .and_then(|runs| text_at(runs, "/0/text"))
            .map(ToString::to_string),
        description: joined_runs(column_runs(1)),
        thumbnails: parse_thumbnails(
            item.pointer("/thumbnail/musicThumbnailRenderer/thumbnail/thumbnails"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogHandle;
    use crate::config::Config;
    use crate::playlists::PlaylistService;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn browse_page(sections: Value) -> Value {
        json!({
            "contents": {
                "singleColumnBrowseResultsRenderer": {
                    "tabs": [{
                        "tabRenderer": {
                            "content": {
                                "sectionListRenderer": { "contents": sections }
                            }
                        }
                    }]
                }
            }
        })
    }

    fn nav_button(title: &str, params: &str) -> Value {
        json!({
            "musicNavigationButtonRenderer": {
                "buttonText": { "runs": [{ "text": title }] },
                "clickCommand": {
                    "browseEndpoint": {
                        "browseId": MOOD_CATEGORY_BROWSE_ID,
                        "params": params
                    }
                }
            }
        })
    }

    fn two_row_item(browse_id: &str, title: &str) -> Value {
        json!({
            "musicTwoRowItemRenderer": {
                "title": {
                    "runs": [{
                        "text": title,
                        "navigationEndpoint": { "browseEndpoint": { "browseId": browse_id } }
                    }]
                },
                "subtitle": { "runs": [{ "text": "YouTube Music" }, { "text": " • " }, { "text": "1M views" }] },
                "thumbnailRenderer": {
                    "musicThumbnailRenderer": {
                        "thumbnail": {
                            "thumbnails": [
                                { "url": "https://i.ytimg.com/small.jpg", "width": 226, "height": 226 },
                                { "url": "https://i.ytimg.com/large.jpg", "width": 544, "height": 544 }
                            ]
                        }
                    }
                }
            }
        })
    }

    fn grid(title: &str, items: Value) -> Value {
        json!({
            "gridRenderer": {
                "header": { "gridHeaderRenderer": { "title": { "runs": [{ "text": title }] } } },
                "items": items
            }
        })
    }

    #[test]
    fn test_parse_mood_categories() {
        let page = browse_page(json!([
            grid("Moods & moments", json!([nav_button("Chill", "p-chill"), nav_button("Workout", "p-workout")])),
            grid("Genres", json!([nav_button("Jazz", "p-jazz")])),
        ]));

        let taxonomy = parse_mood_categories(&page).unwrap();
        assert_eq!(taxonomy.len(), 2);
        assert_eq!(taxonomy[0].name, "Moods & moments");
        assert_eq!(
            taxonomy[0].items,
            vec![
                MoodItem { title: "Chill".to_string(), params: "p-chill".to_string() },
                MoodItem { title: "Workout".to_string(), params: "p-workout".to_string() },
            ]
        );
        assert_eq!(taxonomy[1].name, "Genres");
        assert_eq!(taxonomy[1].items[0].params, "p-jazz");
    }

    #[test]
    fn test_mood_items_without_params_are_skipped() {
        let page = browse_page(json!([grid(
            "Genres",
            json!([{ "musicNavigationButtonRenderer": { "buttonText": { "runs": [{ "text": "Broken" }] } } }])
        )]));
        let taxonomy = parse_mood_categories(&page).unwrap();
        assert!(taxonomy[0].items.is_empty());
    }

    #[test]
    fn test_missing_section_list_is_decode_error() {
        let err = parse_mood_categories(&json!({ "contents": {} })).unwrap_err();
        assert!(matches!(err, CatalogError::Decode { endpoint: "browse", .. }));
    }

    #[test]
    fn test_parse_mood_playlists_normalizes_groups() {
        let page = browse_page(json!([
            {
                "musicCarouselShelfRenderer": {
                    "header": {
                        "musicCarouselShelfBasicHeaderRenderer": { "title": { "runs": [{ "text": "Featured" }] } }
                    },
                    "contents": [two_row_item("VLPL001", "Beast Mode"), two_row_item("VLPL002", "Pump Up")]
                }
            },
            two_row_item("VLPL003", "Standalone"),
            { "messageRenderer": {} }
        ]));

        let groups = parse_mood_playlists(&page).unwrap();
        assert_eq!(groups.len(), 3);

        let PlaylistGroup::Shelf { title, playlists } = &groups[0] else {
            panic!("expected shelf, got {:?}", groups[0]);
        };
        assert_eq!(title.as_deref(), Some("Featured"));
        assert_eq!(playlists.len(), 2);
        assert_eq!(playlists[0].playlist_id.as_deref(), Some("PL001"));
        assert_eq!(playlists[0].title.as_deref(), Some("Beast Mode"));
        assert_eq!(playlists[0].description.as_deref(), Some("YouTube Music • 1M views"));
        assert_eq!(playlists[0].thumbnails.len(), 2);
        assert_eq!(playlists[0].thumbnails[1].url, "https://i.ytimg.com/large.jpg");

        let PlaylistGroup::Single(single) = &groups[1] else {
            panic!("expected single, got {:?}", groups[1]);
        };
        assert_eq!(single.playlist_id.as_deref(), Some("PL003"));
        assert_eq!(groups[2], PlaylistGroup::Unrecognized);
    }

    fn search_item(browse: Option<(&str, &str)>, title: &str, subtitle: &str) -> Value {
        let mut item = json!({
            "musicResponsiveListItemRenderer": {
                "flexColumns": [
                    { "musicResponsiveListItemFlexColumnRenderer": { "text": { "runs": [{ "text": title }] } } },
                    { "musicResponsiveListItemFlexColumnRenderer": { "text": { "runs": [{ "text": subtitle }] } } }
                ],
                "thumbnail": {
                    "musicThumbnailRenderer": {
                        "thumbnail": { "thumbnails": [{ "url": "https://i.ytimg.com/t.jpg", "width": 60, "height": 60 }] }
                    }
                }
            }
        });
        if let Some((browse_id, page_type)) = browse {
            item["musicResponsiveListItemRenderer"]["navigationEndpoint"] = json!({
                "browseEndpoint": {
                    "browseId": browse_id,
                    "browseEndpointContextSupportedConfigs": {
                        "browseEndpointContextMusicConfig": { "pageType": page_type }
                    }
                }
            });
        }
        item
    }

    fn search_page(items: Value) -> Value {
        json!({
            "contents": {
                "tabbedSearchResultsRenderer": {
                    "tabs": [{
                        "tabRenderer": {
                            "content": {
                                "sectionListRenderer": {
                                    "contents": [{ "musicShelfRenderer": { "contents": items } }]
                                }
                            }
                        }
                    }]
                }
            }
        })
    }

    #[test]
    fn test_parse_search_results() {
        let page = search_page(json!([
            search_item(Some(("VLPLjazz", "MUSIC_PAGE_TYPE_PLAYLIST")), "Jazz Classics", "Playlist • YouTube Music"),
            search_item(Some(("MPREb_album", "MUSIC_PAGE_TYPE_ALBUM")), "Kind of Blue", "Album • Miles Davis"),
            search_item(None, "So What", "Song • Miles Davis"),
        ]));

        let results = parse_search_results(&page);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].result_type, "playlist");
        assert_eq!(results[0].playlist_id.as_deref(), Some("PLjazz"));
        assert_eq!(results[0].title.as_deref(), Some("Jazz Classics"));
        assert_eq!(results[0].description.as_deref(), Some("Playlist • YouTube Music"));
        assert_eq!(results[0].thumbnails[0].url, "https://i.ytimg.com/t.jpg");
        assert_eq!(results[1].result_type, "album");
        assert_eq!(results[1].playlist_id, None);
        assert_eq!(results[2].result_type, "song");
    }

    #[test]
    fn test_search_without_results_shelf() {
        assert!(parse_search_results(&json!({ "contents": {} })).is_empty());
    }

    /// Local innertube stand-in; the n-th request gets the n-th canned reply,
    /// the last reply repeats
    struct CannedUpstream {
        base_url: String,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl CannedUpstream {
        async fn start(replies: Vec<(u16, String)>) -> Self {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let requests = Arc::new(Mutex::new(Vec::new()));
            let seen = Arc::clone(&requests);

            tokio::spawn(async move {
                while let Ok((mut stream, _)) = listener.accept().await {
                    let request = read_request(&mut stream).await;
                    let (status, body) = {
                        let mut seen = seen.lock().unwrap();
                        seen.push(request);
                        replies[(seen.len() - 1).min(replies.len() - 1)].clone()
                    };
                    let reply = format!(
                        "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = stream.write_all(reply.as_bytes()).await;
                    let _ = stream.shutdown().await;
                }
            });

            Self {
                base_url: format!("http://{addr}/youtubei/v1"),
                requests,
            }
        }

        fn client(&self) -> YtMusicClient {
            let config = Config::from_toml(&format!(
                "[catalog]\nbase_url = '{}'\nretries = 1\ntimeout = 5\n",
                self.base_url
            ))
            .unwrap();
            YtMusicClient::new(&config.catalog).unwrap()
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let body_len = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + body_len {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn test_search_filters_before_limit() {
        let page = search_page(json!([
            search_item(Some(("VLnull", "MUSIC_PAGE_TYPE_PLAYLIST")), "Placeholder", "Playlist"),
            search_item(Some(("MPREb_mix", "MUSIC_PAGE_TYPE_ALBUM")), "Mix Album", "Album"),
            search_item(Some(("VLPL1", "MUSIC_PAGE_TYPE_PLAYLIST")), "Mix One", "Playlist"),
            search_item(Some(("VLPL2", "MUSIC_PAGE_TYPE_PLAYLIST")), "Mix Two", "Playlist"),
        ]));
        let upstream = CannedUpstream::start(vec![(200, page.to_string())]).await;
        let service = PlaylistService::new(CatalogHandle::Ready(upstream.client()));

        let playlists = service.search_playlists("mix", 2).await.unwrap();
        let ids: Vec<&str> = playlists.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["PL1", "PL2"]);

        let requests = upstream.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].starts_with("POST /youtubei/v1/search?prettyPrint=false "));
        assert!(requests[0].contains(r#""query":"mix""#));
        assert!(requests[0].contains(search_params(SearchFilter::Playlists)));
        assert!(requests[0].contains("WEB_REMIX"));
        assert!(requests[0]
            .to_lowercase()
            .contains("origin: https://music.youtube.com"));
    }

    #[tokio::test]
    async fn test_server_error_retried_until_budget_spent() {
        let upstream = CannedUpstream::start(vec![(503, "{}".to_string())]).await;
        let err = upstream.client().mood_categories().await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Status {
                endpoint: "browse",
                status: 503
            }
        ));
        assert_eq!(upstream.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_throttled_request_recovers_on_retry() {
        let page = browse_page(json!([grid("Genres", json!([nav_button("Jazz", "p-jazz")]))]));
        let upstream = CannedUpstream::start(vec![
            (429, "{}".to_string()),
            (200, page.to_string()),
        ])
        .await;

        let taxonomy = upstream.client().mood_categories().await.unwrap();
        assert_eq!(taxonomy[0].items[0].params, "p-jazz");
        assert_eq!(upstream.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let upstream = CannedUpstream::start(vec![(404, "{}".to_string())]).await;
        let err = upstream.client().mood_playlists("p-gone").await.unwrap_err();

        assert!(matches!(err, CatalogError::Status { status: 404, .. }));
        assert_eq!(upstream.requests().len(), 1);
        assert!(requests_contain(&upstream, r#""params":"p-gone""#));
    }

    #[tokio::test]
    async fn test_invalid_json_is_transport_error() {
        let upstream = CannedUpstream::start(vec![(200, "<html>consent</html>".to_string())]).await;
        let err = upstream.client().mood_categories().await.unwrap_err();

        assert!(matches!(err, CatalogError::Transport { endpoint: "browse", .. }));
        assert!(!err.is_transient());
        assert_eq!(upstream.requests().len(), 1);
    }

    fn requests_contain(upstream: &CannedUpstream, needle: &str) -> bool {
        upstream.requests().iter().any(|r| r.contains(needle))
    }
}
