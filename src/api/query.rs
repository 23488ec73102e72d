//! Query parameter parsing for the playlist API

use std::num::IntErrorKind;

pub const DEFAULT_ACTION: &str = "moods";
pub const DEFAULT_MOOD: &str = "party";
pub const DEFAULT_LIMIT: usize = 10;
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 50;

/// Recognized query parameters with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiQuery {
    pub action: String,
    pub limit: usize,
    pub mood: String,
    /// Search keywords; `None` when missing or blank
    pub q: Option<String>,
}

impl Default for ApiQuery {
    fn default() -> Self {
        Self {
            action: DEFAULT_ACTION.to_string(),
            limit: DEFAULT_LIMIT,
            mood: DEFAULT_MOOD.to_string(),
            q: None,
        }
    }
}

impl ApiQuery {
    /// Parse a raw, percent-encoded query string
    pub fn from_query_string(query: Option<&str>) -> Self {
        let pairs = url::form_urlencoded::parse(query.unwrap_or_default().as_bytes());
        Self::from_pairs(pairs)
    }

    /// Build from decoded key/value pairs
    ///
    /// Blank values count as missing and the first occurrence of a key wins.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut action = None;
        let mut limit = None;
        let mut mood = None;
        let mut q = None;

        for (key, value) in pairs {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            let slot = match key.as_ref() {
                "action" => &mut action,
                "limit" => &mut limit,
                "mood" => &mut mood,
                "q" => &mut q,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.to_string());
            }
        }

        Self {
            action: action.unwrap_or_else(|| DEFAULT_ACTION.to_string()),
            limit: parse_limit(limit.as_deref()),
            mood: mood.unwrap_or_else(|| DEFAULT_MOOD.to_string()),
            q,
        }
    }
}

/// Effective result limit, clamped to `[1, 50]`
///
/// Missing or non-numeric input falls back to the default rather than failing.
pub fn parse_limit(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_LIMIT;
    };
    let limit = match raw.trim().parse::<i64>() {
        Ok(n) => n.clamp(MIN_LIMIT, MAX_LIMIT),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => MAX_LIMIT,
            IntErrorKind::NegOverflow => MIN_LIMIT,
            _ => return DEFAULT_LIMIT,
        },
    };
    usize::try_from(limit).unwrap_or(DEFAULT_LIMIT)
}
