//! List-query parsing.
//!
//! Dashboard list pages pass their query string through to the backend and
//! register cache tags derived from it. Only the two parameters the tag
//! vocabulary cares about are extracted; everything else is forwarded
//! untouched.

/// The pagination/search parameters of a list read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number as a string; defaults to "1".
    pub page: String,
    /// Search term; defaults to "all" (the unfiltered list).
    pub search_term: String,
}

impl ListQuery {
    /// Parse `page` and `searchTerm` out of a raw query string.
    ///
    /// Accepts the string with or without a leading '?'. Missing or empty
    /// parameters fall back to the defaults.
    pub fn parse(query_string: &str) -> Self {
        let mut page = None;
        let mut search_term = None;

        for pair in query_string.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            match key {
                "page" => page = Some(value.to_string()),
                "searchTerm" => search_term = Some(value.to_string()),
                _ => {}
            }
        }

        Self {
            page: page.unwrap_or_else(|| "1".to_string()),
            search_term: search_term.unwrap_or_else(|| "all".to_string()),
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::parse("")
    }
}
