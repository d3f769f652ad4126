//! # Open Library Search Client
//!
//! Thin client for the Open Library `search.json` endpoint. Two query
//! shapes are used: title-filtered and author-filtered. The response
//! model keeps only the fields the bot formats; everything else in the
//! (large) Open Library documents is ignored.

use crate::errors::{error_logging, AppResult};
use serde::Deserialize;
use tracing::debug;

/// One result document from a catalog search
///
/// Every field is optional on the wire; missing title and authors are
/// rendered with sentinel strings at formatting time.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BookDoc {
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    /// Unique catalog key, e.g. "/works/OL45883W"
    pub key: Option<String>,
}

impl BookDoc {
    /// Human-facing "more info" link: catalog base URL plus the result key
    pub fn detail_link(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.key.as_deref().unwrap_or_default())
    }

    /// Display string for the author list, joined with ", "
    pub fn joined_authors(&self) -> Option<String> {
        self.author_name.as_ref().map(|names| names.join(", "))
    }
}

/// Response body of `GET {base}/search.json`
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    #[serde(default)]
    pub docs: Vec<BookDoc>,
}

impl SearchResponse {
    /// Whether the catalog reported at least one match
    pub fn has_results(&self) -> bool {
        self.num_found > 0
    }
}

/// Client for the external book-search service
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client against the given catalog base URL
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Base URL of the catalog, used for building detail links
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search the catalog by book title
    pub async fn search_by_title(&self, query: &str) -> AppResult<SearchResponse> {
        self.search("title", query).await
    }

    /// Search the catalog by author name
    pub async fn search_by_author(&self, query: &str) -> AppResult<SearchResponse> {
        self.search("author", query).await
    }

    /// Issue one `GET {base}/search.json?{field}={query}` call
    ///
    /// The query text goes into the parameter verbatim; URL encoding is
    /// left to the HTTP client.
    async fn search(&self, field: &'static str, query: &str) -> AppResult<SearchResponse> {
        let url = format!("{}/search.json", self.base_url);

        debug!(field = %field, query = %query, "Searching catalog");

        let response = self
            .http
            .get(&url)
            .query(&[(field, query)])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| {
                error_logging::log_network_error(&e, "catalog_search", Some(&url), None);
                e
            })?;

        let body: SearchResponse = response.json().await.map_err(|e| {
            error_logging::log_network_error(&e, "catalog_decode", Some(&url), None);
            e
        })?;

        debug!(
            field = %field,
            num_found = body.num_found,
            docs = body.docs.len(),
            "Catalog search completed"
        );

        Ok(body)
    }
}
