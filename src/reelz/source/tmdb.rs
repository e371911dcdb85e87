//! HTTP catalog source.
//!
//! Talks to a TMDB-compatible REST API:
//! - GET {base}/movie/popular
//! - GET {base}/search/movie?query=...
//!
//! Both answer `{ "results": [...] }` with records already shaped like `Movie`.
//!
//! Catalog records are looser than ours (nullable poster, missing dates), so they
//! go through `CatalogMovie` and get defaults instead of failing the whole page.

use super::MovieSource;
use crate::error::{ReelzError, Result};
use crate::model::{Movie, PLACEHOLDER_POSTER};
use async_trait::async_trait;
use reqwest::{header, Client, Url};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Deserialize)]
struct CatalogPage {
    #[serde(default)]
    results: Vec<CatalogMovie>,
}

#[derive(Debug, Deserialize)]
struct CatalogMovie {
    id: i64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    vote_average: Option<f64>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    overview: Option<String>,
}

impl From<CatalogMovie> for Movie {
    fn from(raw: CatalogMovie) -> Self {
        Movie {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            poster_path: raw
                .poster_path
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER_POSTER.to_string()),
            vote_average: raw.vote_average.unwrap_or(0.0).clamp(0.0, 10.0),
            release_date: raw.release_date.unwrap_or_default(),
            overview: raw.overview.unwrap_or_default(),
        }
    }
}

/// Decodes one page of catalog results.
fn parse_page(body: &str) -> Result<Vec<Movie>> {
    let page: CatalogPage = serde_json::from_str(body).map_err(ReelzError::Serialization)?;
    Ok(page.results.into_iter().map(Movie::from).collect())
}

pub struct TmdbSource {
    base_url: Url,
    api_key: Option<String>,
    http_client: Client,
}

impl TmdbSource {
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        // A trailing slash keeps `join` from dropping the last path segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| ReelzError::Config(format!("Invalid api-url {}: {}", base_url, e)))?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(ReelzError::Http)?;

        Ok(Self {
            base_url,
            api_key,
            http_client,
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ReelzError::Source(format!("Bad endpoint {}: {}", path, e)))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
            if let Some(key) = &self.api_key {
                pairs.append_pair("api_key", key);
            }
        }
        // An empty query string would leave a dangling '?'.
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }

    async fn get_page(&self, url: Url) -> Result<Vec<Movie>> {
        tracing::debug!(path = url.path(), "catalog request");

        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ReelzError::Source(format!(
                "Catalog returned status: {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        parse_page(&body)
    }
}

#[async_trait(?Send)]
impl MovieSource for TmdbSource {
    async fn fetch_popular(&self) -> Result<Vec<Movie>> {
        let url = self.endpoint("movie/popular", &[])?;
        self.get_page(url).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        let url = self.endpoint("search/movie", &[("query", query)])?;
        self.get_page(url).await
    }
}
