//! # Data Source
//!
//! [`MovieSource`] is the boundary for obtaining movie listings. It has exactly two
//! operations, both asynchronous since a real implementation waits on the network:
//!
//! - `fetch_popular`: one page of the catalog's popular feed, no parameters.
//! - `search`: records matching a non-empty query.
//!
//! Callers validate queries before calling `search`; implementations may assume the
//! query is trimmed and non-empty.
//!
//! ## Implementations
//!
//! - [`fixtures::FixtureSource`]: static data, no I/O. The default source.
//! - [`tmdb::TmdbSource`]: HTTP JSON catalog (TMDB-compatible endpoints).

use crate::config::{ReelzConfig, SourceKind};
use crate::error::Result;
use crate::model::Movie;
use async_trait::async_trait;

pub mod fixtures;
pub mod tmdb;

#[async_trait(?Send)]
pub trait MovieSource {
    /// Popular movies, one page.
    async fn fetch_popular(&self) -> Result<Vec<Movie>>;

    /// Movies matching `query`.
    async fn search(&self, query: &str) -> Result<Vec<Movie>>;
}

#[async_trait(?Send)]
impl<T: MovieSource + ?Sized> MovieSource for Box<T> {
    async fn fetch_popular(&self) -> Result<Vec<Movie>> {
        (**self).fetch_popular().await
    }

    async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        (**self).search(query).await
    }
}

/// Builds the source selected by the configuration.
pub fn from_config(config: &ReelzConfig) -> Result<Box<dyn MovieSource>> {
    match config.source {
        SourceKind::Fixtures => Ok(Box::new(fixtures::FixtureSource::new())),
        SourceKind::Tmdb => {
            let source = tmdb::TmdbSource::new(&config.api_url, config.api_key())?;
            Ok(Box::new(source))
        }
    }
}
