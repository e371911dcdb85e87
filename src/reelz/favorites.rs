//! # Favorites
//!
//! The favorites collection is an ordered list of [`Movie`]s with set semantics on `id`:
//! insertion order is preserved and no id appears twice.
//!
//! Collection operations ([`toggle`], [`contains`]) are pure: they never touch storage
//! and never mutate their input. Persistence goes through [`FavoritesStore`], which
//! reads and writes the whole collection as one JSON array under a single key.
//!
//! ## Failure Handling
//!
//! `load` fails soft. A missing key, an unreadable store, non-JSON text or JSON of the
//! wrong shape all produce an empty collection (with a warning in the log). `save`
//! returns its error; callers decide whether that matters.

use crate::error::{ReelzError, Result};
use crate::model::Movie;
use crate::store::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Storage key used when none is configured.
pub const DEFAULT_FAVORITES_KEY: &str = "movieFavorites";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(Vec<Movie>);

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.0.iter()
    }

    pub fn get(&self, id: i64) -> Option<&Movie> {
        self.0.iter().find(|m| m.id == id)
    }

    /// Keeps the first record for every id.
    fn dedup(movies: Vec<Movie>) -> Self {
        let mut seen = HashSet::new();
        Self(movies.into_iter().filter(|m| seen.insert(m.id)).collect())
    }
}

impl FromIterator<Movie> for Favorites {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        Self::dedup(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Favorites {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Removes `movie` if its id is present, otherwise appends it.
pub fn toggle(favorites: &Favorites, movie: Movie) -> Favorites {
    if contains(favorites, movie.id) {
        Favorites(
            favorites
                .iter()
                .filter(|fav| fav.id != movie.id)
                .cloned()
                .collect(),
        )
    } else {
        let mut next = favorites.0.clone();
        next.push(movie);
        Favorites(next)
    }
}

pub fn contains(favorites: &Favorites, id: i64) -> bool {
    favorites.iter().any(|fav| fav.id == id)
}

/// Reads and writes the favorites collection through a [`KeyValueStore`].
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_FAVORITES_KEY)
    }

    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load(&self) -> Favorites {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Favorites::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "could not read favorites");
                return Favorites::new();
            }
        };

        match serde_json::from_str::<Vec<Movie>>(&raw) {
            Ok(movies) => Favorites::dedup(movies),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "ignoring malformed favorites");
                Favorites::new()
            }
        }
    }

    pub fn save(&self, favorites: &Favorites) -> Result<()> {
        let content = serde_json::to_string(favorites).map_err(ReelzError::Serialization)?;
        self.store.set(&self.key, &content)?;
        tracing::debug!(key = %self.key, count = favorites.len(), "saved favorites");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_movie;
    use crate::store::memory::MemStore;

    fn collection(ids: &[i64]) -> Favorites {
        ids.iter()
            .map(|id| sample_movie(*id, &format!("Movie {}", id)))
            .collect()
    }

    fn ids(favorites: &Favorites) -> Vec<i64> {
        favorites.iter().map(|m| m.id).collect()
    }

    #[test]
    fn toggle_appends_missing_movie() {
        let favs = collection(&[1, 2]);
        let next = toggle(&favs, sample_movie(3, "Three"));
        assert_eq!(ids(&next), vec![1, 2, 3]);
        // input untouched
        assert_eq!(ids(&favs), vec![1, 2]);
    }

    #[test]
    fn toggle_removes_present_id_even_with_different_fields() {
        let favs = collection(&[1, 2, 3]);
        let next = toggle(&favs, sample_movie(2, "Renamed"));
        assert_eq!(ids(&next), vec![1, 3]);
    }

    #[test]
    fn toggle_twice_is_identity() {
        let favs = collection(&[4, 5]);
        let movie = sample_movie(9, "Nine");
        let back = toggle(&toggle(&favs, movie.clone()), movie);
        assert_eq!(back, favs);
    }

    #[test]
    fn toggles_never_produce_duplicate_ids() {
        let mut favs = Favorites::new();
        for id in [1, 2, 1, 3, 3, 3, 2, 4, 1] {
            favs = toggle(&favs, sample_movie(id, "x"));
            let unique: HashSet<i64> = favs.iter().map(|m| m.id).collect();
            assert_eq!(unique.len(), favs.len());
        }
        assert_eq!(ids(&favs), vec![3, 4, 1]);
    }

    #[test]
    fn contains_checks_ids() {
        let favs = collection(&[1, 7]);
        assert!(contains(&favs, 7));
        assert!(!contains(&favs, 2));
        assert!(!contains(&Favorites::new(), 1));
    }

    #[test]
    fn from_iter_drops_duplicates_keeping_first() {
        let favs: Favorites = vec![
            sample_movie(1, "first"),
            sample_movie(2, "two"),
            sample_movie(1, "second"),
        ]
        .into_iter()
        .collect();
        assert_eq!(ids(&favs), vec![1, 2]);
        assert_eq!(favs.get(1).unwrap().title, "first");
    }

    #[test]
    fn load_missing_key_is_empty() {
        let store = FavoritesStore::new(MemStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_non_json_is_empty() {
        let store = FavoritesStore::new(MemStore::with_value(DEFAULT_FAVORITES_KEY, "{not json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_wrong_shape_is_empty() {
        for raw in [
            r#"{"id": 1}"#,
            r#"[{"id": "one", "title": "x"}]"#,
            r#"[{"id": 1}]"#,
            "null",
            "42",
        ] {
            let store = FavoritesStore::new(MemStore::with_value(DEFAULT_FAVORITES_KEY, raw));
            assert!(store.load().is_empty(), "expected empty for {}", raw);
        }
    }

    #[test]
    fn save_then_load_preserves_order() {
        let mem = MemStore::new();
        let store = FavoritesStore::new(mem);
        let favs = collection(&[5, 1, 3]);
        store.save(&favs).unwrap();
        assert_eq!(store.load(), favs);
    }

    #[test]
    fn save_of_load_leaves_storage_unchanged() {
        let raw = serde_json::to_string(&collection(&[2, 1])).unwrap();
        let mem = MemStore::with_value(DEFAULT_FAVORITES_KEY, &raw);
        let store = FavoritesStore::new(mem.clone());
        store.save(&store.load()).unwrap();
        assert_eq!(mem.get(DEFAULT_FAVORITES_KEY).unwrap(), Some(raw));
    }

    #[test]
    fn saved_value_is_a_json_array_of_records() {
        let mem = MemStore::new();
        let store = FavoritesStore::new(mem.clone());
        store.save(&collection(&[1])).unwrap();
        let raw = mem.get(DEFAULT_FAVORITES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["release_date"], "2001-02-03");
    }

    #[test]
    fn custom_key_is_used() {
        let mem = MemStore::new();
        let store = FavoritesStore::with_key(mem.clone(), "bookmarks");
        store.save(&collection(&[1])).unwrap();
        assert!(mem.get("bookmarks").unwrap().is_some());
        assert!(mem.get(DEFAULT_FAVORITES_KEY).unwrap().is_none());
    }

    #[test]
    fn save_reports_write_errors() {
        let mem = MemStore::new();
        mem.set_simulate_write_error(true);
        let store = FavoritesStore::new(mem);
        assert!(store.save(&collection(&[1])).is_err());
    }
}
