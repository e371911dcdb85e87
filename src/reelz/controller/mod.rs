//! # View Controller
//!
//! The controller is the hub of reelz. It owns the transient [`ViewState`] (active
//! tab, query text, loading flag, current result set) along with the in-memory
//! favorites, calls the [`MovieSource`] and computes what each tab displays.
//!
//! ## Tabs
//!
//! - **Discover**: the initial tab. Entering it fetches the popular feed, every
//!   time; there is no caching, so coming back to Discover refetches.
//! - **Search**: entered by a successful search. Shows the current result set, or a
//!   prompt when there is nothing to show.
//! - **Favorites**: the live favorites list, or an empty state pointing back to
//!   Discover.
//!
//! ## Loading
//!
//! Every source call is bracketed by the loading flag: it is set (and observers are
//! told) before the call and cleared after it, whatever the outcome.
//!
//! ## Failures
//!
//! A failed fetch or search is logged and leaves an empty result set. The user never
//! sees an error state, only "nothing here". An empty or whitespace-only query does
//! nothing at all: no call, no state change.
//!
//! ## Observers
//!
//! Every mutation notifies the registered [`StateObserver`]s synchronously, in
//! subscription order. Persisting favorites is just one such observer
//! ([`FavoritesSync`]), installed by [`ViewController::new`].
//!
//! ## Overlapping Requests
//!
//! Source calls borrow the controller mutably for their whole duration, so two
//! requests can never be in flight on the same controller: the last one issued is
//! the last one applied.

use crate::favorites::{self, Favorites, FavoritesStore};
use crate::model::{Movie, Tab};
use crate::source::MovieSource;
use crate::store::KeyValueStore;

pub mod observer;
pub mod view;

pub use observer::{FavoritesSync, StateChange, StateObserver};
pub use view::{MovieCard, Screen, TabLabel, SKELETON_CARDS};

/// Ephemeral UI state. Nothing here is persisted except through observers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub active_tab: Tab,
    pub query: String,
    pub loading: bool,
    pub results: Vec<Movie>,
    pub favorites: Favorites,
}

impl ViewState {
    /// Screen for the active tab. Observers use this to redraw mid-fetch.
    pub fn screen(&self) -> Screen {
        match self.active_tab {
            Tab::Discover => view::grid(&self.results, &self.favorites, self.loading),
            Tab::Search => {
                if self.results.is_empty() {
                    Screen::SearchPrompt
                } else {
                    view::grid(&self.results, &self.favorites, self.loading)
                }
            }
            Tab::Favorites => {
                if self.favorites.is_empty() {
                    Screen::FavoritesEmpty
                } else {
                    view::grid(self.favorites.movies(), &self.favorites, false)
                }
            }
        }
    }

    pub fn tab_labels(&self) -> Vec<TabLabel> {
        Tab::ALL
            .iter()
            .map(|tab| TabLabel {
                tab: *tab,
                label: view::tab_title(*tab, &self.favorites),
                active: *tab == self.active_tab,
            })
            .collect()
    }
}

pub struct ViewController<S: MovieSource> {
    source: S,
    state: ViewState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl<S: MovieSource> ViewController<S> {
    /// Loads the persisted favorites and keeps them in sync with `store` from then on.
    pub fn new<K: KeyValueStore + 'static>(source: S, store: FavoritesStore<K>) -> Self {
        let favorites = store.load();
        tracing::debug!(count = favorites.len(), "loaded favorites");

        let mut controller = Self::with_favorites(source, favorites);
        controller.subscribe(FavoritesSync::new(store));
        controller
    }

    /// Controller without persistence.
    pub fn with_favorites(source: S, favorites: Favorites) -> Self {
        Self {
            source,
            state: ViewState {
                favorites,
                ..ViewState::default()
            },
            observers: Vec::new(),
        }
    }

    pub fn subscribe<O: StateObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn active_tab(&self) -> Tab {
        self.state.active_tab
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn results(&self) -> &[Movie] {
        &self.state.results
    }

    pub fn favorites(&self) -> &Favorites {
        &self.state.favorites
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        favorites::contains(&self.state.favorites, id)
    }

    /// Enters the initial Discover tab and fetches the popular feed.
    pub async fn start(&mut self) {
        self.state.active_tab = Tab::Discover;
        self.notify(StateChange::Tab);
        self.load_popular().await;
    }

    /// Switches tabs. Coming back to Discover from another tab refetches.
    pub async fn select_tab(&mut self, tab: Tab) {
        if tab == self.state.active_tab {
            return;
        }
        self.state.active_tab = tab;
        self.notify(StateChange::Tab);

        if tab == Tab::Discover {
            self.load_popular().await;
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.state.query {
            return;
        }
        self.state.query = query;
        self.notify(StateChange::Query);
    }

    /// Runs a search for the current query.
    ///
    /// Returns false when the query is blank and nothing happened.
    pub async fn submit_search(&mut self) -> bool {
        let query = self.state.query.trim().to_string();
        if query.is_empty() {
            return false;
        }

        self.set_loading(true);
        match self.source.search(&query).await {
            Ok(movies) => {
                tracing::debug!(query = %query, count = movies.len(), "search finished");
                self.replace_results(movies);
                if self.state.active_tab != Tab::Search {
                    self.state.active_tab = Tab::Search;
                    self.notify(StateChange::Tab);
                }
            }
            Err(e) => {
                tracing::error!(query = %query, error = %e, "error searching movies");
                self.replace_results(Vec::new());
            }
        }
        self.set_loading(false);
        true
    }

    /// Sets the query and submits it, like typing and pressing Enter.
    pub async fn search(&mut self, query: impl Into<String>) -> bool {
        self.set_query(query);
        self.submit_search().await
    }

    /// Adds the movie to favorites, or removes it if its id is already there.
    pub fn toggle_favorite(&mut self, movie: &Movie) {
        self.state.favorites = favorites::toggle(&self.state.favorites, movie.clone());
        tracing::debug!(
            id = movie.id,
            favorite = self.is_favorite(movie.id),
            "toggled favorite"
        );
        self.notify(StateChange::Favorites);
    }

    /// Movies behind the grid of the active tab, in display order.
    pub fn visible_movies(&self) -> &[Movie] {
        match self.state.active_tab {
            Tab::Favorites => self.state.favorites.movies(),
            Tab::Discover | Tab::Search => &self.state.results,
        }
    }

    /// Movie at a 1-based grid position on the active tab.
    pub fn movie_at(&self, position: usize) -> Option<&Movie> {
        position
            .checked_sub(1)
            .and_then(|i| self.visible_movies().get(i))
    }

    /// Toggles the movie at a 1-based grid position; returns it if there was one.
    pub fn toggle_at(&mut self, position: usize) -> Option<Movie> {
        let movie = self.movie_at(position)?.clone();
        self.toggle_favorite(&movie);
        Some(movie)
    }

    /// What the active tab displays right now. Bookmark state is derived on every
    /// call, never cached.
    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn tab_labels(&self) -> Vec<TabLabel> {
        self.state.tab_labels()
    }

    async fn load_popular(&mut self) {
        self.set_loading(true);
        match self.source.fetch_popular().await {
            Ok(movies) => {
                tracing::debug!(count = movies.len(), "fetched popular movies");
                self.replace_results(movies);
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching popular movies");
                self.replace_results(Vec::new());
            }
        }
        self.set_loading(false);
    }

    fn set_loading(&mut self, loading: bool) {
        self.state.loading = loading;
        self.notify(StateChange::Loading);
    }

    fn replace_results(&mut self, movies: Vec<Movie>) {
        self.state.results = movies;
        self.notify(StateChange::Results);
    }

    fn notify(&mut self, change: StateChange) {
        tracing::trace!(?change, observers = self.observers.len(), "state changed");
        for observer in self.observers.iter_mut() {
            observer.on_change(change, &self.state);
        }
    }
}
