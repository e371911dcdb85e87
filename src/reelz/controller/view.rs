use crate::favorites::{self, Favorites};
use crate::model::{Movie, Tab};
use serde::Serialize;

/// Number of placeholder cards shown while a fetch is in flight.
pub const SKELETON_CARDS: usize = 6;

/// One card in a movie grid, with everything a renderer needs precomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCard {
    /// 1-based position in the grid
    pub position: usize,
    pub id: i64,
    pub title: String,
    pub year: Option<i32>,
    pub rating: String,
    pub overview: String,
    pub poster: String,
    /// Filled bookmark when true, outline otherwise
    pub favorite: bool,
}

impl MovieCard {
    pub fn new(position: usize, movie: &Movie, favorites: &Favorites) -> Self {
        Self {
            position,
            id: movie.id,
            title: movie.title.clone(),
            year: movie.year(),
            rating: movie.rating_label(),
            overview: movie.overview.clone(),
            poster: movie.poster().to_string(),
            favorite: favorites::contains(favorites, movie.id),
        }
    }
}

/// What the active tab currently displays.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Fetch in progress
    Skeleton { placeholders: usize },
    Grid(Vec<MovieCard>),
    /// Search tab with nothing to show yet
    SearchPrompt,
    /// Favorites tab with an empty list, offers a way back to Discover
    FavoritesEmpty,
}

impl Screen {
    pub fn cards(&self) -> &[MovieCard] {
        match self {
            Screen::Grid(cards) => cards,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabLabel {
    pub tab: Tab,
    pub label: String,
    pub active: bool,
}

pub(super) fn grid(movies: &[Movie], favorites: &Favorites, loading: bool) -> Screen {
    if loading {
        return Screen::Skeleton {
            placeholders: SKELETON_CARDS,
        };
    }
    Screen::Grid(
        movies
            .iter()
            .enumerate()
            .map(|(i, m)| MovieCard::new(i + 1, m, favorites))
            .collect(),
    )
}

pub(super) fn tab_title(tab: Tab, favorites: &Favorites) -> String {
    match tab {
        Tab::Discover => "Discover".to_string(),
        Tab::Search => "Search Results".to_string(),
        Tab::Favorites => format!("Favorites ({})", favorites.len()),
    }
}
