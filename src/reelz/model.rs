use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Poster reference used when a record has no artwork.
pub const PLACEHOLDER_POSTER: &str = "/placeholder.svg?height=400&width=300";

/// A film as exchanged between the data source, the views and the favorites store.
///
/// Field names match the persisted JSON and the catalog wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub poster_path: String,
    pub vote_average: f64,
    pub release_date: String,
    pub overview: String,
}

impl Movie {
    /// Release year, taken from the leading `YYYY` of the date.
    pub fn year(&self) -> Option<i32> {
        self.release_date.get(..4)?.parse().ok()
    }

    /// Rating with one decimal, as shown on the card badge.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average)
    }

    /// Poster reference, falling back to the placeholder when blank.
    pub fn poster(&self) -> &str {
        if self.poster_path.trim().is_empty() {
            PLACEHOLDER_POSTER
        } else {
            &self.poster_path
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Discover,
    Search,
    Favorites,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Discover, Tab::Search, Tab::Favorites];
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tab::Discover => "discover",
            Tab::Search => "search",
            Tab::Favorites => "favorites",
        };
        f.write_str(name)
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discover" | "1" => Ok(Tab::Discover),
            "search" | "2" => Ok(Tab::Search),
            "favorites" | "favourites" | "3" => Ok(Tab::Favorites),
            other => Err(format!("Unknown tab: {}", other)),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: PLACEHOLDER_POSTER.to_string(),
        vote_average: 7.0,
        release_date: "2001-02-03".to_string(),
        overview: format!("About {}", title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_comes_from_release_date() {
        let movie = sample_movie(1, "Inception");
        assert_eq!(movie.year(), Some(2001));
    }

    #[test]
    fn year_is_none_for_garbage_dates() {
        let mut movie = sample_movie(1, "Inception");
        movie.release_date = "soon".to_string();
        assert_eq!(movie.year(), None);
        movie.release_date = String::new();
        assert_eq!(movie.year(), None);
    }

    #[test]
    fn rating_label_has_one_decimal() {
        let mut movie = sample_movie(1, "Inception");
        movie.vote_average = 9.0;
        assert_eq!(movie.rating_label(), "9.0");
        movie.vote_average = 8.26;
        assert_eq!(movie.rating_label(), "8.3");
    }

    #[test]
    fn blank_poster_falls_back_to_placeholder() {
        let mut movie = sample_movie(1, "Inception");
        movie.poster_path = "  ".to_string();
        assert_eq!(movie.poster(), PLACEHOLDER_POSTER);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let movie = sample_movie(3, "The Dark Knight");
        let value = serde_json::to_value(&movie).unwrap();
        for key in [
            "id",
            "title",
            "poster_path",
            "vote_average",
            "release_date",
            "overview",
        ] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn tab_parses_names_and_shortcuts() {
        assert_eq!("Discover".parse::<Tab>().unwrap(), Tab::Discover);
        assert_eq!("2".parse::<Tab>().unwrap(), Tab::Search);
        assert_eq!("favourites".parse::<Tab>().unwrap(), Tab::Favorites);
        assert!("settings".parse::<Tab>().is_err());
    }
}
