use super::MovieSource;
use crate::error::Result;
use crate::model::{Movie, PLACEHOLDER_POSTER};
use async_trait::async_trait;

/// Offline source backed by a fixed catalog.
///
/// The popular feed is always the same six films. Searches synthesize three records
/// whose titles embed the query, which is enough to drive every view.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource;

impl FixtureSource {
    pub fn new() -> Self {
        Self
    }
}

fn movie(id: i64, title: &str, vote_average: f64, release_date: &str, overview: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: PLACEHOLDER_POSTER.to_string(),
        vote_average,
        release_date: release_date.to_string(),
        overview: overview.to_string(),
    }
}

pub fn popular_movies() -> Vec<Movie> {
    vec![
        movie(
            1,
            "Inception",
            8.8,
            "2010-07-16",
            "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
        ),
        movie(
            2,
            "The Shawshank Redemption",
            9.3,
            "1994-09-23",
            "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
        ),
        movie(
            3,
            "The Dark Knight",
            9.0,
            "2008-07-18",
            "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
        ),
        movie(
            4,
            "Pulp Fiction",
            8.9,
            "1994-10-14",
            "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner bandits intertwine in four tales of violence and redemption.",
        ),
        movie(
            5,
            "The Lord of the Rings",
            8.8,
            "2001-12-19",
            "A meek Hobbit from the Shire and eight companions set out on a journey to destroy the powerful One Ring and save Middle-earth from the Dark Lord Sauron.",
        ),
        movie(
            6,
            "Forrest Gump",
            8.8,
            "1994-07-06",
            "The presidencies of Kennedy and Johnson, the Vietnam War, the Watergate scandal and other historical events unfold from the perspective of an Alabama man with an IQ of 75, whose only desire is to be reunited with his childhood sweetheart.",
        ),
    ]
}

pub fn search_results(query: &str) -> Vec<Movie> {
    vec![
        movie(
            7,
            &format!("{} Movie 1", query),
            7.5,
            "2022-01-01",
            &format!(
                "A movie about {} with exciting plot twists and character development.",
                query
            ),
        ),
        movie(
            8,
            &format!("The {} Adventure", query),
            8.2,
            "2021-05-15",
            &format!(
                "An adventure film featuring {} in a thrilling journey across unknown territories.",
                query
            ),
        ),
        movie(
            9,
            &format!("Return of {}", query),
            6.9,
            "2023-03-10",
            &format!(
                "The long-awaited sequel about {} and the challenges they face in a new world.",
                query
            ),
        ),
    ]
}

#[async_trait(?Send)]
impl MovieSource for FixtureSource {
    async fn fetch_popular(&self) -> Result<Vec<Movie>> {
        Ok(popular_movies())
    }

    async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        Ok(search_results(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn popular_feed_has_six_unique_movies() {
        let movies = FixtureSource::new().fetch_popular().await.unwrap();
        assert_eq!(movies.len(), 6);
        let ids: HashSet<i64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 6);
        assert_eq!(movies[0].title, "Inception");
    }

    #[tokio::test]
    async fn search_embeds_query_in_every_title() {
        let movies = FixtureSource::new().search("Batman").await.unwrap();
        assert_eq!(movies.len(), 3);
        assert!(movies.iter().all(|m| m.title.contains("Batman")));
        assert_eq!(movies[1].title, "The Batman Adventure");
        assert_eq!(
            movies.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![7, 8, 9]
        );
    }

    #[test]
    fn fixture_ratings_are_in_range() {
        for m in popular_movies().iter().chain(search_results("x").iter()) {
            assert!((0.0..=10.0).contains(&m.vote_average));
            assert!(m.year().is_some());
        }
    }
}
