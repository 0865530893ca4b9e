//! Catalog query service

use crate::error::{CatalogError, Result};
use crate::storage::CatalogStore;
use marquee_types::{Movie, MovieWithDirector, NewMovie};
use std::sync::Arc;
use tracing::{debug, info};

pub struct CatalogService {
    store: Arc<CatalogStore>,
    /// Distinct genres in first-seen order, computed once at startup.
    /// Genres introduced by runtime-added movies do not appear here.
    genres: Vec<String>,
}

impl CatalogService {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        let genres = derive_genres(&store.list_movies());
        debug!("Derived {} genres from seed catalog", genres.len());
        Self { store, genres }
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// All movies, or only those matching `genre` exactly, each joined with
    /// its director record (the Unknown sentinel when none is on file).
    pub fn query_movies(&self, genre: Option<&str>) -> Result<Vec<MovieWithDirector>> {
        let movies = self.store.list_movies();

        let matches: Vec<Movie> = match genre {
            Some(genre) => {
                let filtered: Vec<Movie> =
                    movies.into_iter().filter(|m| m.genre == genre).collect();
                if filtered.is_empty() {
                    return Err(CatalogError::GenreNotFound(genre.to_string()));
                }
                filtered
            }
            None => movies,
        };

        Ok(matches
            .into_iter()
            .map(|movie| {
                let director = self.store.lookup_director(&movie.title);
                MovieWithDirector { movie, director }
            })
            .collect())
    }

    /// Validate presence of every field, then append the movie verbatim.
    ///
    /// An empty or whitespace-only title/genre and a zero year all count as
    /// missing, matching what the reference service rejected.
    pub fn add_movie(&self, input: NewMovie) -> Result<()> {
        let title = input
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or(CatalogError::InvalidMovie)?;
        let genre = input
            .genre
            .filter(|g| !g.trim().is_empty())
            .ok_or(CatalogError::InvalidMovie)?;
        let year = input
            .year
            .filter(|y| *y != 0)
            .ok_or(CatalogError::InvalidMovie)?;

        info!("Adding movie: {} ({}, {})", title, genre, year);
        self.store.add_movie(Movie { title, genre, year });

        Ok(())
    }
}

fn derive_genres(movies: &[Movie]) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for movie in movies {
        if !genres.contains(&movie.genre) {
            genres.push(movie.genre.clone());
        }
    }
    genres
}
