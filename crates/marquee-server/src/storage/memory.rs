//! In-memory catalog store

use crate::storage::seed;
use marquee_types::{Director, Movie};
use std::collections::HashMap;
use std::sync::RwLock;

/// Owned, process-lifetime catalog state.
///
/// The movie list is an ordered, append-only sequence; the handlers run on a
/// multi-threaded runtime, so appends and snapshots go through an `RwLock`.
/// The director map never changes after startup.
pub struct CatalogStore {
    movies: RwLock<Vec<Movie>>,
    directors: HashMap<String, Director>,
}

impl CatalogStore {
    pub fn new(movies: Vec<Movie>, directors: HashMap<String, Director>) -> Self {
        Self {
            movies: RwLock::new(movies),
            directors,
        }
    }

    /// Store preloaded with the fixed seed catalog.
    pub fn with_seed_data() -> Self {
        Self::new(seed::movies(), seed::directors())
    }

    /// Snapshot of the full movie sequence, insertion order.
    pub fn list_movies(&self) -> Vec<Movie> {
        self.movies.read().expect("movie lock poisoned").clone()
    }

    /// Append a movie to the end of the sequence. No dedup, no validation.
    pub fn add_movie(&self, movie: Movie) {
        self.movies.write().expect("movie lock poisoned").push(movie);
    }

    /// Stored director record, or the Unknown sentinel if none is on file.
    pub fn lookup_director(&self, title: &str) -> Director {
        self.directors
            .get(title)
            .cloned()
            .unwrap_or_else(Director::unknown)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::with_seed_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_store_lists_all_movies_in_order() {
        let store = CatalogStore::with_seed_data();
        let movies = store.list_movies();

        assert_eq!(movies.len(), 12);
        assert_eq!(movies[0].title, "Avengers: Endgame");
        assert_eq!(movies[11].title, "Schindler’s List");
    }

    #[test]
    fn add_movie_appends_at_the_end() {
        let store = CatalogStore::with_seed_data();
        store.add_movie(Movie::new("Arrival", "Drama", 2016));

        let movies = store.list_movies();
        assert_eq!(movies.len(), 13);
        assert_eq!(movies.last().unwrap().title, "Arrival");
    }

    #[test]
    fn lookup_director_returns_stored_record() {
        let store = CatalogStore::with_seed_data();
        let director = store.lookup_director("Parasite");
        assert_eq!(director.name, "Bong Joon-ho");
        assert!(!director.is_unknown());
    }

    #[test]
    fn lookup_director_falls_back_to_sentinel() {
        let store = CatalogStore::with_seed_data();
        let director = store.lookup_director("Arrival");
        assert_eq!(director, Director::unknown());
    }
}
