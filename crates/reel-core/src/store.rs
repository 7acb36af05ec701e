//! # Movie Store
//!
//! The single in-memory collection of movie records.
//!
//! Records are kept in insertion order in a `Vec`; lookups are linear scans.
//! The whole collection sits behind one `parking_lot::RwLock`, taken for the
//! full duration of every operation, so no two mutations interleave their
//! read-modify-write and no lock is ever held across an `.await`.
//! `parking_lot` locks are not poisoned by a panicking holder.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::StoreError;
use crate::movie::{Movie, MovieId, MoviePatch, NewMovie};

/// Thread-safe, cloneable handle to the movie collection.
///
/// All clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl MovieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order. The returned vector is a copy.
    pub fn list(&self) -> Vec<Movie> {
        self.movies.read().clone()
    }

    /// Records carrying a genre that spells `genre`, ignoring case.
    pub fn list_by_genre(&self, genre: &str) -> Vec<Movie> {
        self.movies
            .read()
            .iter()
            .filter(|m| m.has_genre(genre))
            .cloned()
            .collect()
    }

    /// Retrieve a record by id.
    pub fn get(&self, id: &MovieId) -> Option<Movie> {
        self.movies.read().iter().find(|m| m.id == *id).cloned()
    }

    /// Append a validated movie under a fresh id and return the stored record.
    pub fn create(&self, movie: NewMovie) -> Movie {
        let mut guard = self.movies.write();
        let mut id = MovieId::new();
        while guard.iter().any(|m| m.id == id) {
            id = MovieId::new();
        }
        let record = Movie::new(id, movie);
        guard.push(record.clone());
        record
    }

    /// Merge `patch` over the record in place and return the merged record.
    pub fn update(&self, id: &MovieId, patch: MoviePatch) -> Result<Movie, StoreError> {
        let mut guard = self.movies.write();
        let record = guard
            .iter_mut()
            .find(|m| m.id == *id)
            .ok_or(StoreError::NotFound(*id))?;
        record.apply(patch);
        Ok(record.clone())
    }

    /// Remove a record, keeping the remaining records in order.
    pub fn delete(&self, id: &MovieId) -> Result<(), StoreError> {
        let mut guard = self.movies.write();
        let index = guard
            .iter()
            .position(|m| m.id == *id)
            .ok_or(StoreError::NotFound(*id))?;
        guard.remove(index);
        Ok(())
    }

    /// Append already-identified records, in order.
    ///
    /// All-or-nothing: if any id is already present, or repeats within
    /// `movies`, nothing is inserted.
    pub fn seed(&self, movies: Vec<Movie>) -> Result<usize, StoreError> {
        let mut guard = self.movies.write();
        for (i, movie) in movies.iter().enumerate() {
            let taken = guard.iter().any(|m| m.id == movie.id)
                || movies[..i].iter().any(|m| m.id == movie.id);
            if taken {
                return Err(StoreError::DuplicateId(movie.id));
            }
        }
        let count = movies.len();
        guard.extend(movies);
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.movies.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use super::*;
    use crate::genre::Genre;

    fn new_movie(title: &str, genre: Vec<Genre>) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            year: 2000,
            director: "D".to_string(),
            rate: 5.0,
            poster: "http://x.com/a.jpg".to_string(),
            genre,
        }
    }

    #[test]
    fn create_then_get_returns_equal_record() {
        let store = MovieStore::new();
        let created = store.create(new_movie("X", vec![Genre::Action]));
        assert_eq!(store.get(&created.id), Some(created));
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = MovieStore::new();
        store.create(new_movie("X", vec![Genre::Action]));
        assert!(store.get(&MovieId::new()).is_none());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = MovieStore::new();
        let titles = ["A", "B", "C", "D"];
        for t in titles {
            store.create(new_movie(t, vec![Genre::Drama]));
        }
        let listed: Vec<String> = store.list().into_iter().map(|m| m.title).collect();
        assert_eq!(listed, titles);
    }

    #[test]
    fn list_returns_a_copy() {
        let store = MovieStore::new();
        store.create(new_movie("A", vec![Genre::Drama]));
        let mut listed = store.list();
        listed.clear();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn list_by_genre_is_case_insensitive() {
        let store = MovieStore::new();
        store.create(new_movie("A", vec![Genre::Action, Genre::Crime]));
        store.create(new_movie("B", vec![Genre::Comedy]));
        store.create(new_movie("C", vec![Genre::Drama, Genre::Action]));

        let lower = store.list_by_genre("action");
        let proper = store.list_by_genre("Action");
        assert_eq!(lower, proper);
        let titles: Vec<&str> = lower.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn list_by_genre_without_matches_is_empty() {
        let store = MovieStore::new();
        store.create(new_movie("A", vec![Genre::Action]));
        assert!(store.list_by_genre("horror").is_empty());
        assert!(store.list_by_genre("western").is_empty());
    }

    #[test]
    fn update_changes_only_patched_fields() {
        let store = MovieStore::new();
        let created = store.create(new_movie("X", vec![Genre::Action]));
        let updated = store
            .update(
                &created.id,
                MoviePatch {
                    rate: Some(9.0),
                    ..MoviePatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.rate, 9.0);
        assert_eq!(
            Movie {
                rate: created.rate,
                ..updated.clone()
            },
            created
        );
        assert_eq!(store.get(&created.id), Some(updated));
    }

    #[test]
    fn update_keeps_position() {
        let store = MovieStore::new();
        store.create(new_movie("A", vec![Genre::Drama]));
        let middle = store.create(new_movie("B", vec![Genre::Drama]));
        store.create(new_movie("C", vec![Genre::Drama]));
        store
            .update(
                &middle.id,
                MoviePatch {
                    title: Some("B2".into()),
                    ..MoviePatch::default()
                },
            )
            .unwrap();
        let titles: Vec<String> = store.list().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["A", "B2", "C"]);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = MovieStore::new();
        let id = MovieId::new();
        assert_eq!(
            store.update(&id, MoviePatch::default()),
            Err(StoreError::NotFound(id))
        );
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let store = MovieStore::new();
        let a = store.create(new_movie("A", vec![Genre::Drama]));
        let b = store.create(new_movie("B", vec![Genre::Drama]));
        let c = store.create(new_movie("C", vec![Genre::Drama]));
        assert_eq!(store.len(), 3);

        store.delete(&b.id).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.get(&b.id).is_none());
        let ids: Vec<MovieId> = store.list().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let store = MovieStore::new();
        let created = store.create(new_movie("A", vec![Genre::Drama]));
        store.delete(&created.id).unwrap();
        assert_eq!(
            store.delete(&created.id),
            Err(StoreError::NotFound(created.id))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn clones_share_data() {
        let store = MovieStore::new();
        let other = store.clone();
        let created = store.create(new_movie("A", vec![Genre::Drama]));
        assert_eq!(other.get(&created.id), Some(created));
    }

    #[test]
    fn seed_appends_in_order() {
        let store = MovieStore::new();
        store.create(new_movie("first", vec![Genre::Drama]));
        let seeded = vec![
            Movie::new(MovieId::new(), new_movie("s1", vec![Genre::Comedy])),
            Movie::new(MovieId::new(), new_movie("s2", vec![Genre::Horror])),
        ];
        assert_eq!(store.seed(seeded.clone()).unwrap(), 2);
        let listed = store.list();
        assert_eq!(listed.len(), 3);
        assert_eq!(&listed[1..], &seeded[..]);
    }

    #[test]
    fn seed_rejects_duplicate_ids_atomically() {
        let store = MovieStore::new();
        let existing = store.create(new_movie("first", vec![Genre::Drama]));
        let clash = vec![
            Movie::new(MovieId::new(), new_movie("ok", vec![Genre::Comedy])),
            Movie::new(existing.id, new_movie("clash", vec![Genre::Comedy])),
        ];
        assert_eq!(store.seed(clash), Err(StoreError::DuplicateId(existing.id)));
        assert_eq!(store.len(), 1);

        let id = MovieId::new();
        let repeated = vec![
            Movie::new(id, new_movie("a", vec![Genre::Comedy])),
            Movie::new(id, new_movie("b", vec![Genre::Comedy])),
        ];
        assert_eq!(store.seed(repeated), Err(StoreError::DuplicateId(id)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_creates_yield_unique_ids() {
        let store = MovieStore::new();
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                thread::spawn(move || {
                    (0..50)
                        .map(|i| store.create(new_movie(&format!("{t}-{i}"), vec![Genre::Action])).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(ids.len(), 400);
        assert_eq!(store.len(), 400);
        for id in &ids {
            assert!(store.get(id).is_some());
        }
    }
}
