//! Watchlist Store Module
//!
//! Ordered, duplicate-free sequence of movie ids.

use crate::models::MovieId;

// == Watchlist Store ==
/// Movie ids in insertion order.
///
/// Uniqueness is the caller's responsibility: `append` does not check for an
/// existing id. The watchlist model checks membership before every mutation.
#[derive(Debug, Clone, Default)]
pub struct WatchlistStore {
    ids: Vec<MovieId>,
}

impl WatchlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` at the end of the list.
    pub fn append(&mut self, id: MovieId) {
        debug_assert!(!self.contains(id), "duplicate id {id} appended");
        self.ids.push(id);
    }

    /// Removes `id`, keeping the relative order of the remaining ids.
    ///
    /// Returns whether an id was removed.
    pub fn remove(&mut self, id: MovieId) -> bool {
        match self.ids.iter().position(|&x| x == id) {
            Some(index) => {
                self.ids.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.ids.contains(&id)
    }

    pub fn list(&self) -> &[MovieId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
