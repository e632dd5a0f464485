//! In-memory mirror of the remote collections.
//!
//! The view cache holds the last full snapshot of each collection (users,
//! movies, bookings) so booking rows can resolve foreign-key-style
//! references without extra round trips. Slots are independent: a refresh
//! replaces one slot wholesale or leaves it untouched on failure - there
//! are no partial or delta updates, and no cross-slot invariant beyond the
//! fallback rendering rule in [`crate::view`].

use std::sync::{Arc, RwLock};

use marquee_core::{Booking, Movie, User};

use crate::api::{ApiClient, ApiError};

/// Process-wide snapshot cache for the three booking collections.
///
/// Cheaply cloneable via `Arc`. Each slot is replaced as a single atomic
/// assignment under its own lock, so readers see either the old snapshot or
/// the new one, never a mix.
#[derive(Clone, Default)]
pub struct ViewCache {
    inner: Arc<ViewCacheInner>,
}

#[derive(Default)]
struct ViewCacheInner {
    users: RwLock<Vec<User>>,
    movies: RwLock<Vec<Movie>>,
    bookings: RwLock<Vec<Booking>>,
}

impl ViewCache {
    /// Create an empty cache; slots fill on the first refresh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh the users slot from the remote API.
    ///
    /// On failure the slot keeps its previous snapshot and the error
    /// propagates so the caller can render an explicit load failure.
    pub async fn refresh_users(&self, client: &ApiClient) -> Result<Vec<User>, ApiError> {
        let users = client.list_users().await?;
        self.replace(&self.inner.users, users.clone());
        Ok(users)
    }

    /// Refresh the movies slot from the remote API.
    pub async fn refresh_movies(&self, client: &ApiClient) -> Result<Vec<Movie>, ApiError> {
        let movies = client.list_movies().await?;
        self.replace(&self.inner.movies, movies.clone());
        Ok(movies)
    }

    /// Refresh the bookings slot from the remote API.
    pub async fn refresh_bookings(&self, client: &ApiClient) -> Result<Vec<Booking>, ApiError> {
        let bookings = client.list_bookings().await?;
        self.replace(&self.inner.bookings, bookings.clone());
        Ok(bookings)
    }

    /// Snapshot of the users slot as last successfully fetched.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.read(&self.inner.users)
    }

    /// Snapshot of the movies slot as last successfully fetched.
    #[must_use]
    pub fn movies(&self) -> Vec<Movie> {
        self.read(&self.inner.movies)
    }

    /// Snapshot of the bookings slot as last successfully fetched.
    #[must_use]
    pub fn bookings(&self) -> Vec<Booking> {
        self.read(&self.inner.bookings)
    }

    /// Default user for booking actions: the first cached user, if any.
    ///
    /// There is no login system; the demo books everything under the first
    /// registered user.
    #[must_use]
    pub fn first_user(&self) -> Option<User> {
        self.users().into_iter().next()
    }

    // Single atomic assignment; never an in-place incremental mutation.
    fn replace<T>(&self, slot: &RwLock<Vec<T>>, items: Vec<T>) {
        match slot.write() {
            Ok(mut guard) => *guard = items,
            Err(poisoned) => *poisoned.into_inner() = items,
        }
    }

    fn read<T: Clone>(&self, slot: &RwLock<Vec<T>>) -> Vec<T> {
        match slot.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{MovieId, UserId};

    fn user(id: &str, name: &str) -> User {
        User {
            id: UserId::new(id),
            name: name.to_owned(),
            email: format!("{id}@example.com"),
        }
    }

    #[test]
    fn test_slots_start_empty() {
        let cache = ViewCache::new();
        assert!(cache.users().is_empty());
        assert!(cache.movies().is_empty());
        assert!(cache.bookings().is_empty());
        assert!(cache.first_user().is_none());
    }

    #[test]
    fn test_replace_is_wholesale() {
        let cache = ViewCache::new();
        cache.replace(
            &cache.inner.users,
            vec![user("u1", "김영희"), user("u2", "이철수")],
        );
        cache.replace(&cache.inner.users, vec![user("u3", "박민수")]);

        // The second snapshot replaces the first entirely, no merging.
        let users = cache.users();
        assert_eq!(users.len(), 1);
        assert_eq!(users.first().map(|u| u.name.as_str()), Some("박민수"));
    }

    #[test]
    fn test_slots_are_independent() {
        let cache = ViewCache::new();
        cache.replace(&cache.inner.users, vec![user("u1", "김영희")]);
        cache.replace(
            &cache.inner.bookings,
            vec![Booking {
                id: None,
                user_id: UserId::new("u1"),
                movie_id: MovieId::new("m1"),
                seats: None,
                booking_date: None,
            }],
        );

        // Touching one slot leaves the others alone.
        cache.replace(&cache.inner.bookings, vec![]);
        assert_eq!(cache.users().len(), 1);
        assert!(cache.bookings().is_empty());
    }

    #[test]
    fn test_first_user_is_api_order() {
        let cache = ViewCache::new();
        cache.replace(
            &cache.inner.users,
            vec![user("u2", "이철수"), user("u1", "김영희")],
        );
        assert_eq!(
            cache.first_user().map(|u| u.id),
            Some(UserId::new("u2"))
        );
    }
}
