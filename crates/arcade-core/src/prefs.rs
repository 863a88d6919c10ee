//! Favorites and user star ratings
//!
//! Both collections live in a string key/value backend (browser
//! `localStorage` in production) as JSON. Backend failures and malformed
//! values read as empty collections and failed writes are dropped; nothing
//! here ever fails the render path.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{PreferenceError, StorageError};

pub const FAVORITES_KEY: &str = "favorites";
pub const RATINGS_KEY: &str = "userRatings";

/// String key/value persistence.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process backend. Used by tests and as the fallback when the browser
/// refuses to hand out `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing serialization
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A user star rating, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, PreferenceError> {
        if (1..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PreferenceError::RatingOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = PreferenceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// User ratings keyed by game id
pub type Ratings = BTreeMap<String, Rating>;

/// Favorites and ratings over a [`KeyValueStore`].
pub struct PreferenceStore<S> {
    backend: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn favorites(&self) -> BTreeSet<String> {
        self.read_json::<Vec<String>>(FAVORITES_KEY)
            .map(|ids| ids.into_iter().collect())
            .unwrap_or_default()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites().contains(id)
    }

    /// Insert `id` if absent, remove it if present. Persists immediately.
    /// Returns whether the game is a favorite afterwards.
    pub fn toggle_favorite(&self, id: &str) -> bool {
        let mut favorites = self.favorites();
        let now_favorite = if favorites.remove(id) {
            false
        } else {
            favorites.insert(id.to_string());
            true
        };
        let ids: Vec<&String> = favorites.iter().collect();
        self.write_json(FAVORITES_KEY, &ids);
        tracing::debug!(id, now_favorite, "toggled favorite");
        now_favorite
    }

    /// All stored ratings. Entries outside 1..=5 are dropped.
    pub fn ratings(&self) -> Ratings {
        self.raw_ratings()
            .into_iter()
            .filter_map(|(id, value)| {
                let rating = value
                    .as_u64()
                    .and_then(|v| u8::try_from(v).ok())
                    .and_then(|v| Rating::new(v).ok())?;
                Some((id, rating))
            })
            .collect()
    }

    pub fn rating(&self, id: &str) -> Option<Rating> {
        self.ratings().get(id).copied()
    }

    /// Overwrite the rating for `id`. Persists immediately. Other stored
    /// entries are written back untouched, including ones `ratings()` skips.
    pub fn set_rating(&self, id: &str, rating: Rating) {
        let mut raw = self.raw_ratings();
        raw.insert(id.to_string(), serde_json::Value::from(rating.get()));
        self.write_json(RATINGS_KEY, &raw);
        tracing::debug!(id, rating = rating.get(), "stored rating");
    }

    fn raw_ratings(&self) -> BTreeMap<String, serde_json::Value> {
        self.read_json(RATINGS_KEY).unwrap_or_default()
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get_item(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key, "{}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, "ignoring malformed stored value: {}", e);
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key, "could not serialize preferences: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.set_item(key, &json) {
            tracing::warn!(key, "{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that fails every call, like storage disabled in private mode
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read("SecurityError".into()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("QuotaExceededError".into()))
        }
    }

    #[test]
    fn test_empty_on_first_read() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        assert!(prefs.favorites().is_empty());
        assert!(prefs.ratings().is_empty());
        assert_eq!(prefs.rating("a"), None);
    }

    #[test]
    fn test_toggle_favorite_round_trip() {
        let prefs = PreferenceStore::new(MemoryStore::new().with_item(FAVORITES_KEY, r#"["x"]"#));
        let before = prefs.favorites();

        assert!(prefs.toggle_favorite("a"));
        assert!(prefs.is_favorite("a"));
        assert!(!prefs.toggle_favorite("a"));

        assert_eq!(prefs.favorites(), before);
    }

    #[test]
    fn test_favorites_persist_as_json_array() {
        let store = MemoryStore::new();
        let prefs = PreferenceStore::new(store);
        prefs.toggle_favorite("b");
        prefs.toggle_favorite("a");
        let raw = prefs.backend.get_item(FAVORITES_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"["a","b"]"#);
    }

    #[test]
    fn test_duplicate_stored_favorites_collapse() {
        let prefs = PreferenceStore::new(MemoryStore::new().with_item(FAVORITES_KEY, r#"["a","a"]"#));
        assert_eq!(prefs.favorites().len(), 1);
        assert!(!prefs.toggle_favorite("a"));
        assert!(prefs.favorites().is_empty());
    }

    #[test]
    fn test_rating_overwrite() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        prefs.set_rating("a", Rating::new(4).unwrap());
        assert_eq!(prefs.rating("a").map(Rating::get), Some(4));
        prefs.set_rating("a", Rating::new(2).unwrap());
        assert_eq!(prefs.rating("a").map(Rating::get), Some(2));
        assert_eq!(
            prefs.backend.get_item(RATINGS_KEY).unwrap().as_deref(),
            Some(r#"{"a":2}"#)
        );
    }

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::new(0), Err(PreferenceError::RatingOutOfRange(0)));
        assert_eq!(Rating::new(6), Err(PreferenceError::RatingOutOfRange(6)));
        assert!(Rating::try_from(1).is_ok());
        assert!(Rating::try_from(5).is_ok());
    }

    #[test]
    fn test_malformed_values_read_empty() {
        let store = MemoryStore::new()
            .with_item(FAVORITES_KEY, "{not json")
            .with_item(RATINGS_KEY, "[1, 2]");
        let prefs = PreferenceStore::new(store);
        assert!(prefs.favorites().is_empty());
        assert!(prefs.ratings().is_empty());
    }

    #[test]
    fn test_out_of_range_stored_ratings_ignored() {
        let store = MemoryStore::new().with_item(RATINGS_KEY, r#"{"a": 0, "b": 9, "c": 3, "d": "4", "e": 2.5}"#);
        let prefs = PreferenceStore::new(store);
        let ratings = prefs.ratings();
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings.get("c").map(|r| r.get()), Some(3));
    }

    #[test]
    fn test_set_rating_keeps_unreadable_entries() {
        let store = MemoryStore::new().with_item(RATINGS_KEY, r#"{"old": 0, "legacy": "4", "c": 3}"#);
        let prefs = PreferenceStore::new(store);
        prefs.set_rating("x", Rating::new(4).unwrap());

        let raw = prefs.backend.get_item(RATINGS_KEY).unwrap().unwrap();
        let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, serde_json::json!({"old": 0, "legacy": "4", "c": 3, "x": 4}));

        let ratings = prefs.ratings();
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings.get("x").map(|r| r.get()), Some(4));
    }

    #[test]
    fn test_broken_backend_is_silent() {
        let prefs = PreferenceStore::new(BrokenStore);
        assert!(prefs.favorites().is_empty());
        assert!(prefs.toggle_favorite("a"));
        prefs.set_rating("a", Rating::new(5).unwrap());
        assert_eq!(prefs.rating("a"), None);
    }
}
