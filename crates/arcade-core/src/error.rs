//! Error types shared by the catalog, preference and page layers

use thiserror::Error;

/// Failure to obtain the game catalog.
///
/// Always user visible: the page swaps the grid for a fixed message and stops
/// rendering. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("malformed catalog: {0}")]
    Parse(String),
}

/// Failure of the key/value backend behind the preference store.
///
/// Recovered inside [`crate::prefs::PreferenceStore`]; callers never see it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("rating {0} is outside 1..=5")]
    RatingOutOfRange(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("category page opened without a category")]
    MissingCategory,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
