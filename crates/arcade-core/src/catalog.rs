//! Game records and the catalog loader
//!
//! The catalog is a JSON array fetched once per page view. Transport is
//! abstracted behind [`CatalogSource`] so the browser fetch lives in the
//! front end and tests can supply canned payloads.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// One entry of the catalog, read-only to everything in this crate.
///
/// Every field falls back to an empty/zero value when absent so a sparse
/// record still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: String,
    /// Link to the game's own page
    pub url: String,
    /// Embeddable player URL
    #[serde(rename = "game_url")]
    pub game_url: String,
    pub average_rating: f64,
    pub featured: bool,
    pub is_popular: bool,
    /// Absent means shown on the homepage
    pub on_homepage: Option<bool>,
}

impl GameRecord {
    pub fn shown_on_homepage(&self) -> bool {
        self.on_homepage != Some(false)
    }

    /// Featured or popular games get a larger card and eager image priority
    pub fn is_highlighted(&self) -> bool {
        self.featured || self.is_popular
    }
}

/// Shared, immutable catalog handed to sessions
pub type Catalog = Arc<[GameRecord]>;

/// Parse a catalog payload.
pub fn parse_catalog(text: &str) -> Result<Vec<GameRecord>, LoadError> {
    let games: Vec<GameRecord> =
        serde_json::from_str(text).map_err(|e| LoadError::Parse(e.to_string()))?;
    tracing::debug!(count = games.len(), "parsed catalog");
    Ok(games)
}

/// Transport for catalog payloads.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// GET `path` and return the body. Non-success statuses map to
    /// [`LoadError::Status`].
    async fn fetch_text(&self, path: &str) -> Result<String, LoadError>;
}

/// Fetch and parse without caching. Used for the preload pass, which keeps
/// its own short-lived copy.
pub async fn fetch_catalog<S: CatalogSource>(source: &S, path: &str) -> Result<Vec<GameRecord>, LoadError> {
    let text = source.fetch_text(path).await?;
    parse_catalog(&text)
}

/// Loads the catalog once and serves the cached copy afterwards.
pub struct CatalogLoader<S> {
    source: S,
    path: String,
    cached: Option<Catalog>,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S, path: impl Into<String>) -> Self {
        Self {
            source,
            path: path.into(),
            cached: None,
        }
    }

    /// Single attempt, no retry. Only a successful load is cached.
    pub async fn load(&mut self) -> Result<Catalog, LoadError> {
        if let Some(catalog) = &self.cached {
            return Ok(Arc::clone(catalog));
        }

        let games = match fetch_catalog(&self.source, &self.path).await {
            Ok(games) => games,
            Err(e) => {
                tracing::error!("Error loading games: {}", e);
                return Err(e);
            }
        };

        tracing::info!(count = games.len(), path = %self.path, "catalog loaded");
        let catalog: Catalog = games.into();
        self.cached = Some(Arc::clone(&catalog));
        Ok(catalog)
    }
}

/// Embeddable URLs worth a preload hint: every non-empty `game_url`.
pub fn preload_targets(games: &[GameRecord]) -> impl Iterator<Item = &str> {
    games
        .iter()
        .map(|g| g.game_url.as_str())
        .filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct FakeSource {
        response: Result<String, LoadError>,
        calls: Cell<usize>,
    }

    impl FakeSource {
        fn new(response: Result<&str, LoadError>) -> Self {
            Self {
                response: response.map(str::to_string),
                calls: Cell::new(0),
            }
        }
    }

    impl CatalogSource for FakeSource {
        async fn fetch_text(&self, _path: &str) -> Result<String, LoadError> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    const SAMPLE: &str = r#"[
        {"id": "a", "name": "Puzzle Box", "category": "puzzle", "description": "Slide tiles",
         "image": "a.png", "url": "games/a.html", "game_url": "https://play.example/a",
         "averageRating": 4.5, "featured": true, "isPopular": false},
        {"id": "b", "name": "Blaster", "category": "arcade", "averageRating": 3, "onHomepage": false}
    ]"#;

    #[test]
    fn test_parse_fields_and_defaults() {
        let games = parse_catalog(SAMPLE).unwrap();
        assert_eq!(games.len(), 2);

        let a = &games[0];
        assert_eq!(a.game_url, "https://play.example/a");
        assert_eq!(a.average_rating, 4.5);
        assert!(a.featured && !a.is_popular);
        assert!(a.shown_on_homepage());

        let b = &games[1];
        assert_eq!(b.description, "");
        assert_eq!(b.image, "");
        assert_eq!(b.average_rating, 3.0);
        assert!(!b.shown_on_homepage());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(matches!(parse_catalog(r#"{"id": "a"}"#), Err(LoadError::Parse(_))));
        assert!(matches!(parse_catalog("<html>"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_loader_caches_success() {
        let mut loader = CatalogLoader::new(FakeSource::new(Ok(SAMPLE)), "assets/games.json");
        let first = block_on(loader.load()).unwrap();
        let second = block_on(loader.load()).unwrap();
        assert_eq!(first.len(), 2);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(loader.source.calls.get(), 1);
    }

    #[test]
    fn test_loader_surfaces_status() {
        let mut loader = CatalogLoader::new(FakeSource::new(Err(LoadError::Status(404))), "x");
        assert_eq!(block_on(loader.load()).unwrap_err(), LoadError::Status(404));
        assert!(loader.cached.is_none());
    }

    #[test]
    fn test_loader_surfaces_malformed_payload() {
        let mut loader = CatalogLoader::new(FakeSource::new(Ok("not json")), "x");
        assert!(matches!(block_on(loader.load()), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_preload_targets_skip_empty() {
        let games = parse_catalog(SAMPLE).unwrap();
        let targets: Vec<&str> = preload_targets(&games).collect();
        assert_eq!(targets, vec!["https://play.example/a"]);
    }
}
